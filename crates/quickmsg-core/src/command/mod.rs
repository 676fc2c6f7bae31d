//! The `/quick-message` command surface.
//!
//! Raw argument tokens are parsed into an [`Operation`], executed by the
//! dispatcher, and answered with a [`DisplayResult`] that a [`MessageSink`]
//! routes either to the invoking user or to the room.

pub mod display;
pub mod operation;
pub mod sink;
pub mod texts;

pub use display::{DisplayKind, DisplayResult};
pub use operation::Operation;
pub use sink::{CommandContext, MessageSink, deliver};
