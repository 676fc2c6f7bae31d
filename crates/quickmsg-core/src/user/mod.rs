//! User domain module.
//!
//! Users are never stored on their own; a [`UserRef`] is stamped onto each
//! quick message as its creator and last updater.

mod model;

pub use model::UserRef;
