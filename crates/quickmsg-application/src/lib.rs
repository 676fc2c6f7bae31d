pub mod command_dispatcher;
pub mod message_storage_manager;

pub use command_dispatcher::CommandDispatcher;
pub use message_storage_manager::{MessageStorageManager, ReconcileReport};
