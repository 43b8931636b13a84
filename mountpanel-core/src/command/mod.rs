//! Command path from the UI context to the mount controller

pub mod channel;
pub mod dispatcher;

pub use channel::{CommandChannel, CommandSource, COMMAND_QUEUE_DEPTH};
pub use dispatcher::CommandDispatcher;
