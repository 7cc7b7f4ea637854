//! Observer implementations

pub mod channel;
pub mod console;

pub use channel::{ChannelObserver, ObservedRecord};
pub use console::ConsoleObserver;

pub use crate::core::Observer;
