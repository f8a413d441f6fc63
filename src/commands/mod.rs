//! Lifecycle command dispatchers.

pub mod stream;

pub use stream::StreamCommands;
