//! Streamctl - operator shell for stream pipelines
//!
//! Streamctl manages "stream" resources on a remote data-flow orchestration
//! server: named pipeline definitions written in a pipe-delimited DSL
//! (e.g. `http --port=9000 | hdfs`) that can be created, deployed with
//! per-deployment properties, undeployed, and destroyed.

pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod properties;
pub mod ui;

// Re-exports for convenience
pub use client::{HttpStreamClient, Page, Session, StreamDefinition, StreamOperations};
pub use commands::StreamCommands;
pub use config::Config;
pub use error::{ShellError, ShellResult};
pub use properties::{DeploymentProperties, PropertySource};
pub use ui::{Table, UserInput};
