//! Terminal-facing pieces: the confirmation prompt port and list rendering.

pub mod prompt;
pub mod table;

pub use prompt::{CannedInput, TerminalInput, UserInput};
pub use table::Table;
