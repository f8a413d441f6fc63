//! Stream lifecycle commands.
//!
//! Each command maps to exactly one remote operation and renders a
//! human-readable outcome. Commands are stateless across invocations; the
//! only sequencing is the confirm-then-act step guarding the `-all`
//! destructive commands. Remote failures propagate to the caller untouched.

use std::path::Path;

use crate::client::StreamOperations;
use crate::error::ShellResult;
use crate::properties;
use crate::ui::{Table, UserInput};

/// Dispatcher for the six stream lifecycle commands.
///
/// Constructed per invocation from an available session; availability
/// gating happens before this type exists (see [`crate::client::Session`]).
pub struct StreamCommands<'a> {
    ops: &'a dyn StreamOperations,
    input: &'a dyn UserInput,
}

impl<'a> StreamCommands<'a> {
    pub fn new(ops: &'a dyn StreamOperations, input: &'a dyn UserInput) -> Self {
        Self { ops, input }
    }

    /// List created streams as a (name, definition, status) table.
    pub fn list_streams(&self) -> ShellResult<Table> {
        let page = self.ops.list()?;
        let mut table = Table::new(vec!["Stream Name", "Stream Definition", "Status"]);
        for stream in &page.content {
            table.add_row(vec![
                stream.name.as_str(),
                stream.dsl_text.as_str(),
                stream.status.as_str(),
            ]);
        }
        Ok(table)
    }

    /// Create a new stream definition, optionally deploying it immediately.
    pub fn create_stream(&self, name: &str, definition: &str, deploy: bool) -> ShellResult<String> {
        self.ops.create(name, definition, deploy)?;
        Ok(if deploy {
            format!("Created and deployed new stream '{name}'")
        } else {
            format!("Created new stream '{name}'")
        })
    }

    /// Deploy a previously created stream.
    ///
    /// Properties come from at most one of the inline string or the file;
    /// resolution fails before any remote call is made.
    pub fn deploy_stream(
        &self,
        name: &str,
        inline_properties: Option<&str>,
        properties_file: Option<&Path>,
    ) -> ShellResult<String> {
        let properties = properties::resolve(inline_properties, properties_file)?;
        self.ops.deploy(name, &properties)?;
        Ok(format!("Deployed stream '{name}'"))
    }

    /// Un-deploy a previously deployed stream.
    pub fn undeploy_stream(&self, name: &str) -> ShellResult<String> {
        self.ops.undeploy(name)?;
        Ok(format!("Un-deployed stream '{name}'"))
    }

    /// Un-deploy all deployed streams, confirming first unless forced.
    ///
    /// A declined confirmation is a silent no-op: empty outcome, no remote
    /// call.
    pub fn undeploy_all_streams(&self, force: bool) -> ShellResult<String> {
        if force || self.confirmed("Really undeploy all streams?") {
            self.ops.undeploy_all()?;
            Ok("Un-deployed all the streams".to_string())
        } else {
            Ok(String::new())
        }
    }

    /// Destroy an existing stream.
    pub fn destroy_stream(&self, name: &str) -> ShellResult<String> {
        self.ops.destroy(name)?;
        Ok(format!("Destroyed stream '{name}'"))
    }

    /// Destroy all existing streams, confirming first unless forced.
    pub fn destroy_all_streams(&self, force: bool) -> ShellResult<String> {
        if force || self.confirmed("Really destroy all streams?") {
            self.ops.destroy_all()?;
            Ok("Destroyed all streams".to_string())
        } else {
            Ok(String::new())
        }
    }

    fn confirmed(&self, message: &str) -> bool {
        self.input
            .prompt_with_options(message, "n", "y", "n")
            .eq_ignore_ascii_case("y")
    }
}
