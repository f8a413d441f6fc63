//! Remote Stream Operations Port
//!
//! The dispatcher consumes this trait; `HttpStreamClient` is the production
//! implementation against the orchestration server's REST API. Failures are
//! propagated verbatim - nothing here retries or interprets server errors.

mod http;

pub use http::HttpStreamClient;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::ShellResult;
use crate::properties::DeploymentProperties;

/// A stream definition as reported by the server.
///
/// The DSL text is opaque here; it is passed through unparsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamDefinition {
    pub name: String,
    pub dsl_text: String,
    #[serde(default)]
    pub status: String,
}

/// One page of resources from a paged listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub content: Vec<T>,
    #[serde(default)]
    pub page: Option<PageMetadata>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number: u32,
}

/// The remote operations a connected shell can perform on streams.
pub trait StreamOperations: Send + Sync {
    /// Fetch the page of defined streams.
    fn list(&self) -> ShellResult<Page<StreamDefinition>>;

    /// Create a stream definition, optionally deploying it immediately.
    fn create(&self, name: &str, definition: &str, deploy: bool) -> ShellResult<()>;

    /// Deploy a previously created stream with the given properties.
    fn deploy(&self, name: &str, properties: &DeploymentProperties) -> ShellResult<()>;

    /// Un-deploy a deployed stream, keeping its definition.
    fn undeploy(&self, name: &str) -> ShellResult<()>;

    /// Un-deploy every deployed stream.
    fn undeploy_all(&self) -> ShellResult<()>;

    /// Destroy a stream definition.
    fn destroy(&self, name: &str) -> ShellResult<()>;

    /// Destroy every stream definition.
    fn destroy_all(&self) -> ShellResult<()>;
}

/// A shell session, holding the client handle if a server is configured.
///
/// Commands are available only while the handle exists; `stream_operations`
/// returning `None` is the structured "unavailable" signal the enclosing
/// shell reports instead of executing the command.
pub struct Session {
    client: Option<HttpStreamClient>,
}

impl Session {
    /// Build a session from configuration. No server configured means a
    /// disconnected session, not an error.
    pub fn from_config(config: &Config) -> ShellResult<Self> {
        let client = match &config.server {
            Some(server) => Some(HttpStreamClient::new(server, config.timeout())?),
            None => None,
        };
        Ok(Self { client })
    }

    /// Session with no remote target; every command is unavailable.
    pub fn disconnected() -> Self {
        Self { client: None }
    }

    pub fn available(&self) -> bool {
        self.client.is_some()
    }

    pub fn stream_operations(&self) -> Option<&dyn StreamOperations> {
        self.client.as_ref().map(|c| c as &dyn StreamOperations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disconnected_session_is_unavailable() {
        let session = Session::disconnected();
        assert!(!session.available());
        assert!(session.stream_operations().is_none());
    }

    #[test]
    fn session_from_empty_config_is_unavailable() {
        let session = Session::from_config(&Config::default()).unwrap();
        assert!(!session.available());
    }

    #[test]
    fn session_from_configured_server_is_available() {
        let config = Config {
            server: Some("http://localhost:9393".to_string()),
            ..Config::default()
        };
        let session = Session::from_config(&config).unwrap();
        assert!(session.available());
        assert!(session.stream_operations().is_some());
    }

    #[test]
    fn stream_definition_deserializes_server_shape() {
        let json = r#"{"name":"ticktock","dslText":"time | log","status":"deployed"}"#;
        let def: StreamDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.name, "ticktock");
        assert_eq!(def.dsl_text, "time | log");
        assert_eq!(def.status, "deployed");
    }

    #[test]
    fn page_tolerates_missing_metadata() {
        let json = r#"{"content":[]}"#;
        let page: Page<StreamDefinition> = serde_json::from_str(json).unwrap();
        assert!(page.content.is_empty());
        assert!(page.page.is_none());
    }
}
