//! Blocking HTTP client for the orchestration server's stream endpoints.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Serialize;

use crate::error::{ShellError, ShellResult};
use crate::properties::DeploymentProperties;

use super::{Page, StreamDefinition, StreamOperations};

/// HTTP implementation of [`StreamOperations`].
///
/// One synchronous request per operation; a call either returns or fails
/// outright on transport error. Nothing is retried.
pub struct HttpStreamClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct CreateStreamRequest<'a> {
    name: &'a str,
    definition: &'a str,
    deploy: bool,
}

impl HttpStreamClient {
    pub fn new(endpoint: &str, timeout: Duration) -> ShellResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-2xx response to `Server`, preserving the body verbatim.
    fn check(&self, response: Response) -> ShellResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().unwrap_or_default();
            Err(ShellError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl StreamOperations for HttpStreamClient {
    fn list(&self) -> ShellResult<Page<StreamDefinition>> {
        let response = self
            .client
            .get(self.url("/streams/definitions"))
            .send()?;
        Ok(self.check(response)?.json()?)
    }

    fn create(&self, name: &str, definition: &str, deploy: bool) -> ShellResult<()> {
        let body = CreateStreamRequest {
            name,
            definition,
            deploy,
        };
        let response = self
            .client
            .post(self.url("/streams/definitions"))
            .json(&body)
            .send()?;
        self.check(response).map(|_| ())
    }

    fn deploy(&self, name: &str, properties: &DeploymentProperties) -> ShellResult<()> {
        let response = self
            .client
            .post(self.url(&format!("/streams/deployments/{name}")))
            .json(properties)
            .send()?;
        self.check(response).map(|_| ())
    }

    fn undeploy(&self, name: &str) -> ShellResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/streams/deployments/{name}")))
            .send()?;
        self.check(response).map(|_| ())
    }

    fn undeploy_all(&self) -> ShellResult<()> {
        let response = self.client.delete(self.url("/streams/deployments")).send()?;
        self.check(response).map(|_| ())
    }

    fn destroy(&self, name: &str) -> ShellResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/streams/definitions/{name}")))
            .send()?;
        self.check(response).map(|_| ())
    }

    fn destroy_all(&self) -> ShellResult<()> {
        let response = self.client.delete(self.url("/streams/definitions")).send()?;
        self.check(response).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpStreamClient::new("http://localhost:9393", Duration::from_secs(30)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9393");
    }

    #[test]
    fn test_client_endpoint_normalization() {
        let client =
            HttpStreamClient::new("http://localhost:9393/", Duration::from_secs(30)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9393");
    }

    #[test]
    fn create_request_serializes_deploy_flag() {
        let body = CreateStreamRequest {
            name: "ticktock",
            definition: "time | log",
            deploy: true,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "ticktock", "definition": "time | log", "deploy": true})
        );
    }
}
