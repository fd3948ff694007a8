//! Agent-facing tool surface.
//!
//! The host framework discovers the tool through its definition (name,
//! description, JSON schema) and calls [`Tool::execute`] with loose JSON
//! arguments. Server-side failures never surface as `Err`; they are part
//! of the returned value, so the agent can read them and decide what to do.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::config::AppConfig;
use crate::services::submit::submit_answer_value;
use crate::utils::http_client::build_client;

/// A tool that can be executed by an agent.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name the agent uses to call this tool.
    fn name(&self) -> &str;

    /// Human-readable description handed to the agent.
    fn description(&self) -> &str;

    /// JSON Schema describing the tool's parameters.
    fn parameters(&self) -> Value;

    /// Executes the tool with JSON arguments.
    async fn execute(&self, args: Value) -> Result<Value, ToolError>;
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("invalid tool arguments: {0}")]
    InvalidArgs(#[from] serde_json::Error),
}

/// Arguments for [`PostRequest`], as the agent framework supplies them.
#[derive(Debug, Deserialize)]
pub struct SubmitArgs {
    pub url: String,
    pub payload: Map<String, Value>,
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
}

/// Sends a quiz answer as an HTTP POST and relays the server's verdict.
pub struct PostRequest {
    client: reqwest::Client,
}

impl PostRequest {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(&config.http)?,
        })
    }

    /// For callers that already hold a configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for PostRequest {
    fn name(&self) -> &str {
        "post_request"
    }

    fn description(&self) -> &str {
        "Send an HTTP POST request with a JSON payload to the given URL and \
         return the server response. The continuation URL is never dropped \
         from the response; once delay reaches 180 seconds the caller should \
         stop retrying and move on."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "Where to POST the payload"
                },
                "payload": {
                    "type": "object",
                    "description": "JSON body to send"
                },
                "headers": {
                    "type": "object",
                    "additionalProperties": { "type": "string" },
                    "description": "Optional request headers; defaults to Content-Type: application/json"
                }
            },
            "required": ["url", "payload"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value, ToolError> {
        let args: SubmitArgs = serde_json::from_value(args)?;
        let payload = Value::Object(args.payload);
        Ok(submit_answer_value(&self.client, &args.url, &payload, args.headers.as_ref()).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool() -> PostRequest {
        PostRequest::new(&AppConfig::default()).unwrap()
    }

    #[test]
    fn definition_lists_required_parameters() {
        let tool = tool();
        assert_eq!(tool.name(), "post_request");
        assert_eq!(tool.parameters()["required"], json!(["url", "payload"]));
    }

    #[tokio::test]
    async fn executes_a_submission_end_to_end() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/grade")
            .match_body(mockito::Matcher::Json(json!({"answer": "blue"})))
            .with_status(200)
            .with_body(r#"{"correct": true, "reason": "ok", "url": "http://x", "delay": 5}"#)
            .create_async()
            .await;

        let outcome = tool()
            .execute(json!({
                "url": format!("{}/grade", server.url()),
                "payload": {"answer": "blue"}
            }))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            json!({"correct": true, "reason": "ok", "url": "http://x", "delay": 5})
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn http_error_bodies_are_returned_not_raised() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/grade")
            .with_status(404)
            .with_body(r#"{"error": "not found"}"#)
            .create_async()
            .await;

        let outcome = tool()
            .execute(json!({
                "url": format!("{}/grade", server.url()),
                "payload": {}
            }))
            .await
            .unwrap();

        assert_eq!(outcome, json!({"error": "not found"}));
    }

    #[tokio::test]
    async fn rejects_args_without_a_url() {
        let tool = PostRequest::with_client(reqwest::Client::new());
        let err = tool
            .execute(json!({"payload": {}}))
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::InvalidArgs(_)));
    }

    #[tokio::test]
    async fn rejects_a_non_object_payload() {
        let err = tool()
            .execute(json!({"url": "http://localhost", "payload": "answer"}))
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::InvalidArgs(_)));
    }
}
