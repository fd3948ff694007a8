use std::collections::HashMap;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::{ErrorBody, SubmitError};
use crate::models::review::AnswerReview;
use crate::utils::http_client::{headers_from_map, post_json};

/// Sends a quiz answer to `url` and normalizes the server's verdict.
///
/// A 4xx/5xx status comes back as [`SubmitError::Status`] with the body
/// kept verbatim; the caller decides what to do with it. Nothing here
/// retries. Continuation is driven by the `url` and `delay` the caller
/// receives.
pub async fn submit_answer(
    client: &reqwest::Client,
    url: &str,
    payload: &Value,
    headers: Option<&HashMap<String, String>>,
) -> Result<AnswerReview, SubmitError> {
    let header_map = headers.map(headers_from_map).transpose()?;

    info!(
        "📤 Sending answer to {}:\n{}",
        url,
        serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
    );

    let response = post_json(client, url, payload, header_map)
        .await
        .map_err(|e| classify_send_error(e, url))?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let text = response
            .text()
            .await
            .map_err(|e| classify_send_error(e, url))?;
        let body = ErrorBody::from_text(text);
        warn!("❌ HTTP error from {}: status = {}, body = {}", url, status, body);
        return Err(SubmitError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| classify_send_error(e, url))?;
    let review: AnswerReview =
        serde_json::from_str(&text).map_err(|source| SubmitError::MalformedBody {
            status: status.as_u16(),
            source,
        })?;

    if review.past_stop_threshold() {
        // Advisory for the caller; the record itself is unchanged.
        info!(
            "⏳ Server delay {}s is at or past the stop threshold, caller should stop retrying",
            review.delay_secs()
        );
    }

    info!(
        "✅ Got the response:\n{}",
        serde_json::to_string_pretty(&review).unwrap_or_default()
    );

    Ok(review)
}

/// Same contract the host agent expects from a tool call: every failure
/// becomes a plain JSON value, never an `Err`.
pub async fn submit_answer_value(
    client: &reqwest::Client,
    url: &str,
    payload: &Value,
    headers: Option<&HashMap<String, String>>,
) -> Value {
    match submit_answer(client, url, payload, headers).await {
        Ok(review) => {
            serde_json::to_value(&review).unwrap_or_else(|e| Value::String(e.to_string()))
        }
        Err(SubmitError::Status { body, .. }) => body.into_value(),
        Err(e) => {
            warn!("⚠️ Unexpected error submitting answer: {}", e);
            Value::String(e.to_string())
        }
    }
}

fn classify_send_error(err: reqwest::Error, url: &str) -> SubmitError {
    if err.is_timeout() {
        SubmitError::Timeout {
            url: url.to_string(),
        }
    } else {
        SubmitError::Transport(err)
    }
}
