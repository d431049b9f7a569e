//! HTTP client for the job-plan persistence endpoint.
//!
//! Fire-and-forget contract: one POST per user action, no retry, no
//! idempotency key. The request body is the bare serialized entity.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use super::error::ApiError;
use crate::model::{Activity, JobPlanDraft};

/// Response from a successful create call.
///
/// The endpoint either assigns an identifier or echoes the input; we keep
/// the id when one is present and the raw body for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    pub id: Option<String>,
    pub body: serde_json::Value,
}

impl SubmitReceipt {
    fn from_value(body: serde_json::Value) -> Self {
        let id = body
            .get("id")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());
        Self { id, body }
    }
}

/// Contract the wizard depends on for persisting drafts and activities.
#[async_trait]
pub trait JobPlanApi: Send + Sync {
    async fn create_job_plan(&self, draft: &JobPlanDraft) -> Result<SubmitReceipt, ApiError>;
    async fn create_activity(&self, activity: &Activity) -> Result<SubmitReceipt, ApiError>;
}

/// reqwest-backed implementation of [`JobPlanApi`].
pub struct HttpJobPlanApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpJobPlanApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("jobplanner/0.1.0")
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    async fn post_json<T: Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<SubmitReceipt, ApiError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    ApiError::network("request timed out")
                } else {
                    ApiError::network(err.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string();
            let message = response
                .text()
                .await
                .ok()
                .and_then(|text| embedded_error_message(&text))
                .unwrap_or(reason);
            tracing::warn!(%url, status = status.as_u16(), "create call rejected");
            return Err(ApiError::http(status.as_u16(), message));
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|err| ApiError::network(format!("invalid response body: {err}")))?;
        Ok(SubmitReceipt::from_value(value))
    }
}

#[async_trait]
impl JobPlanApi for HttpJobPlanApi {
    async fn create_job_plan(&self, draft: &JobPlanDraft) -> Result<SubmitReceipt, ApiError> {
        self.post_json("add-job-plan", draft).await
    }

    async fn create_activity(&self, activity: &Activity) -> Result<SubmitReceipt, ApiError> {
        self.post_json("add-activity", activity).await
    }
}

/// Pull an `error` or `message` field out of a failure body, if it is JSON.
fn embedded_error_message(text: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    for key in ["error", "message"] {
        if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
            if !msg.is_empty() {
                return Some(msg.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ActivityCategory;

    #[test]
    fn test_embedded_error_message() {
        assert_eq!(
            embedded_error_message(r#"{"error":"duplicate plan"}"#),
            Some("duplicate plan".to_string())
        );
        assert_eq!(
            embedded_error_message(r#"{"message":"bad payload"}"#),
            Some("bad payload".to_string())
        );
        assert_eq!(embedded_error_message("<html>502</html>"), None);
        assert_eq!(embedded_error_message(r#"{"error":""}"#), None);
    }

    #[test]
    fn test_receipt_extracts_id() {
        let receipt = SubmitReceipt::from_value(serde_json::json!({"id": "jp-42", "ok": true}));
        assert_eq!(receipt.id.as_deref(), Some("jp-42"));

        // Echoed-input responses carry no id
        let receipt = SubmitReceipt::from_value(serde_json::json!({"title": "Main post"}));
        assert_eq!(receipt.id, None);
    }

    #[test]
    fn test_activity_body_is_bare_entity() {
        // The wire body is the activity itself, not a { user_id, activity } wrapper
        let activity = Activity::new("Ward round", ActivityCategory::Dcc);
        let json = serde_json::to_value(&activity).unwrap();
        assert!(json.get("activity").is_none());
        assert!(json.get("user_id").is_none());
        assert_eq!(json["category"], "DCC");
    }
}
