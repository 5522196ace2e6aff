//! REST client for the entity endpoints.
//!
//! List requests return `Result<_, ApiError>`. Mutations never fail with an
//! error: every response (and every transport failure) is folded into an
//! [`ApiOutcome`], so callers check a single `ok` flag.

use super::api_utils::{collection_url, item_url, list_url};
use contracts::domain::common::{EntityKind, RecordId};
use contracts::shared::api_outcome::ServerMessage;
use contracts::shared::{ApiOutcome, ListPayload, ListQuery, PaginatedResponse, Record};
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Server returned HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// Result of a create/update/delete call
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    pub outcome: ApiOutcome,
    /// The record echoed back by the server, if any
    pub record: Option<Record>,
}

impl MutationResult {
    fn failed(message: impl Into<String>) -> Self {
        Self {
            outcome: ApiOutcome::failure(message),
            record: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Record>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Fold status plus raw body into a `MutationResult`.
///
/// Accepted bodies: empty, `{"message": ...}`, `{"data": {...}, "message": ...}`
/// or the bare record itself.
pub fn parse_mutation_body(status: u16, body: &str, default_success: &str) -> MutationResult {
    let body = body.trim();
    let value: Option<serde_json::Value> = if body.is_empty() {
        None
    } else {
        serde_json::from_str(body).ok()
    };

    let envelope = value
        .clone()
        .and_then(|v| serde_json::from_value::<Envelope>(v).ok())
        .unwrap_or_default();

    let server = ServerMessage {
        message: envelope.message.clone(),
        error: envelope.error.clone(),
    };
    let outcome = ApiOutcome::from_status(status, Some(server), default_success);

    let record = if !outcome.ok {
        None
    } else if let Some(data) = envelope.data {
        Some(data)
    } else {
        value
            .and_then(Record::from_value)
            .filter(|r| r.id().is_some())
    };

    MutationResult { outcome, record }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// `GET /api/{segment}?page&per_page`
    pub async fn list(
        &self,
        kind: EntityKind,
        query: ListQuery,
    ) -> Result<PaginatedResponse<Record>, ApiError> {
        let url = list_url(&self.base, kind, &query);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status,
                message: error_text(&message, &response.status_text()),
            });
        }

        let payload = response
            .json::<ListPayload<Record>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(payload.into_page(query.per_page))
    }

    /// `DELETE /api/{segment}/{id}`
    pub async fn delete(&self, kind: EntityKind, id: &RecordId) -> MutationResult {
        let url = item_url(&self.base, kind, id);
        log::debug!("DELETE {}", url);

        match Request::delete(&url).send().await {
            Ok(response) => {
                read_mutation(response, &format!("{} deleted", kind.singular())).await
            }
            Err(e) => MutationResult::failed(ApiError::Network(e.to_string()).to_string()),
        }
    }

    /// `PUT /api/{segment}/{id}` with the changed fields
    pub async fn update(&self, kind: EntityKind, id: &RecordId, patch: &Record) -> MutationResult {
        let url = item_url(&self.base, kind, id);
        log::debug!("PUT {}", url);

        let request = match Request::put(&url).json(patch) {
            Ok(request) => request,
            Err(e) => return MutationResult::failed(ApiError::Encode(e.to_string()).to_string()),
        };
        match request.send().await {
            Ok(response) => {
                read_mutation(response, &format!("{} updated", kind.singular())).await
            }
            Err(e) => MutationResult::failed(ApiError::Network(e.to_string()).to_string()),
        }
    }

    /// `POST /api/{segment}`
    pub async fn create(&self, kind: EntityKind, record: &Record) -> MutationResult {
        let url = collection_url(&self.base, kind);
        log::debug!("POST {}", url);

        let request = match Request::post(&url).json(record) {
            Ok(request) => request,
            Err(e) => return MutationResult::failed(ApiError::Encode(e.to_string()).to_string()),
        };
        match request.send().await {
            Ok(response) => {
                read_mutation(response, &format!("{} created", kind.singular())).await
            }
            Err(e) => MutationResult::failed(ApiError::Network(e.to_string()).to_string()),
        }
    }
}

async fn read_mutation(response: Response, default_success: &str) -> MutationResult {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let result = parse_mutation_body(status, &body, default_success);
    if !result.outcome.ok {
        log::warn!("Mutation failed with HTTP {}: {}", status, result.outcome.message);
    }
    result
}

fn error_text(body: &str, status_text: &str) -> String {
    serde_json::from_str::<ServerMessage>(body)
        .ok()
        .and_then(|m| m.error.or(m.message))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| status_text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_content_is_success_with_default_message() {
        let result = parse_mutation_body(204, "", "Student deleted");
        assert!(result.outcome.ok);
        assert_eq!(result.outcome.message, "Student deleted");
        assert_eq!(result.record, None);
    }

    #[test]
    fn test_enveloped_record_is_returned() {
        let body = r#"{"message": "Saved", "data": {"id": 4, "first_name": "Ada"}}"#;
        let result = parse_mutation_body(200, body, "Student updated");
        assert!(result.outcome.ok);
        assert_eq!(result.outcome.message, "Saved");
        assert_eq!(result.record.unwrap().display("first_name"), "Ada");
    }

    #[test]
    fn test_bare_record_is_returned() {
        let result = parse_mutation_body(201, r#"{"id": "c-9", "name": "7B"}"#, "Class created");
        assert!(result.outcome.ok);
        assert_eq!(result.record.and_then(|r| r.id()), Some(RecordId::new("c-9")));
    }

    #[test]
    fn test_failure_uses_server_error_and_drops_record() {
        let body = r#"{"error": "Exam is locked", "data": {"id": 1}}"#;
        let result = parse_mutation_body(409, body, "Exam updated");
        assert!(!result.outcome.ok);
        assert_eq!(result.outcome.message, "Exam is locked");
        assert_eq!(result.record, None);
    }

    #[test]
    fn test_non_json_failure_reports_status() {
        let result = parse_mutation_body(500, "<html>oops</html>", "Deleted");
        assert!(!result.outcome.ok);
        assert_eq!(result.outcome.message, "Request failed with HTTP 500");
    }

    #[test]
    fn test_error_text_prefers_server_message() {
        assert_eq!(error_text(r#"{"message": "Forbidden role"}"#, "Forbidden"), "Forbidden role");
        assert_eq!(error_text("", "Not Found"), "Not Found");
    }
}
