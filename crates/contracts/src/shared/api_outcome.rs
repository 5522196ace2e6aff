//! Single success contract for mutating API calls.
//!
//! Delete/update endpoints answer with 200, 201, 202 or 204 depending on the
//! entity. The API client folds every status into `ApiOutcome` so the row
//! action layer only ever checks `ok`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiOutcome {
    pub ok: bool,
    pub message: String,
}

/// Optional body of a mutation response (`{"message": "..."}`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

pub fn is_success_status(status: u16) -> bool {
    matches!(status, 200 | 201 | 202 | 204)
}

impl ApiOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }

    /// Normalize an HTTP status plus the optional server message.
    ///
    /// `default_success` is used when a successful response carries no message;
    /// failures without a message report the status code.
    pub fn from_status(
        status: u16,
        server: Option<ServerMessage>,
        default_success: &str,
    ) -> Self {
        let server = server.unwrap_or_default();
        if is_success_status(status) {
            let message = server
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| default_success.to_string());
            Self::success(message)
        } else {
            let message = server
                .error
                .or(server.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| format!("Request failed with HTTP {}", status));
            Self::failure(message)
        }
    }
}
