// Error model shared by every client operation. A failed call never
// panics: it comes back as an `ApiError` value that the menu can print
// like any other result.

use crate::http::TransportError;
use thiserror::Error;

/// Result of every `ApiClient` operation. The success payload defaults to
/// the decoded JSON body.
pub type OperationResult<T = serde_json::Value> = Result<T, ApiError>;

/// Normalized failure of a client operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status other than the one the
    /// operation expects.
    #[error("{message} (status {status_code}{})", fmt_reason(.reason))]
    Rejected {
        message: String,
        status_code: u16,
        reason: Option<String>,
    },

    /// No HTTP status was received at all.
    #[error("{message} ({source})")]
    Transport {
        message: String,
        #[source]
        source: TransportError,
    },

    /// The expected status came back but the body was not JSON.
    #[error("{message} (status {status_code}, invalid JSON body: {source})")]
    Decode {
        message: String,
        status_code: u16,
        #[source]
        source: serde_json::Error,
    },
}

fn fmt_reason(reason: &Option<String>) -> String {
    match reason {
        Some(r) => format!(" {}", r),
        None => String::new(),
    }
}

impl ApiError {
    /// Human-readable message, e.g. `Failed to update post.`
    pub fn message(&self) -> &str {
        match self {
            ApiError::Rejected { message, .. }
            | ApiError::Transport { message, .. }
            | ApiError::Decode { message, .. } => message,
        }
    }

    /// Status code of the response, absent for transport faults.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status_code, .. } | ApiError::Decode { status_code, .. } => {
                Some(*status_code)
            }
            ApiError::Transport { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { reason, .. } => reason.as_deref(),
            _ => None,
        }
    }

    /// What went wrong underneath: the status reason phrase for a
    /// rejected call, the cause for decode and transport failures.
    pub fn detail(&self) -> Option<String> {
        match self {
            ApiError::Rejected { reason, .. } => reason.clone(),
            ApiError::Transport { source, .. } => Some(source.to_string()),
            ApiError::Decode { source, .. } => Some(format!("invalid JSON body: {}", source)),
        }
    }

    /// The `{error, status_code, reason}` record printed by the menu.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.message(),
            "status_code": self.status_code(),
            "reason": self.detail(),
        })
    }
}
