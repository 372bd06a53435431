use serde_json::Value;

use crate::http::{HttpError, Response};

/// Failure of one call against the remote API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered outside 2xx, optionally with a `detail` message.
    #[error("API returned status {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    /// A 2xx response whose body was not what we expected.
    #[error("failed to parse response: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build a status error from a non-2xx response, keeping the server's detail.
    pub fn from_response(response: &Response) -> Self {
        Self::Status {
            status: response.status,
            detail: error_detail(&response.body),
        }
    }

    /// The server-provided message, if the failure carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        Self::Transport(err.message)
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

/// A typed API result.
pub type ApiResult<T> = Result<T, ApiError>;

/// Extract the human-readable message from an error body.
///
/// Accepts `{"detail": "..."}` and the validation shape
/// `{"detail": [{"loc": [...], "msg": "..."}, ...]}`, whose messages are
/// joined with `"; "`. Anything else yields `None`.
pub fn error_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| {
                    let msg = item.get("msg")?.as_str()?;
                    let field = item
                        .get("loc")
                        .and_then(Value::as_array)
                        .and_then(|loc| loc.last())
                        .and_then(Value::as_str);
                    Some(match field {
                        Some(field) => format!("{field}: {msg}"),
                        None => msg.to_owned(),
                    })
                })
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string() {
        let body = br#"{"detail": "El producto asociado no existe."}"#;
        assert_eq!(
            error_detail(body).as_deref(),
            Some("El producto asociado no existe.")
        );
    }

    #[test]
    fn test_detail_validation_list() {
        let body = br#"{"detail": [
            {"loc": ["body", "cantidad"], "msg": "ensure this value is greater than 0", "type": "value_error"},
            {"loc": ["body", "precio_unitario"], "msg": "field required", "type": "value_error.missing"}
        ]}"#;
        assert_eq!(
            error_detail(body).as_deref(),
            Some("cantidad: ensure this value is greater than 0; precio_unitario: field required")
        );
    }

    #[test]
    fn test_detail_absent_or_unparseable() {
        assert_eq!(error_detail(b"Internal Server Error"), None);
        assert_eq!(error_detail(br#"{"message": "nope"}"#), None);
        assert_eq!(error_detail(br#"{"detail": "  "}"#), None);
        assert_eq!(error_detail(b""), None);
    }

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 404,
            detail: Some("Pais no encontrado".to_owned()),
        };
        assert_eq!(err.to_string(), "API returned status 404: Pais no encontrado");
        assert_eq!(err.detail(), Some("Pais no encontrado"));

        let bare = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(bare.to_string(), "API returned status 500");
    }

    #[test]
    fn test_transport_error_has_no_detail() {
        let err: ApiError = HttpError::new("connection refused").into();
        assert_eq!(err.detail(), None);
        assert_eq!(err.status(), None);
    }
}
