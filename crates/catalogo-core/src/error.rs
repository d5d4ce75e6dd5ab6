// ── Core error types ──
//
// User-facing errors from catalogo-core. Consumers never see reqwest or
// serde errors directly; the `From<catalogo_api::Error>` impl translates
// transport-layer failures into these variants. The type is `Clone` so a
// settled operation can be both reduced into state and returned.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to backend at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    // ── Backend errors ───────────────────────────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<catalogo_api::Error> for CoreError {
    fn from(err: catalogo_api::Error) -> Self {
        let timed_out = err.is_timeout();
        match err {
            catalogo_api::Error::Transport(ref e) => {
                let url = e
                    .url()
                    .map_or_else(|| "<unknown>".into(), ToString::to_string);
                if timed_out {
                    CoreError::Timeout { url }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url,
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            catalogo_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            catalogo_api::Error::Tls(msg) => CoreError::Config {
                message: format!("TLS error: {msg}"),
            },
            catalogo_api::Error::Status { status, body: _ } => CoreError::Api {
                message: format!("backend returned HTTP {status}"),
                status: Some(status),
            },
            catalogo_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_http_code() {
        let err = CoreError::from(catalogo_api::Error::Status {
            status: 500,
            body: "boom".into(),
        });
        assert_eq!(
            err,
            CoreError::Api {
                message: "backend returned HTTP 500".into(),
                status: Some(500),
            }
        );
    }

    #[test]
    fn deserialization_becomes_internal() {
        let err = CoreError::from(catalogo_api::Error::Deserialization {
            message: "expected `,`".into(),
            body: String::new(),
        });
        assert_eq!(err.to_string(), "Internal error: Deserialization error: expected `,`");
    }

    #[test]
    fn tls_becomes_config() {
        let err = CoreError::from(catalogo_api::Error::Tls("bad pem".into()));
        assert!(matches!(err, CoreError::Config { message } if message == "TLS error: bad pem"));
    }
}
