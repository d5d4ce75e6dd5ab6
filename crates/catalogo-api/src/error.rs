use thiserror::Error;

/// Top-level error type for the `catalogo-api` crate.
///
/// Covers every failure mode of a single request against the backend:
/// transport, URL construction, TLS setup, HTTP status and body decoding.
/// `catalogo-core` maps these into user-facing errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Backend ─────────────────────────────────────────────────────
    /// The backend answered with a non-success HTTP status.
    #[error("Backend returned HTTP {status}")]
    Status { status: u16, body: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the request ran past the transport timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_are_not_timeouts() {
        let err = Error::Status {
            status: 503,
            body: String::new(),
        };
        assert!(!err.is_timeout());
        assert_eq!(err.to_string(), "Backend returned HTTP 503");
    }

    #[test]
    fn deserialization_message_is_displayed() {
        let err = Error::Deserialization {
            message: "expected value".into(),
            body: "<html>".into(),
        };
        assert_eq!(err.to_string(), "Deserialization error: expected value");
    }
}
