// ── Runtime connection configuration ──
//
// Describes *how* to reach the catalog backend. Never touches disk:
// the CLI (or any other application root) builds a `CatalogConfig` and
// hands it to `Catalog::new`.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Default backend the catalog talks to.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed development backends).
    DangerAcceptInvalid,
}

/// Configuration for one catalog backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Backend root URL; resource paths are appended to it.
    pub url: Url,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Per-request timeout. A request that runs past it settles its
    /// operation as failed with `CoreError::Timeout`, so a slice never
    /// stays `Pending` indefinitely.
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Config for `url` with default TLS and timeout.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        #[allow(clippy::unwrap_used)]
        let url = Url::parse(DEFAULT_BASE_URL).unwrap();
        Self::new(url)
    }
}
