// Backend response types
//
// Every endpoint answers with a JSON body carrying a boolean `status`
// flag. Listings add a resource-specific array field (`listaProdutos`,
// `listaCategorias`, ...); mutations add a `mensagem` string.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Record identity ──────────────────────────────────────────────────

/// Unique identifier of a catalog record (`codigo` on the wire).
///
/// The backend is not consistent about the JSON type, so both numbers
/// and strings are accepted. Equality is type-sensitive: `1` and `"1"`
/// are different codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Code {
    Number(i64),
    Text(String),
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Code {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Code {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Code {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

// ── Listing ──────────────────────────────────────────────────────────

/// Decoded answer to a `GET` on a resource endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<R> {
    /// The backend's own success flag.
    pub status: bool,
    /// Records from the resource's list field. Empty when absent or null.
    pub items: Vec<R>,
}

/// Raw listing body before the resource-specific field is picked out.
#[derive(Debug, Deserialize)]
pub(crate) struct RawListing {
    #[serde(default)]
    pub status: bool,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

// ── Mutation reply ───────────────────────────────────────────────────

/// Body returned by `POST`, `PUT` and `DELETE`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(default)]
    pub status: bool,
    #[serde(default, rename = "mensagem")]
    pub message: String,
}
