// Catalog resource definitions
//
// A `Resource` ties a record type to its endpoint and to the field the
// backend uses for listings. Records are otherwise opaque: only `codigo`
// is modelled, everything else rides along in `fields`.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::Code;

/// A record type served by the catalog backend.
pub trait Resource:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Endpoint path relative to the backend base URL.
    const PATH: &'static str;

    /// Name of the array field in a listing body.
    const LIST_FIELD: &'static str;

    /// Lowercase singular label, used in status messages.
    const SINGULAR: &'static str;

    /// Lowercase plural label, used in status messages.
    const PLURAL: &'static str;

    /// The record's unique code.
    fn code(&self) -> &Code;
}

// ── Product ──────────────────────────────────────────────────────────

/// Catalog item, served from `/produto`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "codigo")]
    pub code: Code,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Resource for Product {
    const PATH: &'static str = "produto";
    const LIST_FIELD: &'static str = "listaProdutos";
    const SINGULAR: &'static str = "product";
    const PLURAL: &'static str = "products";

    fn code(&self) -> &Code {
        &self.code
    }
}

// ── Category ─────────────────────────────────────────────────────────

/// Product category, served from `/categoria`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "codigo")]
    pub code: Code,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Resource for Category {
    const PATH: &'static str = "categoria";
    const LIST_FIELD: &'static str = "listaCategorias";
    const SINGULAR: &'static str = "category";
    const PLURAL: &'static str = "categories";

    fn code(&self) -> &Code {
        &self.code
    }
}

// ── Customer ─────────────────────────────────────────────────────────

/// Store customer, served from `/cliente`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "codigo")]
    pub code: Code,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Resource for Customer {
    const PATH: &'static str = "cliente";
    const LIST_FIELD: &'static str = "listaClientes";
    const SINGULAR: &'static str = "customer";
    const PLURAL: &'static str = "customers";

    fn code(&self) -> &Code {
        &self.code
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_keeps_unknown_fields_through_a_round_trip() {
        let raw = json!({ "codigo": 1, "nome": "A", "preco": 9.5 });
        let product: Product = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(product.code(), &Code::Number(1));
        assert_eq!(product.fields.get("nome"), Some(&json!("A")));
        assert_eq!(serde_json::to_value(&product).unwrap(), raw);
    }

    #[test]
    fn record_without_code_is_rejected() {
        let err = serde_json::from_value::<Category>(json!({ "descricao": "x" }));
        assert!(err.is_err());
    }
}
