// ── Slice operations ──
//
// The bodies of the four async operations. Each performs exactly one
// request and settles into a payload (`Ok`) or a rejection (`Err`).
// Dispatching the lifecycle around them is `Catalog`'s job.
//
// Fetch-all catches every failure into a `status: false` payload.
// Mutations only do that for an HTTP error status; transport and decode
// failures reject.

use catalogo_api::{Reply, Resource, ResourceClient};
use tracing::warn;

use super::{FetchPayload, MutationPayload, Operation, messages};
use crate::error::CoreError;

/// List every record of `R`.
pub async fn fetch_all<R: Resource>(
    client: &ResourceClient<R>,
) -> Result<FetchPayload<R>, CoreError> {
    match client.list().await {
        Ok(listing) if listing.status => Ok(FetchPayload {
            status: true,
            items: listing.items,
            message: String::new(),
        }),
        Ok(_) => {
            warn!(resource = R::PLURAL, "backend reported fetch failure");
            Ok(FetchPayload {
                status: false,
                items: Vec::new(),
                message: messages::failed::<R>(Operation::Fetch),
            })
        }
        Err(err) => {
            let err = CoreError::from(err);
            warn!(resource = R::PLURAL, error = %err, "fetch failed");
            Ok(FetchPayload {
                status: false,
                items: Vec::new(),
                message: messages::failed_with::<R>(Operation::Fetch, &err.to_string()),
            })
        }
    }
}

/// Create `record` on the backend.
pub async fn create<R: Resource>(
    client: &ResourceClient<R>,
    record: R,
) -> Result<MutationPayload<R>, CoreError> {
    let result = client.create(&record).await;
    settle(Operation::Add, result, record)
}

/// Replace the backend record with the same code as `record`.
pub async fn update<R: Resource>(
    client: &ResourceClient<R>,
    record: R,
) -> Result<MutationPayload<R>, CoreError> {
    let result = client.update(&record).await;
    settle(Operation::Update, result, record)
}

/// Remove the backend record with the same code as `record`.
pub async fn remove<R: Resource>(
    client: &ResourceClient<R>,
    record: R,
) -> Result<MutationPayload<R>, CoreError> {
    let result = client.remove(&record).await;
    settle(Operation::Remove, result, record)
}

fn settle<R: Resource>(
    op: Operation,
    result: Result<Reply, catalogo_api::Error>,
    record: R,
) -> Result<MutationPayload<R>, CoreError> {
    match result {
        Ok(reply) => {
            if !reply.status {
                warn!(%op, code = %record.code(), message = %reply.message, "backend refused");
            }
            Ok(MutationPayload {
                status: reply.status,
                message: reply.message,
                record,
            })
        }
        Err(catalogo_api::Error::Status { status, .. }) => {
            warn!(%op, code = %record.code(), status, "backend answered with an error status");
            Ok(MutationPayload {
                status: false,
                message: messages::failed::<R>(op),
                record,
            })
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use catalogo_api::Product;
    use serde_json::json;

    fn product() -> Product {
        serde_json::from_value(json!({ "codigo": 5, "nome": "E" })).unwrap()
    }

    #[test]
    fn settle_passes_reply_through() {
        let reply = Reply {
            status: false,
            message: "duplicado".into(),
        };
        let payload = settle(Operation::Add, Ok(reply), product()).unwrap();
        assert!(!payload.status);
        assert_eq!(payload.message, "duplicado");
        assert_eq!(payload.record, product());
    }

    #[test]
    fn settle_turns_http_error_into_generic_failure() {
        let err = catalogo_api::Error::Status {
            status: 404,
            body: String::new(),
        };
        let payload = settle(Operation::Remove, Err(err), product()).unwrap();
        assert!(!payload.status);
        assert_eq!(payload.message, "Failed to remove product.");
    }

    #[test]
    fn settle_rejects_decode_failures() {
        let err = catalogo_api::Error::Deserialization {
            message: "eof".into(),
            body: String::new(),
        };
        let rejected = settle(Operation::Update, Err(err), product()).unwrap_err();
        assert!(matches!(rejected, CoreError::Internal(_)));
    }
}
