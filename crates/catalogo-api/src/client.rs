// Resource HTTP client
//
// Wraps `reqwest::Client` with endpoint construction and body decoding
// for one catalog resource. Listing bodies are decoded regardless of the
// HTTP status (the backend signals failure through `status`); mutation
// bodies are only decoded for 2xx answers.

use std::marker::PhantomData;

use reqwest::Method;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{Listing, RawListing, Reply};
use crate::resource::Resource;

/// Raw HTTP client for a single catalog resource endpoint.
///
/// `ResourceClient<Product>` talks to `{base}/produto`,
/// `ResourceClient<Category>` to `{base}/categoria`, and so on.
pub struct ResourceClient<R> {
    http: reqwest::Client,
    endpoint: Url,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            endpoint: self.endpoint.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R> {
    /// Create a client on a pre-built `reqwest::Client`, usually one built
    /// by [`crate::TransportConfig::build_client`] and shared between resources.
    ///
    /// `base_url` is the backend root (e.g. `http://localhost:4000`); the
    /// resource path is appended to it.
    pub fn with_client(http: reqwest::Client, base_url: &Url) -> Result<Self, Error> {
        Ok(Self {
            http,
            endpoint: endpoint_url(base_url, R::PATH)?,
            _resource: PhantomData,
        })
    }

    /// The full resource endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    // ── Operations ───────────────────────────────────────────────────

    /// List every record.
    ///
    /// `GET {base}/{path}`
    pub async fn list(&self) -> Result<Listing<R>, Error> {
        debug!("GET {}", self.endpoint);

        let resp = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        let raw: RawListing = match serde_json::from_str(&body) {
            Ok(raw) => raw,
            Err(_) if !status.is_success() => {
                return Err(Error::Status {
                    status: status.as_u16(),
                    body,
                });
            }
            Err(e) => {
                return Err(Error::Deserialization {
                    message: e.to_string(),
                    body,
                });
            }
        };

        let items = match raw.rest.get(R::LIST_FIELD) {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(value) => Vec::<R>::deserialize(value).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: body.clone(),
            })?,
        };

        Ok(Listing {
            status: raw.status,
            items,
        })
    }

    /// Create a record.
    ///
    /// `POST {base}/{path}` with the record as JSON body.
    pub async fn create(&self, record: &R) -> Result<Reply, Error> {
        self.send_record(Method::POST, record).await
    }

    /// Replace the record with the same code.
    ///
    /// `PUT {base}/{path}` with the record as JSON body.
    pub async fn update(&self, record: &R) -> Result<Reply, Error> {
        self.send_record(Method::PUT, record).await
    }

    /// Remove the record with the same code.
    ///
    /// `DELETE {base}/{path}` with the record as JSON body.
    pub async fn remove(&self, record: &R) -> Result<Reply, Error> {
        self.send_record(Method::DELETE, record).await
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a record as JSON and decode the `{status, mensagem}` reply.
    ///
    /// Non-2xx answers become `Error::Status` without looking at the body.
    async fn send_record(&self, method: Method, record: &R) -> Result<Reply, Error> {
        debug!(code = %record.code(), "{} {}", method, self.endpoint);

        let resp = self
            .http
            .request(method, self.endpoint.clone())
            .json(record)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}

/// Join a resource path onto the base URL, keeping any base path prefix.
fn endpoint_url(base_url: &Url, path: &str) -> Result<Url, Error> {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    Ok(base.join(path)?)
}
