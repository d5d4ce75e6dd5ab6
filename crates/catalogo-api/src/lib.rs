// catalogo-api: Async Rust client for the catalog REST backend

pub mod client;
pub mod error;
pub mod models;
pub mod resource;
pub mod transport;

pub use client::ResourceClient;
pub use error::Error;
pub use models::{Code, Listing, Reply};
pub use resource::{Category, Customer, Product, Resource};
pub use transport::{TlsMode, TransportConfig};
