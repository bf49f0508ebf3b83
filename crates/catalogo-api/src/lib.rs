// catalogo-api: Async Rust client for the product catalog REST API

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::ProductsClient;
pub use error::Error;
pub use models::{CreateProductBody, ProductDto, ProductsPage, UpdateProductBody};
pub use transport::TransportConfig;
