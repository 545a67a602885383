//! Product Store Library
//!
//! Data access for the `products` table. Every repository operation acquires
//! a connection from the externally supplied provider, executes one
//! parameterized statement, and releases the connection on every exit path.

pub mod config;
pub mod infra;
pub mod repository;

pub use config::ProductStoreConfig;
pub use infra::Database;
pub use repository::{ProductRepository, ProductStore};
