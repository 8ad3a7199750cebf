//! # catalog-database
//!
//! PostgreSQL connection management, migrations, and the product store
//! implementations (PostgreSQL and in-memory).

pub mod connection;
pub mod provider;
pub mod repositories;

pub use connection::DatabasePool;
pub use provider::{ProductStore, StoreHandle};
