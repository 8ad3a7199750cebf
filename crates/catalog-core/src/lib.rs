//! # catalog-core
//!
//! Core crate for Catalog. Contains the configuration schemas, the
//! product repository trait, shared response types, and the unified
//! error system.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
