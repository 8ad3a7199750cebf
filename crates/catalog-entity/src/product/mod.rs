//! Product domain entities.

pub mod model;

pub use model::{CreateProduct, Product, ProductSummary, UpdateProduct};
