//! # catalog-entity
//!
//! Domain entity models for Catalog. Every struct in this crate
//! represents a database table row or the input used to create one.

pub mod product;
