//! Core type definitions used across the Catalog workspace.

pub mod response;

pub use response::{ApiErrorResponse, FieldError, FieldErrorsResponse, FieldLocation};
