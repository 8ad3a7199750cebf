//! Request DTOs with validation.
//!
//! Deserialization accepts the same value forms the rule sets accept
//! (numeric strings for `price`, `"true"`/`"0"` style flags), so a body
//! that passed the middleware always deserializes.

use serde::Deserialize;
use validator::Validate;

use catalog_entity::product::{CreateProduct, UpdateProduct};

/// POST /api/products body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductRequest {
    /// Product name.
    #[serde(deserialize_with = "lenient::text")]
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,
    /// Unit price.
    #[serde(deserialize_with = "lenient::number")]
    #[validate(range(exclusive_min = 0.0, message = "Not a valid price"))]
    pub price: f64,
    /// Initial availability.
    #[serde(default, deserialize_with = "lenient::optional_flag")]
    pub availability: Option<bool>,
}

impl From<CreateProductRequest> for CreateProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
            availability: req.availability,
        }
    }
}

/// PUT /api/products/{id} body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProductRequest {
    /// Product name.
    #[serde(deserialize_with = "lenient::text")]
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,
    /// Unit price.
    #[serde(deserialize_with = "lenient::number")]
    #[validate(range(exclusive_min = 0.0, message = "Not a valid price"))]
    pub price: f64,
    /// Availability.
    #[serde(deserialize_with = "lenient::flag")]
    pub availability: bool,
}

impl From<UpdateProductRequest> for UpdateProduct {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
            availability: req.availability,
        }
    }
}

mod lenient {
    use serde::de::{Deserializer, Error};
    use serde::Deserialize;
    use serde_json::Value;

    use crate::validation::rules::{as_flag, numeric_value};

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(D::Error::custom(format!("expected text, found {other}"))),
        }
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        numeric_value(Some(&value))
            .ok_or_else(|| D::Error::custom(format!("expected a number, found {value}")))
    }

    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let value = Value::deserialize(deserializer)?;
        as_flag(Some(&value))
            .ok_or_else(|| D::Error::custom(format!("expected a boolean, found {value}")))
    }

    pub fn optional_flag<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<bool>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            value => as_flag(Some(&value))
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("expected a boolean, found {value}"))),
        }
    }
}
