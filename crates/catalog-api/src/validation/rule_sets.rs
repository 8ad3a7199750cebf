//! Rule sets for the product routes.

use catalog_core::types::FieldLocation;

use super::rules::{Check, FieldRule, Rule, RuleSet};

/// `id` path parameter must be an integer.
pub const PRODUCT_ID: FieldRule = FieldRule {
    field: "id",
    location: FieldLocation::Params,
    rules: &[Rule {
        check: Check::Integer,
        message: "Not a valid ID",
    }],
};

/// `name` must be present and non-empty.
pub const NAME: FieldRule = FieldRule {
    field: "name",
    location: FieldLocation::Body,
    rules: &[Rule {
        check: Check::NotEmpty,
        message: "Product name is required",
    }],
};

/// `price` is checked three independent ways, so a missing price reports
/// three errors and a non-numeric one reports two.
pub const PRICE: FieldRule = FieldRule {
    field: "price",
    location: FieldLocation::Body,
    rules: &[
        Rule {
            check: Check::Numeric,
            message: "Price must be a number",
        },
        Rule {
            check: Check::GreaterThanZero,
            message: "Not a valid price",
        },
        Rule {
            check: Check::NotEmpty,
            message: "Product price is required",
        },
    ],
};

/// `availability` must be a boolean.
pub const AVAILABILITY: FieldRule = FieldRule {
    field: "availability",
    location: FieldLocation::Body,
    rules: &[Rule {
        check: Check::Boolean,
        message: "Product availability is required",
    }],
};

/// GET /products/{id}
pub static GET_PRODUCT: RuleSet = RuleSet {
    name: "get_product",
    fields: &[PRODUCT_ID],
};

/// POST /products
pub static CREATE_PRODUCT: RuleSet = RuleSet {
    name: "create_product",
    fields: &[NAME, PRICE],
};

/// PUT /products/{id}
pub static UPDATE_PRODUCT: RuleSet = RuleSet {
    name: "update_product",
    fields: &[PRODUCT_ID, NAME, PRICE, AVAILABILITY],
};

/// DELETE /products/{id}
pub static DELETE_PRODUCT: RuleSet = RuleSet {
    name: "delete_product",
    fields: &[PRODUCT_ID],
};
