//! Request rule sets for the product routes.
//!
//! | Route | Checks (in order) |
//! |---|---|
//! | `GET/PATCH/DELETE /{id}` | id |
//! | `POST /` | name, price |
//! | `PUT /{id}` | id, name, price, availability |

use axum_helpers::RuleSet;
use axum_helpers::validation::{FieldChain, RequestInput, to_number, to_text};
use serde_json::Value;

use crate::messages;
use crate::models::{CreateProduct, UpdateProduct};

fn id_chain() -> FieldChain {
    FieldChain::param("id")
        .is_int()
        .with_message(messages::INVALID_ID)
}

fn name_chain() -> FieldChain {
    FieldChain::body("name")
        .not_empty()
        .with_message(messages::NAME_REQUIRED)
}

fn price_chain() -> FieldChain {
    FieldChain::body("price")
        .is_numeric()
        .with_message(messages::INVALID_VALUE)
        .not_empty()
        .with_message(messages::PRICE_REQUIRED)
        .custom(is_positive)
        .with_message(messages::INVALID_PRICE)
}

fn availability_chain() -> FieldChain {
    FieldChain::body("availability")
        .is_boolean()
        .with_message(messages::INVALID_AVAILABILITY)
}

fn is_positive(value: Option<&Value>) -> bool {
    to_number(value) > 0.0
}

/// Integer id that already passed the `^[+-]?[0-9]+$` check.
///
/// Values beyond the `i64` range saturate; they can never match a stored row.
fn parse_id(input: &RequestInput) -> i64 {
    let raw = input.param("id").unwrap_or_default();
    raw.parse().unwrap_or(if raw.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// `true`/`1` and `false`/`0`, anything else is not a boolean
fn parse_bool(value: Option<&Value>) -> Option<bool> {
    match to_text(value).as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Path id of read-one, partial update and delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i64);

impl RuleSet for ProductId {
    fn chains() -> Vec<FieldChain> {
        vec![id_chain()]
    }

    fn from_input(input: &RequestInput) -> Self {
        Self(parse_id(input))
    }
}

impl RuleSet for CreateProduct {
    fn chains() -> Vec<FieldChain> {
        vec![name_chain(), price_chain()]
    }

    fn from_input(input: &RequestInput) -> Self {
        Self {
            name: to_text(input.body_field("name")),
            price: to_number(input.body_field("price")),
            availability: parse_bool(input.body_field("availability")),
        }
    }
}

/// Path id plus the replacement fields of a full update
#[derive(Debug, Clone, PartialEq)]
pub struct ProductReplacement {
    pub id: i64,
    pub changes: UpdateProduct,
}

impl RuleSet for ProductReplacement {
    fn chains() -> Vec<FieldChain> {
        vec![id_chain(), name_chain(), price_chain(), availability_chain()]
    }

    fn from_input(input: &RequestInput) -> Self {
        Self {
            id: parse_id(input),
            changes: UpdateProduct {
                name: to_text(input.body_field("name")),
                price: to_number(input.body_field("price")),
                availability: parse_bool(input.body_field("availability")).unwrap_or_default(),
            },
        }
    }
}
