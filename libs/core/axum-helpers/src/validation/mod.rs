//! Declarative request validation.
//!
//! A route declares an ordered list of [`FieldChain`]s. Each chain reads one field
//! from the path parameters or the JSON body and runs its checks. Every failure
//! becomes a [`FieldError`]; when any exist the request is answered with
//! `400 {"errors": [...]}` and the handler never runs.
//!
//! ```text
//! request ─► RequestInput ─► chains (in declaration order) ─► [] ──► handler
//!                                                          └─► [..] ─► 400 ValidationErrors
//! ```

pub mod chain;
pub mod coerce;

pub use chain::{Check, CustomCheck, DEFAULT_MESSAGE, FieldChain, run_chains};
pub use coerce::{to_number, to_text};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;
use utoipa::ToSchema;

/// Where a validated field was read from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Body,
    Params,
}

/// One failed check.
///
/// ```json
/// { "type": "field", "value": "hola", "msg": "Valor no válido", "path": "price", "location": "body" }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Always `"field"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Offending value as sent, omitted when the field was absent
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<Value>,
    pub msg: String,
    pub path: String,
    pub location: Location,
}

impl FieldError {
    pub fn new(
        path: impl Into<String>,
        location: Location,
        value: Option<Value>,
        msg: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind: "field".to_string(),
            value,
            msg: msg.into().into_owned(),
            path: path.into(),
            location,
        }
    }
}

/// The `400 Bad Request` body: every failed check, in order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let summary = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.msg))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", summary)
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        tracing::debug!(errors = self.errors.len(), "Request failed validation: {}", self);
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

/// Typed DTO checks from the `validator` crate use the same envelope.
///
/// Field order follows the field names so responses stay deterministic.
impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(source: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = source.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let errors = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| {
                    let msg = err
                        .message
                        .clone()
                        .unwrap_or_else(|| Cow::Owned(err.code.to_string()));
                    FieldError::new(
                        field.to_string(),
                        Location::Body,
                        err.params.get("value").cloned(),
                        msg,
                    )
                })
            })
            .collect();

        Self { errors }
    }
}

/// Raw request data the chains read from
#[derive(Clone, Debug, Default)]
pub struct RequestInput {
    params: HashMap<String, String>,
    body: Value,
}

impl RequestInput {
    pub fn new(params: HashMap<String, String>, body: Value) -> Self {
        Self { params, body }
    }

    pub fn from_body(body: Value) -> Self {
        Self::new(HashMap::new(), body)
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Top-level body field; `None` when absent or the body is not an object
    pub fn body_field(&self, name: &str) -> Option<&Value> {
        self.body.as_object().and_then(|fields| fields.get(name))
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub(crate) fn value(&self, location: Location, name: &str) -> Option<Value> {
        match location {
            Location::Body => self.body_field(name).cloned(),
            Location::Params => self.param(name).map(|p| Value::String(p.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::json;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "name required"))]
        name: String,
        #[validate(range(exclusive_min = 0.0, message = "price must be positive"))]
        price: f64,
    }

    #[test]
    fn test_field_error_serialization_omits_absent_value() {
        let absent = FieldError::new("name", Location::Body, None, "required");
        let json = serde_json::to_value(&absent).unwrap();
        assert_eq!(
            json,
            json!({"type": "field", "msg": "required", "path": "name", "location": "body"})
        );

        let null = FieldError::new("name", Location::Body, Some(Value::Null), "required");
        assert_eq!(serde_json::to_value(&null).unwrap()["value"], Value::Null);
    }

    #[tokio::test]
    async fn test_validation_errors_response() {
        let errors = ValidationErrors::new(vec![FieldError::new(
            "id",
            Location::Params,
            Some(json!("abc")),
            "ID no válido",
        )]);

        let response = errors.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["errors"][0]["msg"], "ID no válido");
        assert_eq!(body["errors"][0]["location"], "params");
        assert_eq!(body["errors"][0]["value"], "abc");
    }

    #[test]
    fn test_from_validator_errors() {
        let sample = Sample {
            name: String::new(),
            price: -1.0,
        };
        let errors: ValidationErrors = sample.validate().unwrap_err().into();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.errors[0].path, "name");
        assert_eq!(errors.errors[0].msg, "name required");
        assert_eq!(errors.errors[1].path, "price");
        assert_eq!(errors.errors[1].msg, "price must be positive");
        assert_eq!(errors.errors[1].value, Some(json!(-1.0)));
    }

    #[test]
    fn test_request_input_lookups() {
        let input = RequestInput::new(
            [("id".to_string(), "7".to_string())].into(),
            json!({"name": "Mouse"}),
        );
        assert_eq!(input.param("id"), Some("7"));
        assert_eq!(input.body_field("name"), Some(&json!("Mouse")));
        assert_eq!(input.body_field("price"), None);
        assert_eq!(RequestInput::from_body(json!([1, 2])).body_field("name"), None);
    }
}
