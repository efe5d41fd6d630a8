//! Extractor that runs a route's validation chains before the handler.

use crate::errors::AppError;
use crate::validation::{FieldChain, RequestInput, ValidationErrors, run_chains};
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, RawPathParams, Request},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Validation rules of one route plus the typed input built once they pass.
///
/// ```ignore
/// struct CreateInput { name: String }
///
/// impl RuleSet for CreateInput {
///     fn chains() -> Vec<FieldChain> {
///         vec![FieldChain::body("name").not_empty().with_message("name is required")]
///     }
///
///     fn from_input(input: &RequestInput) -> Self {
///         Self { name: to_text(input.body_field("name")) }
///     }
/// }
/// ```
pub trait RuleSet: Sized {
    /// Chains in the order their errors should be reported
    fn chains() -> Vec<FieldChain>;

    /// Build the typed input. Only called when every chain passed.
    fn from_input(input: &RequestInput) -> Self;
}

/// Runs `T::chains()` against the path parameters and JSON body.
///
/// Rejections:
/// - `400 {"errors": [...]}` when any check fails
/// - `400 {"error": ...}` when a JSON body cannot be parsed
///
/// A missing body, or one sent without a JSON content type, reads as `{}` so the
/// field checks report what is missing.
///
/// ```ignore
/// async fn create(Validated(input): Validated<CreateInput>) -> impl IntoResponse { ... }
/// ```
pub struct Validated<T>(pub T);

impl<T, S> FromRequest<S> for Validated<T>
where
    T: RuleSet,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let params: HashMap<String, String> =
            match RawPathParams::from_request_parts(&mut parts, state).await {
                Ok(raw) => raw
                    .iter()
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect(),
                Err(_) => HashMap::new(),
            };

        let is_json = has_json_content_type(&parts.headers);
        let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(IntoResponse::into_response)?;

        let body = if is_json && !bytes.iter().all(u8::is_ascii_whitespace) {
            serde_json::from_slice(&bytes).map_err(|e| {
                tracing::debug!("Rejected malformed JSON body: {}", e);
                AppError::MalformedJson(e.to_string()).into_response()
            })?
        } else {
            Value::Object(Map::new())
        };

        let input = RequestInput::new(params, body);
        let errors = run_chains(&T::chains(), &input);
        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors).into_response());
        }

        Ok(Validated(T::from_input(&input)))
    }
}

/// `application/json` or any `application/*+json`, parameters ignored
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
