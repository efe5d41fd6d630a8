//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
use crate::validation::ValidationErrors;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - one entry per failed check",
    content_type = "application/json",
    example = json!({
        "errors": [{
            "type": "field",
            "value": "hola",
            "msg": "Valor no válido",
            "path": "price",
            "location": "body"
        }]
    })
)]
pub struct BadRequestValidationResponse(pub ValidationErrors);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - body is not valid JSON",
    content_type = "application/json",
    example = json!({
        "error": "El cuerpo de la petición no es un JSON válido"
    })
)]
pub struct BadRequestJsonResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": "Producto no encontrado"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "Hubo un error en el servidor"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
