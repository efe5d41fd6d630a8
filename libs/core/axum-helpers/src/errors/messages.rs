//! Response messages shared by every service.
//!
//! Clients of this API expect Spanish messages, keep new entries consistent.

pub const INTERNAL_ERROR: &str = "Hubo un error en el servidor";
pub const MALFORMED_JSON: &str = "El cuerpo de la petición no es un JSON válido";
pub const ROUTE_NOT_FOUND: &str = "Ruta no encontrada";
