//! Client-facing messages of the products API.

pub const INVALID_ID: &str = "ID no válido";
pub const NAME_REQUIRED: &str = "El nombre del producto es obligatorio";
pub const NAME_TOO_LONG: &str = "El nombre del producto no puede superar los 100 caracteres";
pub const INVALID_VALUE: &str = "Valor no válido";
pub const PRICE_REQUIRED: &str = "El precio del producto no puede estar vacío";
pub const INVALID_PRICE: &str = "Precio no válido";
pub const INVALID_AVAILABILITY: &str = "Valor para disponibilidad no válido";
pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado";
pub const PRODUCT_DELETED: &str = "Producto eliminado";
