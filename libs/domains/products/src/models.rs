use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::messages;

/// Longest name the products table accepts
pub const NAME_MAX_LEN: usize = 100;

/// Product as returned by read-one, create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[schema(example = 300.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List entry, without timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductSummary {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[schema(example = 300.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            availability: product.availability,
        }
    }
}

/// DTO for creating a new product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(
        length(min = 1, message = "El nombre del producto es obligatorio"),
        custom(function = "validate_name_fits")
    )]
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "Precio no válido"))]
    #[schema(example = 300.0)]
    pub price: f64,
    /// Defaults to `true`
    #[serde(default)]
    pub availability: Option<bool>,
}

/// DTO for replacing every editable field of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(
        length(min = 1, message = "El nombre del producto es obligatorio"),
        custom(function = "validate_name_fits")
    )]
    #[schema(example = "Monitor Curvo")]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "Precio no válido"))]
    #[schema(example = 400.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

/// Success envelope: `{"data": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

fn validate_name_fits(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ValidationError::new("length")
            .with_message(Cow::Borrowed(messages::NAME_TOO_LONG)));
    }
    Ok(())
}

impl Product {
    /// Build a product from a create request (used by the in-memory store)
    pub fn new(id: i32, input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            price: input.price,
            availability: input.availability.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace name, price and availability
    pub fn apply_update(&mut self, update: UpdateProduct) {
        self.name = update.name;
        self.price = update.price;
        self.availability = update.availability;
        self.updated_at = Utc::now();
    }

    pub fn set_availability(&mut self, availability: bool) {
        self.availability = availability;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create(name: &str, price: f64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            price,
            availability: None,
        }
    }

    #[test]
    fn test_product_serializes_camel_case_timestamps() {
        let product = Product::new(1, create("Mouse", 20.0));
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["availability"], true);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_summary_has_no_timestamps() {
        let summary: ProductSummary = Product::new(3, create("Teclado", 45.5)).into();
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({"id": 3, "name": "Teclado", "price": 45.5, "availability": true})
        );
    }

    #[test]
    fn test_create_validation() {
        assert!(create("Mouse", 20.0).validate().is_ok());

        let errors = create("", 0.0).validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("price"));
    }

    #[test]
    fn test_name_length_limit() {
        assert!(create(&"a".repeat(NAME_MAX_LEN), 1.0).validate().is_ok());

        let errors = create(&"a".repeat(NAME_MAX_LEN + 1), 1.0)
            .validate()
            .unwrap_err();
        let fields = errors.field_errors();
        let name_errors = fields["name"];
        assert_eq!(
            name_errors[0].message.as_deref(),
            Some(messages::NAME_TOO_LONG)
        );
    }

    #[test]
    fn test_apply_update_replaces_fields() {
        let mut product = Product::new(1, create("Mouse", 20.0));
        product.apply_update(UpdateProduct {
            name: "Mouse inalámbrico".to_string(),
            price: 25.0,
            availability: false,
        });

        assert_eq!(product.name, "Mouse inalámbrico");
        assert_eq!(product.price, 25.0);
        assert!(!product.availability);
        assert!(product.updated_at >= product.created_at);
    }
}
