// ── Domain model ──
//
// Canonical product types consumed by the store and the CLI. Wire DTOs
// live in `catalogo-api`; see `convert` for the mapping.

use serde::{Deserialize, Serialize};

use crate::validation::{Field, ValidationError, parse_price, validate_required};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier. Empty until created.
    pub id: String,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub price: f64,
    /// Merchant code. Immutable after creation.
    pub sku: String,
}

/// One page of products, replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductsList {
    pub total_count: u64,
    pub list: Vec<Product>,
    /// Non-zero when more pages follow. Not a page number.
    pub next_page: u32,
}

impl ProductsList {
    /// A single-product page, as produced by a search.
    pub fn single(product: Product) -> Self {
        Self {
            total_count: 1,
            list: vec![product],
            next_page: 0,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page > 0
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Find a product on this page by SKU.
    pub fn find_by_sku(&self, sku: &str) -> Option<&Product> {
        self.list.iter().find(|p| p.sku == sku)
    }
}

/// Validated input for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub active: bool,
    pub price: f64,
    pub sku: String,
}

/// Validated input for updating a product. The SKU cannot change.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub price: f64,
}

/// Raw form input, exactly as typed by the user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductForm {
    pub id: String,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub price: String,
    pub sku: String,
}

impl ProductForm {
    /// Validate for `POST`: name, description and SKU required, price a
    /// non-negative number.
    pub fn validate_new(&self) -> Result<NewProduct, ValidationError> {
        Ok(NewProduct {
            name: validate_required(Field::Name, &self.name)?,
            description: validate_required(Field::Description, &self.description)?,
            price: parse_price(&self.price)?,
            sku: validate_required(Field::Sku, &self.sku)?,
            active: self.active,
        })
    }

    /// Validate for `PUT`: id, name and description required, price a
    /// non-negative number. The SKU is ignored.
    pub fn validate_update(&self) -> Result<ProductUpdate, ValidationError> {
        Ok(ProductUpdate {
            id: validate_required(Field::Id, &self.id)?,
            name: validate_required(Field::Name, &self.name)?,
            description: validate_required(Field::Description, &self.description)?,
            price: parse_price(&self.price)?,
            active: self.active,
        })
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            active: product.active,
            price: product.price.to_string(),
            sku: product.sku.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> ProductForm {
        ProductForm {
            id: "p1".into(),
            name: "Foo".into(),
            description: "Bar".into(),
            active: true,
            price: "9.99".into(),
            sku: "A1".into(),
        }
    }

    #[test]
    fn validate_new_requires_sku() {
        let mut f = form();
        f.sku = " ".into();
        assert_eq!(
            f.validate_new(),
            Err(ValidationError::Required { field: Field::Sku })
        );
    }

    #[test]
    fn validate_update_ignores_sku() {
        let mut f = form();
        f.sku.clear();
        let update = f.validate_update().unwrap();
        assert_eq!(update.id, "p1");
        assert!((update.price - 9.99).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_update_rejects_non_numeric_price() {
        let mut f = form();
        f.price = "abc".into();
        assert!(matches!(
            f.validate_update(),
            Err(ValidationError::NotANumber { .. })
        ));
    }

    #[test]
    fn next_page_zero_means_last() {
        let page = ProductsList::single(Product::default());
        assert!(!page.has_next_page());
        assert_eq!(page.total_count, 1);
    }

    #[test]
    fn form_from_product_round_trips_price() {
        let product = Product {
            price: 12.5,
            ..Product::default()
        };
        assert_eq!(ProductForm::from(&product).price, "12.5");
    }
}
