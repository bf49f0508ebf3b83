// Wire types for the product catalog API.
//
// Field names follow the server's JSON exactly (`_id`, `SKU`, camelCase
// list metadata); the domain model in `catalogo-core` uses Rust names.

use serde::{Deserialize, Serialize};

/// A product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub price: f64,
    #[serde(rename = "SKU", default)]
    pub sku: String,
}

/// One page of products from `GET {base}?page=&itemsPerPage=&active=`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsPage {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub list: Vec<ProductDto>,
    /// Non-zero when more pages follow; `0` or absent when there are none.
    #[serde(default)]
    pub next_page: Option<u32>,
}

/// Body of `POST {base}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateProductBody {
    pub name: String,
    pub description: String,
    pub active: bool,
    pub price: f64,
    #[serde(rename = "SKU")]
    pub sku: String,
}

/// Body of `PUT {base}/{id}`.
///
/// The server expects `active` as the string `"true"` or `"false"`. The SKU
/// is immutable and never sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateProductBody {
    pub name: String,
    pub description: String,
    pub active: String,
    pub price: f64,
}

impl UpdateProductBody {
    pub fn new(name: String, description: String, active: bool, price: f64) -> Self {
        Self {
            name,
            description,
            active: active.to_string(),
            price,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_uses_wire_names() {
        let p: ProductDto = serde_json::from_value(json!({
            "_id": "64a1",
            "name": "Foo",
            "description": "Bar",
            "active": true,
            "price": 9.99,
            "SKU": "A1"
        }))
        .unwrap();
        assert_eq!(p.id, "64a1");
        assert_eq!(p.sku, "A1");
        assert!((p.price - 9.99).abs() < f64::EPSILON);
    }

    #[test]
    fn page_without_next_page_defaults_to_none() {
        let page: ProductsPage =
            serde_json::from_value(json!({ "totalCount": 0, "list": [] })).unwrap();
        assert_eq!(page.next_page, None);
        assert!(page.list.is_empty());
    }

    #[test]
    fn update_body_stringifies_active() {
        let body = UpdateProductBody::new("Foo".into(), "Bar".into(), false, 1.5);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["active"], json!("false"));
        assert!(value.get("SKU").is_none());
    }

    #[test]
    fn create_body_sends_sku_uppercase() {
        let body = CreateProductBody {
            name: "Foo".into(),
            description: "Bar".into(),
            active: true,
            price: 9.99,
            sku: "A1".into(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["SKU"], json!("A1"));
        assert_eq!(value["active"], json!(true));
    }
}
