// Wire DTO <-> domain model conversions.

use catalogo_api::{CreateProductBody, ProductDto, ProductsPage, UpdateProductBody};

use crate::model::{NewProduct, Product, ProductUpdate, ProductsList};

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            active: dto.active,
            price: dto.price,
            sku: dto.sku,
        }
    }
}

impl From<ProductsPage> for ProductsList {
    fn from(page: ProductsPage) -> Self {
        Self {
            total_count: page.total_count,
            list: page.list.into_iter().map(Product::from).collect(),
            next_page: page.next_page.unwrap_or(0),
        }
    }
}

impl From<NewProduct> for CreateProductBody {
    fn from(p: NewProduct) -> Self {
        Self {
            name: p.name,
            description: p.description,
            active: p.active,
            price: p.price,
            sku: p.sku,
        }
    }
}

impl From<&ProductUpdate> for UpdateProductBody {
    fn from(p: &ProductUpdate) -> Self {
        UpdateProductBody::new(p.name.clone(), p.description.clone(), p.active, p.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_next_page_becomes_zero() {
        let list = ProductsList::from(ProductsPage {
            total_count: 0,
            list: Vec::new(),
            next_page: None,
        });
        assert_eq!(list.next_page, 0);
        assert!(!list.has_next_page());
    }
}
