//! Catalog product and cart line-item shapes.
//!
//! Both serialize with camelCase field names, matching the JSON the
//! browser storefront stores under its `products` and `cart` keys.

use serde::{Deserialize, Serialize};

use crate::{Price, ProductId};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Pre-sale price shown struck through when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    pub image: String,
    pub brand: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Units available for sale.
    pub stock: u32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_on_sale: bool,
    /// Advertised discount percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
    #[serde(default)]
    pub rating: f32,
}

impl Product {
    /// Whether any units are left to sell.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// One product in the cart, with the quantity requested.
///
/// Display and price fields are copied from the [`Product`] when the line
/// is created and are never re-synced with the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub image: String,
    pub price: Price,
    /// Maximum sellable quantity, as known when the line was created.
    pub stock: u32,
    /// Always within `1..=stock` once the line is in a cart.
    pub quantity: u32,
}

impl CartLineItem {
    /// Snapshot a product into a new line with a quantity of one.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            image: product.image.clone(),
            price: product.price,
            stock: product.stock,
            quantity: 1,
        }
    }

    /// `price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }

    /// Whether another unit can be added without exceeding stock.
    #[must_use]
    pub const fn can_increment(&self) -> bool {
        self.quantity < self.stock
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tote() -> Product {
        Product {
            id: ProductId::new("7"),
            name: "Leather Tote".to_string(),
            price: Price::from_cents(4500),
            original_price: None,
            image: "tote.jpg".to_string(),
            brand: "Maison".to_string(),
            category: "Bags".to_string(),
            description: String::new(),
            stock: 3,
            is_new: true,
            is_on_sale: false,
            discount: None,
            rating: 4.5,
        }
    }

    #[test]
    fn test_line_item_copies_product_fields() {
        let product = tote();
        let line = CartLineItem::from_product(&product);
        assert_eq!(line.id, product.id);
        assert_eq!(line.price, product.price);
        assert_eq!(line.stock, 3);
        assert_eq!(line.quantity, 1);
        assert!(line.can_increment());
    }

    #[test]
    fn test_line_total() {
        let mut line = CartLineItem::from_product(&tote());
        line.quantity = 3;
        assert_eq!(line.line_total(), Price::from_cents(13500));
        assert!(!line.can_increment());
    }

    #[test]
    fn test_line_item_wire_shape() {
        let line = CartLineItem::from_product(&tote());
        let value = serde_json::to_value(&line).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 7);
        for key in ["id", "name", "brand", "image", "price", "stock", "quantity"] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }

    #[test]
    fn test_product_reads_browser_json() {
        let json = r#"{
            "id": "3",
            "name": "Lawn Suit",
            "price": 120,
            "originalPrice": 150,
            "image": "suit.jpg",
            "brand": "Maison",
            "category": "Unstitched",
            "description": "Three piece",
            "stock": 50,
            "isNew": false,
            "isOnSale": true,
            "discount": 20,
            "rating": 4.6
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.original_price, Some(Price::from_cents(15000)));
        assert!(product.is_on_sale);
        assert_eq!(product.discount, Some(20));
    }
}
