//! Built-in sample products.

use maison_core::{Price, Product, ProductId};

struct Seed {
    id: &'static str,
    name: &'static str,
    cents: i64,
    original_cents: Option<i64>,
    image: &'static str,
    brand: &'static str,
    category: &'static str,
    description: &'static str,
    stock: u32,
    is_new: bool,
    rating: f32,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        name: "Embroidered Lawn Three Piece",
        cents: 8900,
        original_cents: Some(10_900),
        image: "https://images.unsplash.com/photo-1583391733956-6c78276477e2?w=400&h=400&fit=crop",
        brand: "Maison",
        category: "Unstitched",
        description: "Printed lawn shirt with embroidered neckline, chiffon dupatta and cambric trouser.",
        stock: 25,
        is_new: true,
        rating: 4.8,
    },
    Seed {
        id: "2",
        name: "Chikankari Kurta",
        cents: 4500,
        original_cents: None,
        image: "https://images.unsplash.com/photo-1610030469983-98e550d6193c?w=400&h=400&fit=crop",
        brand: "Maison",
        category: "Ready to Wear",
        description: "Hand-embroidered cotton kurta with straight hem.",
        stock: 15,
        is_new: false,
        rating: 4.9,
    },
    Seed {
        id: "3",
        name: "Quilted Leather Shoulder Bag",
        cents: 12_000,
        original_cents: Some(15_000),
        image: "https://images.unsplash.com/photo-1584917865442-de89df76afd3?w=400&h=400&fit=crop",
        brand: "Atelier Noor",
        category: "Bags",
        description: "Structured shoulder bag with chain strap and magnetic closure.",
        stock: 12,
        is_new: false,
        rating: 4.6,
    },
    Seed {
        id: "4",
        name: "Woven Straw Tote",
        cents: 3800,
        original_cents: None,
        image: "https://images.unsplash.com/photo-1590874103328-eac38a683ce7?w=400&h=400&fit=crop",
        brand: "Atelier Noor",
        category: "Bags",
        description: "Roomy summer tote with leather handles.",
        stock: 30,
        is_new: true,
        rating: 4.7,
    },
    Seed {
        id: "5",
        name: "Block Heel Khussa",
        cents: 2900,
        original_cents: Some(3500),
        image: "https://images.unsplash.com/photo-1543163521-1bf539c55dd2?w=400&h=400&fit=crop",
        brand: "Kaarigar",
        category: "Shoes",
        description: "Hand-stitched khussa on a low block heel.",
        stock: 40,
        is_new: true,
        rating: 4.5,
    },
    Seed {
        id: "6",
        name: "Silk Jamawar Shawl",
        cents: 6500,
        original_cents: None,
        image: "https://images.unsplash.com/photo-1601924994987-69e26d50dc26?w=400&h=400&fit=crop",
        brand: "Kaarigar",
        category: "Accessories",
        description: "Lightweight jamawar shawl with paisley weave.",
        stock: 8,
        is_new: false,
        rating: 4.4,
    },
    Seed {
        id: "7",
        name: "Pearl Drop Earrings",
        cents: 1800,
        original_cents: None,
        image: "https://images.unsplash.com/photo-1535632066927-ab7c9ab60908?w=400&h=400&fit=crop",
        brand: "Maison",
        category: "Accessories",
        description: "Freshwater pearl drops on gold-plated hooks.",
        stock: 0,
        is_new: false,
        rating: 4.2,
    },
];

/// Discount percentage implied by a sale price, rounded down.
fn discount_percent(cents: i64, original_cents: i64) -> Option<u32> {
    if original_cents <= cents || original_cents <= 0 {
        return None;
    }
    u32::try_from((original_cents - cents) * 100 / original_cents).ok()
}

/// The products written on first run.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    SEEDS
        .iter()
        .map(|seed| {
            let discount = seed
                .original_cents
                .and_then(|original| discount_percent(seed.cents, original));
            Product {
                id: ProductId::new(seed.id),
                name: seed.name.to_string(),
                price: Price::from_cents(seed.cents),
                original_price: seed.original_cents.map(Price::from_cents),
                image: seed.image.to_string(),
                brand: seed.brand.to_string(),
                category: seed.category.to_string(),
                description: seed.description.to_string(),
                stock: seed.stock,
                is_new: seed.is_new,
                is_on_sale: discount.is_some(),
                discount,
                rating: seed.rating,
            }
        })
        .collect()
}
