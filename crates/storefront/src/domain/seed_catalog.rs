//! Fixed example catalogue written on first start.

use super::{Product, ProductDraft, ProductId, ProductValidationError};

/// Spacing between seeded creation timestamps, newest first.
const SEED_CREATED_AT_STEP_MS: i64 = 100_000;

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: f64,
    sale_price: Option<f64>,
    image: &'static str,
    category: &'static str,
    stock: u32,
    featured: bool,
    rating: f64,
    review_count: u32,
}

const SEED_PRODUCTS: [SeedProduct; 6] = [
    SeedProduct {
        id: "1",
        name: "Premium Leather Wallet",
        description: "Handcrafted genuine leather wallet with RFID protection.",
        price: 1499.0,
        sale_price: Some(999.0),
        image: "https://picsum.photos/400/400?random=1",
        category: "Accessories",
        stock: 50,
        featured: true,
        rating: 4.8,
        review_count: 124,
    },
    SeedProduct {
        id: "2",
        name: "Wireless Noise Cancelling Headphones",
        description: "Immersive sound experience with 30-hour battery life.",
        price: 5999.0,
        sale_price: Some(4499.0),
        image: "https://picsum.photos/400/400?random=2",
        category: "Electronics",
        stock: 15,
        featured: true,
        rating: 4.9,
        review_count: 89,
    },
    SeedProduct {
        id: "3",
        name: "Minimalist Wall Clock",
        description: "Modern design silent sweep quartz movement wall clock.",
        price: 1299.0,
        sale_price: None,
        image: "https://picsum.photos/400/400?random=3",
        category: "Home Decor",
        stock: 30,
        featured: false,
        rating: 4.5,
        review_count: 45,
    },
    SeedProduct {
        id: "4",
        name: "Classic Running Shoes",
        description: "Lightweight and breathable mesh running shoes for daily use.",
        price: 2999.0,
        // Rounds to a 17% discount.
        sale_price: Some(2499.0),
        image: "https://picsum.photos/400/400?random=4",
        category: "Fashion",
        stock: 100,
        featured: true,
        rating: 4.7,
        review_count: 210,
    },
    SeedProduct {
        id: "5",
        name: "Smart Fitness Band",
        description: "Track your steps, heart rate, and sleep quality.",
        price: 1999.0,
        sale_price: Some(1499.0),
        image: "https://picsum.photos/400/400?random=5",
        category: "Electronics",
        stock: 0,
        featured: false,
        rating: 4.6,
        review_count: 150,
    },
    SeedProduct {
        id: "6",
        name: "Organic Face Serum",
        description: "Vitamin C enriched serum for glowing skin.",
        price: 899.0,
        sale_price: None,
        image: "https://picsum.photos/400/400?random=6",
        category: "Beauty",
        stock: 45,
        featured: true,
        rating: 4.9,
        review_count: 320,
    },
];

/// Build the example catalogue with creation times ending at `now_ms`.
///
/// Every seeded product is active. Discounts are derived the same way a save
/// derives them.
pub(crate) fn seed_products(now_ms: i64) -> Result<Vec<Product>, ProductValidationError> {
    let mut created_at = now_ms;
    let mut products = Vec::with_capacity(SEED_PRODUCTS.len());
    for seed in &SEED_PRODUCTS {
        let draft = ProductDraft {
            name: Some(seed.name.to_owned()),
            description: Some(seed.description.to_owned()),
            price: Some(seed.price),
            sale_price: seed.sale_price,
            image_url: Some(seed.image.to_owned()),
            category: seed.category.to_owned(),
            stock: seed.stock,
            active: Some(true),
            featured: Some(seed.featured),
            rating: seed.rating,
            review_count: seed.review_count,
            ..ProductDraft::default()
        };
        products.push(Product::new(ProductId::new(seed.id)?, created_at, draft)?);
        created_at = created_at.saturating_sub(SEED_CREATED_AT_STEP_MS);
    }
    Ok(products)
}
