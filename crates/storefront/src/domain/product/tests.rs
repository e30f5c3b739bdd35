//! Unit tests for product construction and wire format.

use rstest::rstest;
use serde_json::json;

use super::*;

fn wallet_draft() -> ProductDraft {
    ProductDraft {
        name: Some("Premium Leather Wallet".to_owned()),
        description: Some("Handcrafted genuine leather wallet.".to_owned()),
        price: Some(1499.0),
        sale_price: Some(999.0),
        category: "Accessories".to_owned(),
        stock: 50,
        active: Some(true),
        featured: Some(true),
        rating: 4.8,
        review_count: 124,
        ..ProductDraft::default()
    }
}

fn id(raw: &str) -> ProductId {
    ProductId::new(raw).expect("valid product id")
}

#[rstest]
fn builds_product_with_derived_discount() {
    let product = Product::new(id("1"), 1_700_000_000_000, wallet_draft()).expect("valid draft");

    assert_eq!(product.id().as_ref(), "1");
    assert_eq!(product.name(), "Premium Leather Wallet");
    assert_eq!(product.discount_percent(), 33);
    assert_eq!(product.created_at(), 1_700_000_000_000);
    assert!(product.active());
    assert!(product.featured());
}

#[rstest]
fn caller_supplied_discount_is_ignored() {
    let draft = ProductDraft {
        sale_price: None,
        discount_percent: Some(80),
        ..wallet_draft()
    };

    let product = Product::new(id("1"), 0, draft).expect("valid draft");

    assert_eq!(product.discount_percent(), 0);
}

#[rstest]
#[case::absent(None, None, false, false)]
#[case::explicit(Some(true), Some(false), true, false)]
fn visibility_flags_coerce_to_strict_booleans(
    #[case] active: Option<bool>,
    #[case] featured: Option<bool>,
    #[case] expected_active: bool,
    #[case] expected_featured: bool,
) {
    let draft = ProductDraft {
        active,
        featured,
        ..wallet_draft()
    };

    let product = Product::new(id("1"), 0, draft).expect("valid draft");

    assert_eq!(product.active(), expected_active);
    assert_eq!(product.featured(), expected_featured);
}

#[rstest]
#[case::missing_name(ProductDraft { name: None, ..wallet_draft() }, ProductValidationError::MissingName)]
#[case::blank_name(
    ProductDraft { name: Some("   ".to_owned()), ..wallet_draft() },
    ProductValidationError::MissingName
)]
#[case::missing_price(ProductDraft { price: None, ..wallet_draft() }, ProductValidationError::MissingPrice)]
#[case::negative_price(
    ProductDraft { price: Some(-1.0), ..wallet_draft() },
    ProductValidationError::InvalidPrice { field: "price", value: -1.0 }
)]
#[case::negative_sale_price(
    ProductDraft { sale_price: Some(-5.0), ..wallet_draft() },
    ProductValidationError::InvalidPrice { field: "salePrice", value: -5.0 }
)]
fn rejects_invalid_drafts(#[case] draft: ProductDraft, #[case] expected: ProductValidationError) {
    assert_eq!(Product::new(id("1"), 0, draft), Err(expected));
}

#[rstest]
fn rejects_non_finite_price() {
    let draft = ProductDraft {
        price: Some(f64::NAN),
        ..wallet_draft()
    };

    assert!(matches!(
        Product::new(id("1"), 0, draft),
        Err(ProductValidationError::InvalidPrice { field: "price", .. })
    ));
}

#[rstest]
#[case("")]
#[case("   ")]
fn product_id_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(ProductId::new(raw), Err(ProductValidationError::EmptyId));
}

#[rstest]
fn random_ids_are_distinct() {
    assert_ne!(ProductId::random(), ProductId::random());
}

#[rstest]
fn serialises_with_camel_case_keys_and_omits_absent_fields() {
    let draft = ProductDraft {
        description: None,
        ..wallet_draft()
    };
    let product = Product::new(id("1"), 42, draft).expect("valid draft");

    let value = serde_json::to_value(&product).expect("serialise product");

    assert_eq!(
        value,
        json!({
            "id": "1",
            "name": "Premium Leather Wallet",
            "price": 1499.0,
            "salePrice": 999.0,
            "discountPercent": 33,
            "category": "Accessories",
            "stock": 50,
            "active": true,
            "featured": true,
            "rating": 4.8,
            "reviewCount": 124,
            "createdAt": 42
        })
    );
}

#[rstest]
fn deserialises_stored_record_with_defaults() {
    let stored = r#"{"id":"9","name":"Clock","price":1299,"category":"Home Decor","createdAt":7}"#;

    let product: Product = serde_json::from_str(stored).expect("stored product parses");

    assert_eq!(product.id().as_ref(), "9");
    assert_eq!(product.price(), 1299.0);
    assert_eq!(product.sale_price(), None);
    assert_eq!(product.stock(), 0);
    assert!(!product.active());
    assert!(product.images().is_empty());
    assert!(product.tags().is_empty());
}

#[rstest]
fn stored_record_with_blank_id_is_rejected() {
    let stored = r#"{"id":"","name":"Clock","price":1,"category":"","createdAt":7}"#;

    assert!(serde_json::from_str::<Product>(stored).is_err());
}

#[rstest]
fn draft_round_trips_through_product() {
    let product = Product::new(id("1"), 42, wallet_draft()).expect("valid draft");

    let draft = ProductDraft::from(product.clone());

    assert_eq!(draft.id.as_deref(), Some("1"));
    assert_eq!(draft.created_at, Some(42));
    assert_eq!(Product::new(id("1"), 42, draft), Ok(product));
}

#[rstest]
fn effective_price_prefers_sale_price() {
    let on_sale = Product::new(id("1"), 0, wallet_draft()).expect("valid draft");
    let full_price = Product::new(
        id("2"),
        0,
        ProductDraft {
            sale_price: None,
            ..wallet_draft()
        },
    )
    .expect("valid draft");

    assert_eq!(on_sale.effective_price(), 999.0);
    assert_eq!(full_price.effective_price(), 1499.0);
}

#[rstest]
fn zero_sale_price_means_no_sale() {
    let draft = ProductDraft {
        price: Some(1000.0),
        sale_price: Some(0.0),
        ..wallet_draft()
    };

    let product = Product::new(id("1"), 0, draft).expect("valid draft");

    assert_eq!(product.sale_price(), None);
    assert_eq!(product.discount_percent(), 0);
    assert_eq!(product.effective_price(), 1000.0);
}

#[rstest]
fn stored_zero_sale_price_is_ignored_for_pricing() {
    let stored = r#"{"id":"9","name":"Clock","price":1000,"salePrice":0,"category":"Home Decor","createdAt":7}"#;

    let product: Product = serde_json::from_str(stored).expect("stored product parses");

    assert_eq!(product.effective_price(), 1000.0);
}
