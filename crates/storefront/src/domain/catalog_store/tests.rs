//! Unit coverage for the catalogue store over in-memory and mocked storage.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::MockBlobStore;
use crate::outbound::InMemoryBlobStore;

fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 24, 10, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

fn store_over<S: BlobStore>(storage: Arc<S>) -> CatalogStore<S> {
    CatalogStore::new(storage, fixture_clock(), OwnerSecret::default())
}

#[fixture]
fn storage() -> Arc<InMemoryBlobStore> {
    Arc::new(InMemoryBlobStore::default())
}

fn draft(name: &str, price: f64) -> ProductDraft {
    ProductDraft {
        name: Some(name.to_owned()),
        price: Some(price),
        category: "Accessories".to_owned(),
        active: Some(true),
        ..ProductDraft::default()
    }
}

#[rstest]
fn initialize_seeds_an_empty_store(storage: Arc<InMemoryBlobStore>) {
    let store = store_over(Arc::clone(&storage));

    let outcome = store.initialize().expect("seeding succeeds");

    assert_eq!(outcome, SeedingResult::Applied);
    let products = store.read_all();
    assert_eq!(products.len(), 6);
    assert_eq!(
        products.first().map(Product::created_at),
        Some(fixture_timestamp().timestamp_millis())
    );
}

#[rstest]
fn initialize_is_idempotent(storage: Arc<InMemoryBlobStore>) {
    let store = store_over(Arc::clone(&storage));
    store.initialize().expect("first seeding succeeds");
    store.delete_by_id("1").expect("delete succeeds");

    let outcome = store.initialize().expect("second call succeeds");

    assert_eq!(outcome, SeedingResult::AlreadySeeded);
    assert_eq!(store.read_all().len(), 5);
}

#[rstest]
fn initialize_keeps_an_emptied_catalogue(storage: Arc<InMemoryBlobStore>) {
    let store = store_over(Arc::clone(&storage));
    store.initialize().expect("seeding succeeds");
    for product in store.read_all() {
        store
            .delete_by_id(product.id().as_ref())
            .expect("delete succeeds");
    }

    assert_eq!(
        store.initialize().expect("seeding check succeeds"),
        SeedingResult::AlreadySeeded
    );
    assert!(store.read_all().is_empty());
}

#[rstest]
fn read_all_treats_malformed_data_as_empty(storage: Arc<InMemoryBlobStore>) {
    storage
        .set(PRODUCTS_KEY, "{not json")
        .expect("raw write succeeds");
    let store = store_over(storage);

    assert!(store.read_all().is_empty());
    assert_eq!(store.read_by_id("1"), None);
}

#[rstest]
fn read_by_id_finds_seeded_product(storage: Arc<InMemoryBlobStore>) {
    let store = store_over(storage);
    store.initialize().expect("seeding succeeds");

    let product = store.read_by_id("2").expect("product 2 is seeded");

    assert_eq!(product.name(), "Wireless Noise Cancelling Headphones");
    assert_eq!(store.read_by_id("missing"), None);
}

#[rstest]
fn save_creates_with_fresh_id_and_clock_time(storage: Arc<InMemoryBlobStore>) {
    let store = store_over(storage);

    let saved = store
        .save(ProductDraft {
            sale_price: Some(750.0),
            featured: None,
            ..draft("Canvas Tote", 1000.0)
        })
        .expect("save succeeds");

    assert!(!saved.id().as_ref().is_empty());
    assert_eq!(saved.discount_percent(), 25);
    assert!(!saved.featured());
    assert_eq!(saved.created_at(), fixture_timestamp().timestamp_millis());
    assert_eq!(store.read_all(), vec![saved]);
}

#[rstest]
fn save_uses_supplied_creation_time_for_new_products(storage: Arc<InMemoryBlobStore>) {
    let store = store_over(storage);

    let saved = store
        .save(ProductDraft {
            id: Some("imported".to_owned()),
            created_at: Some(42),
            ..draft("Imported Lamp", 500.0)
        })
        .expect("save succeeds");

    assert_eq!(saved.created_at(), 42);
}

#[rstest]
#[case::absent(None)]
#[case::blank(Some("   "))]
fn save_treats_blank_id_as_create(storage: Arc<InMemoryBlobStore>, #[case] id: Option<&str>) {
    let store = store_over(storage);

    let first = store
        .save(ProductDraft {
            id: id.map(str::to_owned),
            ..draft("First", 10.0)
        })
        .expect("first save succeeds");
    let second = store
        .save(ProductDraft {
            id: id.map(str::to_owned),
            ..draft("Second", 20.0)
        })
        .expect("second save succeeds");

    assert_ne!(first.id(), second.id());
    assert_eq!(store.read_all().len(), 2);
}

#[rstest]
fn save_replaces_in_place_and_keeps_creation_time(storage: Arc<InMemoryBlobStore>) {
    let store = store_over(storage);
    store.initialize().expect("seeding succeeds");
    let original = store.read_by_id("3").expect("product 3 is seeded");

    let replaced = store
        .save(ProductDraft {
            id: Some("3".to_owned()),
            created_at: Some(1),
            ..draft("Wall Clock Deluxe", 1599.0)
        })
        .expect("save succeeds");

    let products = store.read_all();
    assert_eq!(products.len(), 6);
    assert_eq!(products.get(2), Some(&replaced));
    assert_eq!(replaced.created_at(), original.created_at());
    assert_eq!(replaced.description(), None);
    assert_eq!(replaced.category(), "Accessories");
}

#[rstest]
#[case::missing_name(ProductDraft { name: None, ..draft("x", 1.0) }, ProductValidationError::MissingName)]
#[case::blank_name(ProductDraft { name: Some("  ".to_owned()), ..draft("x", 1.0) }, ProductValidationError::MissingName)]
#[case::missing_price(ProductDraft { price: None, ..draft("x", 1.0) }, ProductValidationError::MissingPrice)]
fn save_rejects_invalid_drafts_without_writing(
    #[case] submitted: ProductDraft,
    #[case] expected: ProductValidationError,
) {
    let mut storage = MockBlobStore::new();
    storage.expect_get().never();
    storage.expect_set().never();
    let store = store_over(Arc::new(storage));

    let result = store.save(submitted);

    assert_eq!(result, Err(CatalogStoreError::Validation(expected)));
}

#[rstest]
fn save_refuses_to_overwrite_corrupt_catalogue(storage: Arc<InMemoryBlobStore>) {
    storage.set(PRODUCTS_KEY, "[{").expect("raw write succeeds");
    let store = store_over(Arc::clone(&storage));

    let result = store.save(draft("Mug", 5.0));

    assert!(matches!(result, Err(CatalogStoreError::Corrupt { .. })));
    assert_eq!(
        storage.get(PRODUCTS_KEY).expect("raw read succeeds").as_deref(),
        Some("[{")
    );
}

#[rstest]
fn save_surfaces_storage_failures() {
    let mut storage = MockBlobStore::new();
    storage
        .expect_get()
        .withf(|key| key == PRODUCTS_KEY)
        .return_once(|_| Ok(None));
    storage
        .expect_set()
        .return_once(|key, _| Err(BlobStoreError::write(key, "disk full")));
    let store = store_over(Arc::new(storage));

    let result = store.save(draft("Mug", 5.0));

    assert_eq!(
        result,
        Err(CatalogStoreError::Storage(BlobStoreError::write(
            PRODUCTS_KEY,
            "disk full"
        )))
    );
}

#[rstest]
fn delete_removes_only_the_matching_product(storage: Arc<InMemoryBlobStore>) {
    let store = store_over(storage);
    store.initialize().expect("seeding succeeds");

    store.delete_by_id("4").expect("delete succeeds");

    let ids: Vec<String> = store
        .read_all()
        .iter()
        .map(|product| product.id().to_string())
        .collect();
    assert_eq!(ids, ["1", "2", "3", "5", "6"]);
}

#[rstest]
fn delete_of_unknown_id_does_not_write() {
    let mut storage = MockBlobStore::new();
    storage
        .expect_get()
        .withf(|key| key == PRODUCTS_KEY)
        .return_once(|_| Ok(None));
    storage.expect_set().never();
    let store = store_over(Arc::new(storage));

    assert_eq!(store.delete_by_id("missing"), Ok(()));
}

#[rstest]
fn owner_session_round_trip(storage: Arc<InMemoryBlobStore>) {
    let store = store_over(storage);
    assert!(!store.is_owner_session_active());

    assert_eq!(store.login_owner("wrong"), Ok(false));
    assert!(!store.is_owner_session_active());

    assert_eq!(store.login_owner("Bismillah"), Ok(true));
    assert!(store.is_owner_session_active());

    store.logout_owner().expect("logout succeeds");
    assert!(!store.is_owner_session_active());
}

#[rstest]
fn failed_login_keeps_existing_session(storage: Arc<InMemoryBlobStore>) {
    let store = store_over(storage);
    store.login_owner("Bismillah").expect("login succeeds");

    assert_eq!(store.login_owner("nope"), Ok(false));
    assert!(store.is_owner_session_active());
}

#[rstest]
fn custom_secret_replaces_default(storage: Arc<InMemoryBlobStore>) {
    let secret = OwnerSecret::new("open sesame").expect("valid secret");
    let store = CatalogStore::new(storage, fixture_clock(), secret);

    assert_eq!(store.login_owner("Bismillah"), Ok(false));
    assert_eq!(store.login_owner("open sesame"), Ok(true));
}

#[rstest]
fn unreadable_session_flag_reads_as_inactive() {
    let mut storage = MockBlobStore::new();
    storage
        .expect_get()
        .withf(|key| key == OWNER_SESSION_KEY)
        .return_once(|key| Err(BlobStoreError::read(key, "io")));
    let store = store_over(Arc::new(storage));

    assert!(!store.is_owner_session_active());
}
