//! Integration tests for the repository layer against a real database:
//! - Owner-scoped bottle CRUD
//! - Conditioned Vivino overwrite (ownership re-checked at write time)
//! - Dashboard aggregation queries

use cantina_core::vivino::{VivinoData, VivinoUpdate};
use cantina_db::models::user::CreateUser;
use cantina_db::models::wine::{CreateWine, UpdateWine};
use cantina_db::repositories::{UserRepo, WineRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_user(pool: &PgPool, email: &str) -> i64 {
    let input = CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$fake$hash".to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
        .id
}

fn new_wine(name: &str) -> CreateWine {
    CreateWine {
        name: name.to_string(),
        producer: None,
        region: None,
        country: None,
        wine_type: "rosso".to_string(),
        vintage: None,
        quantity: None,
        purchase_price: None,
        barcode: None,
        notes: None,
    }
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find(pool: PgPool) {
    let owner = new_user(&pool, "owner@test.com").await;

    let wine = WineRepo::create(&pool, owner, &new_wine("Barolo"))
        .await
        .expect("create should succeed");
    assert_eq!(wine.name, "Barolo");
    assert_eq!(wine.user_id, owner);
    assert_eq!(wine.quantity, 1, "quantity must default to 1");
    assert!(wine.vivino_rating.is_none());

    let found = WineRepo::find_by_id_for_user(&pool, wine.id, owner)
        .await
        .expect("find should succeed");
    assert!(found.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_is_owner_scoped(pool: PgPool) {
    let owner = new_user(&pool, "owner@test.com").await;
    let other = new_user(&pool, "other@test.com").await;

    let wine = WineRepo::create(&pool, owner, &new_wine("Chianti"))
        .await
        .expect("create should succeed");

    // The row exists but must be invisible to another account.
    let found = WineRepo::find_by_id_for_user(&pool, wine.id, other)
        .await
        .expect("find should succeed");
    assert!(found.is_none(), "foreign-owned bottle must look absent");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_applies_only_present_fields(pool: PgPool) {
    let owner = new_user(&pool, "owner@test.com").await;
    let mut input = new_wine("Brunello");
    input.region = Some("Toscana".to_string());
    let wine = WineRepo::create(&pool, owner, &input)
        .await
        .expect("create should succeed");

    let patch = UpdateWine {
        name: None,
        producer: Some("Biondi-Santi".to_string()),
        region: None,
        country: None,
        wine_type: None,
        vintage: Some(2016),
        quantity: Some(3),
        purchase_price: None,
        barcode: None,
        notes: None,
    };
    let updated = WineRepo::update(&pool, wine.id, owner, &patch)
        .await
        .expect("update should succeed")
        .expect("row should exist");

    assert_eq!(updated.name, "Brunello", "unset fields must be preserved");
    assert_eq!(updated.region.as_deref(), Some("Toscana"));
    assert_eq!(updated.producer.as_deref(), Some("Biondi-Santi"));
    assert_eq!(updated.vintage, Some(2016));
    assert_eq!(updated.quantity, 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_is_owner_scoped(pool: PgPool) {
    let owner = new_user(&pool, "owner@test.com").await;
    let other = new_user(&pool, "other@test.com").await;
    let wine = WineRepo::create(&pool, owner, &new_wine("Nebbiolo"))
        .await
        .expect("create should succeed");

    let deleted = WineRepo::delete(&pool, wine.id, other)
        .await
        .expect("delete should succeed");
    assert!(!deleted, "another account must not delete the bottle");

    let deleted = WineRepo::delete(&pool, wine.id, owner)
        .await
        .expect("delete should succeed");
    assert!(deleted);

    let found = WineRepo::find_by_id_for_user(&pool, wine.id, owner)
        .await
        .expect("find should succeed");
    assert!(found.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_barcode_lookup(pool: PgPool) {
    let owner = new_user(&pool, "owner@test.com").await;
    let mut input = new_wine("Prosecco");
    input.barcode = Some("8001234567890".to_string());
    WineRepo::create(&pool, owner, &input)
        .await
        .expect("create should succeed");

    let found = WineRepo::find_by_barcode_for_user(&pool, "8001234567890", owner)
        .await
        .expect("lookup should succeed");
    assert_eq!(found.expect("bottle should be found").name, "Prosecco");

    let missing = WineRepo::find_by_barcode_for_user(&pool, "0000000000000", owner)
        .await
        .expect("lookup should succeed");
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Vivino overwrite
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_vivino_update_is_full_overwrite(pool: PgPool) {
    let owner = new_user(&pool, "owner@test.com").await;
    let wine = WineRepo::create(&pool, owner, &new_wine("Amarone"))
        .await
        .expect("create should succeed");

    // First sync sets id, rating, and url.
    let first = VivinoUpdate::from_data(VivinoData {
        id: Some("555".to_string()),
        rating: Some(4.5),
        url: Some("https://www.vivino.com/w/555".to_string()),
        ..VivinoData::default()
    });
    let after_first = WineRepo::update_vivino(&pool, wine.id, owner, &first)
        .await
        .expect("update should succeed")
        .expect("row should match");
    assert_eq!(after_first.vivino_id.as_deref(), Some("555"));
    assert_eq!(after_first.vivino_rating, Some(4.5));
    assert!(after_first.vivino_last_updated.is_some());

    // Second sync carries only a rating: id and url must be cleared.
    let second = VivinoUpdate::from_data(VivinoData {
        rating: Some(4.1),
        ..VivinoData::default()
    });
    let after_second = WineRepo::update_vivino(&pool, wine.id, owner, &second)
        .await
        .expect("update should succeed")
        .expect("row should match");
    assert_eq!(after_second.vivino_id, None, "overwrite must clear stale id");
    assert_eq!(after_second.vivino_url, None, "overwrite must clear stale url");
    assert_eq!(after_second.vivino_rating, Some(4.1));
    assert_eq!(after_second.vivino_currency.as_deref(), Some("EUR"));
    assert!(
        after_second.vivino_last_updated >= after_first.vivino_last_updated,
        "sync timestamp must advance"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_vivino_update_rechecks_ownership(pool: PgPool) {
    let owner = new_user(&pool, "owner@test.com").await;
    let other = new_user(&pool, "other@test.com").await;
    let wine = WineRepo::create(&pool, owner, &new_wine("Barbaresco"))
        .await
        .expect("create should succeed");

    let update = VivinoUpdate::from_data(VivinoData {
        rating: Some(4.0),
        ..VivinoData::default()
    });
    let result = WineRepo::update_vivino(&pool, wine.id, other, &update)
        .await
        .expect("query should succeed");
    assert!(result.is_none(), "conditioned update must hit zero rows");

    // The owner's row is untouched.
    let unchanged = WineRepo::find_by_id_for_user(&pool, wine.id, owner)
        .await
        .expect("find should succeed")
        .expect("row should exist");
    assert!(unchanged.vivino_rating.is_none());
    assert!(unchanged.vivino_last_updated.is_none());
}

// ---------------------------------------------------------------------------
// Dashboard aggregation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_stats_are_owner_scoped(pool: PgPool) {
    let owner = new_user(&pool, "owner@test.com").await;
    let other = new_user(&pool, "other@test.com").await;

    let mut a = new_wine("Barolo");
    a.region = Some("Piemonte".to_string());
    a.quantity = Some(2);
    a.purchase_price = Some(30.0);
    WineRepo::create(&pool, owner, &a).await.expect("create");

    let mut b = new_wine("Vermentino");
    b.wine_type = "bianco".to_string();
    b.quantity = Some(3);
    WineRepo::create(&pool, owner, &b).await.expect("create");

    // Another user's cellar must not leak into the aggregates.
    WineRepo::create(&pool, other, &new_wine("Intruso"))
        .await
        .expect("create");

    let totals = WineRepo::stats_totals(&pool, owner)
        .await
        .expect("totals should succeed");
    assert_eq!(totals.total_bottles, 5);
    assert_eq!(totals.distinct_wines, 2);
    assert_eq!(totals.cellar_value, Some(60.0));

    let by_type = WineRepo::stats_by_type(&pool, owner)
        .await
        .expect("by_type should succeed");
    assert_eq!(by_type.len(), 2);
    assert_eq!(by_type[0].label, "bianco");
    assert_eq!(by_type[0].bottles, 3);

    let by_region = WineRepo::stats_by_region(&pool, owner)
        .await
        .expect("by_region should succeed");
    // The unset region is bucketed, not dropped.
    assert!(by_region.iter().any(|b| b.label == "Sconosciuta"));
    assert!(by_region.iter().any(|b| b.label == "Piemonte"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_stats_empty_cellar(pool: PgPool) {
    let owner = new_user(&pool, "owner@test.com").await;

    let totals = WineRepo::stats_totals(&pool, owner)
        .await
        .expect("totals should succeed");
    assert_eq!(totals.total_bottles, 0);
    assert_eq!(totals.distinct_wines, 0);
    assert_eq!(totals.cellar_value, None);
    assert_eq!(totals.average_vivino_rating, None);
}
