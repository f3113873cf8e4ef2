//! Browse and customer profiles against PostgreSQL
//!
//! Tests cover:
//! - Branches without inventory in an unfiltered browse
//! - Cuisine and price filters, time window, name ordering
//! - Duplicate customer on the unique phone number column
//! - Update of a missing customer leaves the table untouched
//!
//! Skipped unless `SURPLUS__DATABASE__TEST_DATABASE_URL` is set.

use crate::support::{assert_error, assert_status, postgres::with_pg_app, PgTestApp};
use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

const SEED: &str = r#"
INSERT INTO "Restaurant"
    (restaurant_id, branch_id, name, cuisinetype, rating, latitude, longitude, what_you_could_get, liveflag)
VALUES
    (1, 1, 'Warung Satu', 'Indonesian', 4.5, -6.2, 106.8, 'Nasi box', true),
    (2, 1, 'Zen Sushi', 'Japanese', 4.0, -6.21, 106.81, 'Sushi rolls', true),
    (3, 1, 'Kopi Tutup', 'Indonesian', 5.0, -6.2, 106.8, 'Pastries', false);

INSERT INTO "Inventory"
    (restaurant_id, branch_id, bag_type, sale_price, order_start_time, order_end_time)
VALUES
    (1, 1, 'meal', 10.00, '17:00', '21:00'),
    (1, 1, 'bakery', 25.00, '08:00', '12:00'),
    (3, 1, 'bakery', 5.00, '08:00', '22:00');
"#;

async fn browse(app: &PgTestApp, query: &str) -> anyhow::Result<Value> {
    app.execute(SEED).await?;
    let (status, _headers, body) = app
        .request_json(Method::GET, &format!("/browse{query}"), None)
        .await?;
    assert_status(status, StatusCode::OK, "browse");
    Ok(body)
}

fn ids(body: &Value) -> Vec<&str> {
    body["restaurants"]
        .as_array()
        .map(|rows| rows.iter().filter_map(|r| r["id"].as_str()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn browse_keeps_branches_without_inventory() -> anyhow::Result<()> {
    with_pg_app(|app| {
        Box::pin(async move {
            let body = browse(app, "").await?;

            assert_eq!(ids(&body), vec!["1", "2"]);
            assert_eq!(body["totalCount"], 2);

            let stocked = &body["restaurants"][0];
            assert_eq!(stocked["branchId"], "1");
            assert_eq!(stocked["priceRange"], json!({"min": 10.0, "max": 25.0}));
            assert_eq!(stocked["availableBagTypes"], json!(["bakery", "meal"]));

            let empty = &body["restaurants"][1];
            assert_eq!(empty["rating"], 4.0);
            assert_eq!(empty["priceRange"], json!({"min": 0.0, "max": 0.0}));
            assert_eq!(empty["availableBagTypes"], json!([]));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn browse_applies_cuisines_and_swapped_prices() -> anyhow::Result<()> {
    with_pg_app(|app| {
        Box::pin(async move {
            let body = browse(app, "?cuisines=Indonesian,Japanese&minPrice=30&maxPrice=5").await?;

            assert_eq!(ids(&body), vec!["1"]);
            assert_eq!(body["appliedFilters"]["minPrice"], 5.0);
            assert_eq!(body["appliedFilters"]["maxPrice"], 30.0);
            assert_eq!(
                body["appliedFilters"]["cuisines"],
                json!(["Indonesian", "Japanese"])
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn browse_time_window_aggregates_matching_items_only() -> anyhow::Result<()> {
    with_pg_app(|app| {
        Box::pin(async move {
            let body = browse(app, "?timeStart=18:00&timeEnd=20:00").await?;

            assert_eq!(ids(&body), vec!["1"]);
            let restaurant = &body["restaurants"][0];
            assert_eq!(restaurant["availableBagTypes"], json!(["meal"]));
            assert_eq!(restaurant["priceRange"], json!({"min": 10.0, "max": 10.0}));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn browse_sorts_by_name_descending() -> anyhow::Result<()> {
    with_pg_app(|app| {
        Box::pin(async move {
            let body = browse(app, "?sort=nameZA").await?;
            assert_eq!(ids(&body), vec!["2", "1"]);
            assert_eq!(body["appliedFilters"]["sort"], "nameZA");
            Ok(())
        })
    })
    .await
}

fn ayu() -> Value {
    json!({
        "customer_name": "Ayu",
        "customer_phone_number": "08123456789",
        "customer_address": "Jl. Sudirman 1"
    })
}

#[tokio::test]
async fn duplicate_customer_is_a_conflict() -> anyhow::Result<()> {
    with_pg_app(|app| {
        Box::pin(async move {
            let (status, _headers, created) = app
                .request_json(Method::POST, "/customers", Some(ayu()))
                .await?;
            assert_status(status, StatusCode::CREATED, "first create");
            assert!(created["customer_id"].as_i64().is_some());

            let (status, _headers, body) = app
                .request_json(Method::POST, "/customers", Some(ayu()))
                .await?;
            assert_status(status, StatusCode::CONFLICT, "duplicate create");
            assert_error(&body, "Conflict", "Customer with this information already exists");

            let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "Customer""#)
                .fetch_one(&app.pool)
                .await?;
            assert_eq!(count, 1);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn update_of_missing_customer_changes_nothing() -> anyhow::Result<()> {
    with_pg_app(|app| {
        Box::pin(async move {
            let (status, _headers, created) = app
                .request_json(Method::POST, "/customers", Some(ayu()))
                .await?;
            assert_status(status, StatusCode::CREATED, "create");

            let (status, _headers, body) = app
                .request_json(
                    Method::PUT,
                    "/customers/999999",
                    Some(json!({"customer_name": "Budi"})),
                )
                .await?;
            assert_status(status, StatusCode::NOT_FOUND, "update missing");
            assert_error(&body, "Not Found", "Customer not found");

            let names: Vec<String> = sqlx::query_scalar(r#"SELECT customer_name FROM "Customer""#)
                .fetch_all(&app.pool)
                .await?;
            assert_eq!(names, vec!["Ayu".to_string()]);

            let id = created["customer_id"].as_i64().unwrap_or_default();
            let (status, _headers, updated) = app
                .request_json(
                    Method::PATCH,
                    &format!("/customers/{id}"),
                    Some(json!({"customer_address": "Jl. Thamrin 2"})),
                )
                .await?;
            assert_status(status, StatusCode::OK, "partial update");
            assert_eq!(updated["customer_name"], "Ayu");
            assert_eq!(updated["customer_address"], "Jl. Thamrin 2");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn health_reports_reachable_database() -> anyhow::Result<()> {
    with_pg_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app.request_json(Method::GET, "/health", None).await?;
            assert_status(status, StatusCode::OK, "health");
            assert_eq!(body["database"], "ok");
            Ok(())
        })
    })
    .await
}
