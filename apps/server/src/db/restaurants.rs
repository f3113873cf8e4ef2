//! Restaurant repository
//!
//! Data access for `"Restaurant"` and `"Inventory"` in PostgreSQL.

use crate::db::browse::{BindValue, BrowseQuery, FilterSet};
use crate::db::traits::RestaurantStore;
use crate::models::RestaurantRecord;
use crate::Result;
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

#[derive(Debug, Clone)]
pub struct PostgresRestaurantStore {
    pool: PgPool,
}

impl PostgresRestaurantStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantStore for PostgresRestaurantStore {
    async fn browse(&self, filters: &FilterSet) -> Result<Vec<RestaurantRecord>> {
        let (sql, bind_params) = BrowseQuery::new(filters).build_sql();
        tracing::debug!(sql = %sql, binds = bind_params.len(), "Executing browse query");

        let mut query = sqlx::query(&sql);
        for param in bind_params {
            query = match param {
                BindValue::Text(s) => query.bind(s),
                BindValue::Float(f) => query.bind(f),
            };
        }

        // Scoped so the connection goes back to the pool on every exit path.
        let mut conn = self.pool.acquire().await.map_err(crate::Error::Database)?;
        let rows = query
            .fetch_all(&mut *conn)
            .await
            .map_err(crate::Error::Database)?;

        rows.iter().map(record_from_row).collect()
    }

    async fn find_by_key(
        &self,
        restaurant_id: &str,
        branch_id: &str,
    ) -> Result<Option<JsonValue>> {
        let row = sqlx::query(
            r#"
            SELECT to_jsonb(r) AS restaurant
            FROM "Restaurant" r
            WHERE r.restaurant_id::text = $1 AND r.branch_id::text = $2
            "#,
        )
        .bind(restaurant_id)
        .bind(branch_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(crate::Error::Database)?;

        match row {
            Some(row) => Ok(Some(row.try_get("restaurant")?)),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<JsonValue>> {
        let rows = sqlx::query(
            r#"
            SELECT to_jsonb(r) AS restaurant
            FROM "Restaurant" r
            ORDER BY r.restaurant_id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(crate::Error::Database)?;

        rows.iter()
            .map(|row| row.try_get("restaurant").map_err(crate::Error::Database))
            .collect()
    }
}

fn record_from_row(row: &PgRow) -> Result<RestaurantRecord> {
    Ok(RestaurantRecord {
        restaurant_id: row.try_get("restaurant_id")?,
        branch_id: row.try_get("branch_id")?,
        name: row.try_get("name")?,
        cuisine: row.try_get("cuisinetype")?,
        rating: row.try_get("rating")?,
        main_image_url: row.try_get("mainimageurl")?,
        logo_url: row.try_get("logourl")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
        description: row.try_get("what_you_could_get")?,
        live: row.try_get("liveflag")?,
        min_price: row.try_get("min_price")?,
        max_price: row.try_get("max_price")?,
        available_bag_types: row.try_get("available_bag_types")?,
    })
}
