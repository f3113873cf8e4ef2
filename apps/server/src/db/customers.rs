//! Customer repository
//!
//! Create and update each run in their own transaction; the transaction is
//! rolled back on drop when any step fails.

use crate::db::traits::CustomerStore;
use crate::models::{Customer, CustomerUpdate, NewCustomer};
use crate::{Error, Result};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const RETURNING: &str =
    "RETURNING customer_id::bigint AS customer_id, customer_name, customer_phone_number, customer_address";

/// Postgres `unique_violation`
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Clone)]
pub struct PostgresCustomerStore {
    pool: PgPool,
}

impl PostgresCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for PostgresCustomerStore {
    async fn create(&self, customer: &NewCustomer) -> Result<Customer> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;

        let sql = format!(
            r#"INSERT INTO "Customer" (customer_name, customer_phone_number, customer_address)
            VALUES ($1, $2, $3) {RETURNING}"#
        );
        let row = sqlx::query(&sql)
            .bind(&customer.customer_name)
            .bind(&customer.customer_phone_number)
            .bind(&customer.customer_address)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_insert_error)?;

        let created = customer_from_row(&row)?;
        tx.commit().await.map_err(Error::Database)?;

        tracing::info!(customer_id = created.customer_id, "Customer created");
        Ok(created)
    }

    async fn read(&self, customer_id: i64) -> Result<Option<Customer>> {
        let row = sqlx::query(
            r#"
            SELECT customer_id::bigint AS customer_id, customer_name, customer_phone_number, customer_address
            FROM "Customer"
            WHERE customer_id = $1
            "#,
        )
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        row.as_ref().map(customer_from_row).transpose()
    }

    async fn update(&self, customer_id: i64, update: &CustomerUpdate) -> Result<Option<Customer>> {
        let Some((sql, values)) = build_update_sql(update) else {
            return Err(Error::ClientInput(
                "At least one field must be provided for update".to_string(),
            ));
        };

        let mut tx = self.pool.begin().await.map_err(Error::Database)?;

        let exists: Option<i64> = sqlx::query_scalar(
            r#"SELECT customer_id::bigint FROM "Customer" WHERE customer_id = $1"#,
        )
        .bind(customer_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(Error::Database)?;
        if exists.is_none() {
            return Ok(None);
        }

        let mut query = sqlx::query(&sql);
        for value in values {
            query = query.bind(value);
        }
        // The row can vanish between the check and the write; RETURNING nothing
        // is reported the same as not found.
        let row = query
            .bind(customer_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_insert_error)?;

        let updated = row.as_ref().map(customer_from_row).transpose()?;
        tx.commit().await.map_err(Error::Database)?;

        if let Some(customer) = &updated {
            tracing::info!(customer_id = customer.customer_id, "Customer updated");
        }
        Ok(updated)
    }
}

/// UPDATE statement for the provided fields, with the customer id as the last
/// placeholder. `None` when nothing is set.
pub fn build_update_sql(update: &CustomerUpdate) -> Option<(String, Vec<&str>)> {
    let fields = update.fields();
    if fields.is_empty() {
        return None;
    }

    let mut values = Vec::with_capacity(fields.len());
    let assignments: Vec<String> = fields
        .into_iter()
        .map(|(column, value)| {
            values.push(value);
            format!("{column} = ${}", values.len())
        })
        .collect();

    let sql = format!(
        r#"UPDATE "Customer" SET {} WHERE customer_id = ${} {RETURNING}"#,
        assignments.join(", "),
        values.len() + 1
    );
    Some((sql, values))
}

fn map_insert_error(err: sqlx::Error) -> Error {
    let unique_violation = err
        .as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == UNIQUE_VIOLATION);
    if unique_violation {
        Error::Conflict("Customer with this information already exists".to_string())
    } else {
        Error::Database(err)
    }
}

fn customer_from_row(row: &PgRow) -> Result<Customer> {
    Ok(Customer {
        customer_id: row.try_get("customer_id")?,
        customer_name: row.try_get("customer_name")?,
        customer_phone_number: row.try_get("customer_phone_number")?,
        customer_address: row.try_get("customer_address")?,
    })
}
