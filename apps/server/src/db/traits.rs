//! Storage traits the services depend on
//!
//! PostgreSQL and sled back these in production; tests substitute in-memory
//! implementations.

use crate::{
    db::browse::FilterSet,
    models::{Customer, CustomerUpdate, NewCustomer, RestaurantRecord},
    Result,
};
use async_trait::async_trait;
use serde_json::Value as JsonValue;

/// Read access to restaurant branches and their inventory.
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// Live branches matching the SQL-expressible part of `filters`, in the requested order.
    ///
    /// Radius filtering is applied by the caller.
    async fn browse(&self, filters: &FilterSet) -> Result<Vec<RestaurantRecord>>;

    /// Full row for one branch, keyed by `(restaurant_id, branch_id)`.
    async fn find_by_key(&self, restaurant_id: &str, branch_id: &str)
        -> Result<Option<JsonValue>>;

    /// Every branch as a full row, newest restaurant id first.
    async fn list_all(&self) -> Result<Vec<JsonValue>>;
}

/// Customer profile persistence.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Insert a profile and return it with its assigned id.
    ///
    /// # Errors
    /// * `Conflict` - A uniqueness constraint rejected the row
    async fn create(&self, customer: &NewCustomer) -> Result<Customer>;

    async fn read(&self, customer_id: i64) -> Result<Option<Customer>>;

    /// Apply the provided fields. `Ok(None)` when no such customer exists,
    /// in which case nothing is written.
    async fn update(&self, customer_id: i64, update: &CustomerUpdate)
        -> Result<Option<Customer>>;
}

/// Durable, monotonically increasing visit count.
#[async_trait]
pub trait VisitCounter: Send + Sync {
    /// Atomically add one and return the new total.
    async fn increment(&self) -> Result<u64>;
}
