//! In-memory repositories standing in for PostgreSQL.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use surplus::{
    db::{browse::FilterSet, CustomerStore, RestaurantStore},
    models::{Customer, CustomerUpdate, NewCustomer, RestaurantRecord},
    Error, Result,
};

/// Live restaurant branch at the given coordinates.
pub fn restaurant(id: &str, latitude: Option<f64>, longitude: Option<f64>) -> RestaurantRecord {
    RestaurantRecord {
        restaurant_id: id.to_string(),
        branch_id: "1".to_string(),
        name: Some(format!("Restaurant {id}")),
        cuisine: Some("Indonesian".to_string()),
        rating: Some(4.5),
        latitude,
        longitude,
        live: Some(true),
        min_price: Some(15000.0),
        max_price: Some(30000.0),
        available_bag_types: Some(vec![Some("meal".to_string()), None]),
        ..Default::default()
    }
}

#[derive(Default)]
pub struct InMemoryRestaurantStore {
    /// Rows returned by browse, already in query order
    pub records: Vec<RestaurantRecord>,
    /// Full rows for detail and homepage
    pub rows: Vec<Value>,
    pub last_filters: Mutex<Option<FilterSet>>,
}

impl InMemoryRestaurantStore {
    pub fn with_records(records: Vec<RestaurantRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    pub fn with_rows(rows: Vec<Value>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    pub fn last_filters(&self) -> Option<FilterSet> {
        self.last_filters.lock().unwrap().clone()
    }
}

fn key_matches(row: &Value, field: &str, expected: &str) -> bool {
    match &row[field] {
        Value::String(s) => s == expected,
        Value::Number(n) => n.to_string() == expected,
        _ => false,
    }
}

#[async_trait]
impl RestaurantStore for InMemoryRestaurantStore {
    async fn browse(&self, filters: &FilterSet) -> Result<Vec<RestaurantRecord>> {
        *self.last_filters.lock().unwrap() = Some(filters.clone());
        Ok(self
            .records
            .iter()
            .filter(|r| r.live == Some(true))
            .cloned()
            .collect())
    }

    async fn find_by_key(&self, restaurant_id: &str, branch_id: &str) -> Result<Option<Value>> {
        Ok(self
            .rows
            .iter()
            .find(|row| {
                key_matches(row, "restaurant_id", restaurant_id)
                    && key_matches(row, "branch_id", branch_id)
            })
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Value>> {
        let mut rows = self.rows.clone();
        rows.sort_by_key(|row| std::cmp::Reverse(row["restaurant_id"].as_i64()));
        Ok(rows)
    }
}

#[derive(Default)]
pub struct InMemoryCustomerStore {
    customers: Mutex<BTreeMap<i64, Customer>>,
    writes: AtomicUsize,
}

impl InMemoryCustomerStore {
    /// Number of inserts and updates actually applied.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn get(&self, customer_id: i64) -> Option<Customer> {
        self.customers.lock().unwrap().get(&customer_id).cloned()
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn create(&self, customer: &NewCustomer) -> Result<Customer> {
        let mut customers = self.customers.lock().unwrap();
        // Mirrors the unique constraint on the phone number column.
        if customers
            .values()
            .any(|c| c.customer_phone_number == customer.customer_phone_number)
        {
            return Err(Error::Conflict(
                "Customer with this information already exists".to_string(),
            ));
        }

        let customer_id = customers.keys().next_back().map_or(1, |id| id + 1);
        let created = Customer {
            customer_id,
            customer_name: customer.customer_name.clone(),
            customer_phone_number: customer.customer_phone_number.clone(),
            customer_address: customer.customer_address.clone(),
        };
        customers.insert(customer_id, created.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(created)
    }

    async fn read(&self, customer_id: i64) -> Result<Option<Customer>> {
        Ok(self.get(customer_id))
    }

    async fn update(&self, customer_id: i64, update: &CustomerUpdate) -> Result<Option<Customer>> {
        let mut customers = self.customers.lock().unwrap();
        let Some(customer) = customers.get_mut(&customer_id) else {
            return Ok(None);
        };

        if let Some(name) = &update.customer_name {
            customer.customer_name = name.clone();
        }
        if let Some(phone) = &update.customer_phone_number {
            customer.customer_phone_number = phone.clone();
        }
        if let Some(address) = &update.customer_address {
            customer.customer_address = address.clone();
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(Some(customer.clone()))
    }
}
