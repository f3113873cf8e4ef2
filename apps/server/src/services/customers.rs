//! Customer profile operations

use crate::{
    db::CustomerStore,
    models::{Customer, CustomerUpdate, NewCustomer},
    Error, Result,
};
use serde_json::Value as JsonValue;
use std::sync::Arc;

pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, body: Option<JsonValue>) -> Result<Customer> {
        let result: Result<Customer> = async {
            let body = require_body(body)?;
            let customer = NewCustomer::from_json(&body)?;
            self.store.create(&customer).await
        }
        .await;
        record_outcome("create", result)
    }

    pub async fn read(&self, customer_id: &str) -> Result<Customer> {
        let result: Result<Customer> = async {
            let customer_id = parse_customer_id(customer_id)?;
            self.store.read(customer_id).await?.ok_or_else(not_found)
        }
        .await;
        record_outcome("read", result)
    }

    /// Validation happens before the store is touched; a missing customer is
    /// reported without any write.
    pub async fn update(&self, customer_id: &str, body: Option<JsonValue>) -> Result<Customer> {
        let result: Result<Customer> = async {
            let customer_id = parse_customer_id(customer_id)?;
            let body = require_body(body)?;
            let update = CustomerUpdate::from_json(&body)?;
            self.store
                .update(customer_id, &update)
                .await?
                .ok_or_else(not_found)
        }
        .await;
        record_outcome("update", result)
    }
}

/// Customer ids are numeric; anything else is a client error.
pub fn parse_customer_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| Error::ClientInput("Invalid customer ID".to_string()))
}

fn require_body(body: Option<JsonValue>) -> Result<JsonValue> {
    body.filter(|b| !b.is_null())
        .ok_or_else(|| Error::ClientInput("Request body is required".to_string()))
}

fn not_found() -> Error {
    Error::NotFound("Customer not found".to_string())
}

fn record_outcome(operation: &str, result: Result<Customer>) -> Result<Customer> {
    let status = match &result {
        Ok(_) => "success",
        Err(e) if e.status().is_client_error() => "client_error",
        Err(_) => "server_error",
    };
    crate::metrics::CUSTOMER_OPERATIONS_TOTAL
        .with_label_values(&[operation, status])
        .inc();
    result
}
