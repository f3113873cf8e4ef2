//! Customer profile models and request-body validation

use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Writable profile columns, in the order used for validation messages and SET clauses.
pub const CUSTOMER_FIELDS: [&str; 3] = ["customer_name", "customer_phone_number", "customer_address"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub customer_id: i64,
    pub customer_name: String,
    pub customer_phone_number: String,
    pub customer_address: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub customer_name: String,
    pub customer_phone_number: String,
    pub customer_address: String,
}

/// Partial profile update; at least one field is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerUpdate {
    pub customer_name: Option<String>,
    pub customer_phone_number: Option<String>,
    pub customer_address: Option<String>,
}

impl NewCustomer {
    /// Validate a create body. Every field must be present and non-empty.
    pub fn from_json(body: &JsonValue) -> Result<Self> {
        let object = body
            .as_object()
            .ok_or_else(|| Error::ClientInput("Request body must be a JSON object".to_string()))?;

        let values: Vec<Option<String>> = CUSTOMER_FIELDS
            .iter()
            .map(|field| object.get(*field).and_then(text_value).filter(|v| !v.is_empty()))
            .collect();

        let missing: Vec<&str> = CUSTOMER_FIELDS
            .iter()
            .zip(&values)
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| *field)
            .collect();
        if !missing.is_empty() {
            return Err(Error::ClientInput(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let mut values = values.into_iter().flatten();
        match (values.next(), values.next(), values.next()) {
            (Some(customer_name), Some(customer_phone_number), Some(customer_address)) => {
                Ok(Self {
                    customer_name,
                    customer_phone_number,
                    customer_address,
                })
            }
            _ => Err(Error::Internal("customer field validation out of sync".to_string())),
        }
    }
}

impl CustomerUpdate {
    /// Validate an update body. Fields count as provided when their key is present.
    pub fn from_json(body: &JsonValue) -> Result<Self> {
        let object = body
            .as_object()
            .ok_or_else(|| Error::ClientInput("Request body must be a JSON object".to_string()))?;

        let field = |name: &str| -> Result<Option<String>> {
            match object.get(name) {
                None => Ok(None),
                Some(value) => text_value(value)
                    .map(Some)
                    .ok_or_else(|| Error::ClientInput(format!("Invalid value for {name}"))),
            }
        };

        let update = Self {
            customer_name: field("customer_name")?,
            customer_phone_number: field("customer_phone_number")?,
            customer_address: field("customer_address")?,
        };

        if update.is_empty() {
            return Err(Error::ClientInput(
                "At least one field must be provided for update".to_string(),
            ));
        }

        Ok(update)
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Provided `(column, value)` pairs in [`CUSTOMER_FIELDS`] order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            (CUSTOMER_FIELDS[0], &self.customer_name),
            (CUSTOMER_FIELDS[1], &self.customer_phone_number),
            (CUSTOMER_FIELDS[2], &self.customer_address),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.as_deref().map(|v| (column, v)))
        .collect()
    }
}

/// Strings are taken as-is; numbers (e.g. a phone number sent unquoted) are stringified.
fn text_value(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
