//! Restaurant detail and homepage sections

use crate::{db::RestaurantStore, Error, Result};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::sync::Arc;

const SECTION_SIZE: usize = 5;

/// Homepage carousels, each holding up to five restaurants.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HomepageSections {
    #[serde(rename = "Penawaran Terkini untuk Anda")]
    pub latest_offers: Vec<JsonValue>,
    #[serde(rename = "Amankan Sebelum Terlambat")]
    pub ending_soon: Vec<JsonValue>,
    #[serde(rename = "Kesukaan Anda")]
    pub favourites: Vec<JsonValue>,
}

impl HomepageSections {
    /// Consecutive slices `[0,5)`, `[5,10)`, `[10,15)`; anything past that is dropped.
    pub fn from_restaurants(restaurants: Vec<JsonValue>) -> Self {
        let mut chunks = restaurants
            .chunks(SECTION_SIZE)
            .map(<[JsonValue]>::to_vec)
            .take(3);

        Self {
            latest_offers: chunks.next().unwrap_or_default(),
            ending_soon: chunks.next().unwrap_or_default(),
            favourites: chunks.next().unwrap_or_default(),
        }
    }
}

pub struct RestaurantService {
    store: Arc<dyn RestaurantStore>,
}

impl RestaurantService {
    pub fn new(store: Arc<dyn RestaurantStore>) -> Self {
        Self { store }
    }

    /// Full restaurant row for one branch.
    pub async fn detail(
        &self,
        restaurant_id: Option<&str>,
        branch_id: Option<&str>,
    ) -> Result<JsonValue> {
        let restaurant_id = required(restaurant_id, "restaurant_id")?;
        let branch_id = required(branch_id, "branch_id")?;

        self.store
            .find_by_key(restaurant_id, branch_id)
            .await?
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "Restaurant with restaurant_id {restaurant_id} and branch_id {branch_id} not found"
                ))
            })
    }

    pub async fn homepage(&self) -> Result<HomepageSections> {
        let restaurants = self.store.list_all().await?;
        tracing::debug!(total = restaurants.len(), "Building homepage sections");
        Ok(HomepageSections::from_restaurants(restaurants))
    }
}

fn required<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::ClientInput(format!("{name} is required")))
}
