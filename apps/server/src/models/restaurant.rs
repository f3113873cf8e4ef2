//! Restaurant read models
//!
//! [`RestaurantRecord`] mirrors one row of the browse query (nullable columns stay
//! `Option`); [`RestaurantSummary`] is the public shape returned by `GET /browse`.

use crate::db::browse::FilterSet;
use serde::Serialize;

/// One restaurant branch with its inventory aggregates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantRecord {
    pub restaurant_id: String,
    pub branch_id: String,
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    pub main_image_url: Option<String>,
    pub logo_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub live: Option<bool>,
    /// `None` when the branch has no inventory
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// `ARRAY_AGG` over a left join yields `{NULL}` for branches without inventory
    pub available_bag_types: Option<Vec<Option<String>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    pub id: String,
    pub branch_id: String,
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub rating: f64,
    pub main_image_url: Option<String>,
    pub logo_url: Option<String>,
    pub coordinates: Coordinates,
    pub description: Option<String>,
    pub is_live: bool,
    pub price_range: PriceRange,
    pub available_bag_types: Vec<String>,
}

impl From<RestaurantRecord> for RestaurantSummary {
    fn from(record: RestaurantRecord) -> Self {
        Self {
            id: record.restaurant_id,
            branch_id: record.branch_id,
            name: record.name,
            cuisine: record.cuisine,
            rating: record.rating.unwrap_or(0.0),
            main_image_url: record.main_image_url,
            logo_url: record.logo_url,
            coordinates: Coordinates {
                latitude: record.latitude.unwrap_or(0.0),
                longitude: record.longitude.unwrap_or(0.0),
            },
            description: record.description,
            is_live: record.live.unwrap_or(false),
            price_range: PriceRange {
                min: record.min_price.unwrap_or(0.0),
                max: record.max_price.unwrap_or(0.0),
            },
            available_bag_types: record
                .available_bag_types
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .collect(),
        }
    }
}

/// Body of a successful browse.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseResponse {
    pub restaurants: Vec<RestaurantSummary>,
    /// Count after radius filtering
    pub total_count: usize,
    pub applied_filters: FilterSet,
}

impl BrowseResponse {
    pub fn new(records: Vec<RestaurantRecord>, applied_filters: FilterSet) -> Self {
        let restaurants: Vec<RestaurantSummary> =
            records.into_iter().map(RestaurantSummary::from).collect();
        Self {
            total_count: restaurants.len(),
            restaurants,
            applied_filters,
        }
    }
}
