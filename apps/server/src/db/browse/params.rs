//! Browse parameter parsing
//!
//! Turns the raw query-string map of `GET /browse` into a [`FilterSet`]:
//! - Every key is optional; an absent or empty value leaves the field unset
//! - Numeric values that do not parse are dropped (see [`parse_or_drop`])
//! - List values accept both `[a,b,c]` and `a,b,c`
//! - Price bounds are swapped when given in the wrong order

use serde::Serialize;
use std::collections::HashMap;

/// Result ordering requested through `sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    PriceLowToHigh,
    PriceHighToLow,
    RatingHighToLow,
    RatingLowToHigh,
    NameAz,
    NameZa,
}

impl SortOrder {
    /// Map a `sort` value to an ordering. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "priceLowToHigh" => Some(Self::PriceLowToHigh),
            "priceHighToLow" => Some(Self::PriceHighToLow),
            "ratingHighToLow" => Some(Self::RatingHighToLow),
            "ratingLowToHigh" => Some(Self::RatingLowToHigh),
            "nameAZ" => Some(Self::NameAz),
            "nameZA" => Some(Self::NameZa),
            _ => None,
        }
    }
}

/// Typed browse constraints. `None` always means "no constraint".
///
/// Serializes as the `appliedFilters` echo of the browse response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    /// `sort` exactly as requested, kept for the echo even when unrecognized
    #[serde(rename = "sort", skip_serializing_if = "Option::is_none")]
    pub sort_requested: Option<String>,
    #[serde(skip)]
    pub sort: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisines: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bag_types: Option<Vec<String>>,
    /// Radius in kilometers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Center and radius of a radius search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFilter {
    pub latitude: f64,
    pub longitude: f64,
    pub max_distance_km: f64,
}

impl FilterSet {
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        let value = |key: &str| query.get(key).map(String::as_str).filter(|v| !v.is_empty());

        let mut filters = FilterSet {
            sort_requested: value("sort").map(str::to_string),
            sort: value("sort").and_then(SortOrder::parse),
            time_start: value("timeStart").map(str::to_string),
            time_end: value("timeEnd").map(str::to_string),
            min_price: value("minPrice").and_then(parse_or_drop),
            max_price: value("maxPrice").and_then(parse_or_drop),
            cuisines: value("cuisines").and_then(parse_list),
            bag_types: value("bagTypes").and_then(parse_list),
            max_distance: value("maxDistance").and_then(parse_or_drop),
            latitude: value("latitude").and_then(parse_or_drop),
            longitude: value("longitude").and_then(parse_or_drop),
        };

        if let (Some(min), Some(max)) = (filters.min_price, filters.max_price) {
            if min > max {
                tracing::warn!(
                    min_price = min,
                    max_price = max,
                    "minPrice greater than maxPrice, swapping values"
                );
                filters.min_price = Some(max);
                filters.max_price = Some(min);
            }
        }

        filters
    }

    /// The time window applies only when both ends are given.
    pub fn time_window(&self) -> Option<(&str, &str)> {
        match (&self.time_start, &self.time_end) {
            (Some(start), Some(end)) => Some((start.as_str(), end.as_str())),
            _ => None,
        }
    }

    /// Radius search is active only when distance, latitude and longitude are all present.
    pub fn geo(&self) -> Option<GeoFilter> {
        Some(GeoFilter {
            latitude: self.latitude?,
            longitude: self.longitude?,
            max_distance_km: self.max_distance?,
        })
    }
}

/// Parse a float, treating anything unparseable as absent.
///
/// Browse filters are deliberately lenient: a malformed `minPrice=abc` removes the
/// constraint instead of failing the request. Non-finite values (`NaN`, `inf`) are
/// dropped the same way.
pub fn parse_or_drop(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse `[a, b,c]` or `a,b,c` into trimmed elements, preserving order.
pub fn parse_list(raw: &str) -> Option<Vec<String>> {
    let inner = raw
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(raw);

    if inner.is_empty() {
        return None;
    }

    Some(inner.split(',').map(|item| item.trim().to_string()).collect())
}
