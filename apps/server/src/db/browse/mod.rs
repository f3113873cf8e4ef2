//! Restaurant browse engine: parameter parsing, SQL generation and radius filtering.

pub mod geo;
pub mod params;
pub mod query_builder;

pub use geo::{apply_distance_filter, haversine_km};
pub use params::{FilterSet, GeoFilter, SortOrder};
pub use query_builder::{BindValue, BrowseQuery};
