//! Restaurant browse pipeline
//!
//! Query parameters are parsed into a [`FilterSet`], the SQL-expressible
//! filters run in the database, and the radius filter is applied to the rows.

use crate::{
    db::{
        browse::{apply_distance_filter, FilterSet},
        RestaurantStore,
    },
    models::BrowseResponse,
    Result,
};
use std::collections::HashMap;
use std::sync::Arc;

pub struct BrowseService {
    store: Arc<dyn RestaurantStore>,
}

impl BrowseService {
    pub fn new(store: Arc<dyn RestaurantStore>) -> Self {
        Self { store }
    }

    pub async fn browse(&self, query: &HashMap<String, String>) -> Result<BrowseResponse> {
        let filters = FilterSet::from_query(query);
        let records = self.store.browse(&filters).await?;
        let fetched = records.len();

        let records = apply_distance_filter(records, &filters);
        let radius = if filters.geo().is_some() { "true" } else { "false" };
        crate::metrics::BROWSE_RESULTS
            .with_label_values(&[radius])
            .observe(records.len() as f64);

        tracing::debug!(
            fetched,
            returned = records.len(),
            sort = filters.sort_requested.as_deref().unwrap_or("default"),
            "Browse completed"
        );

        Ok(BrowseResponse::new(records, filters))
    }
}
