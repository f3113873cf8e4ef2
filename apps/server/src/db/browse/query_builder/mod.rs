//! SQL query builder for restaurant browse.
//!
//! Produces a single grouped query over `"Restaurant"` left-joined with `"Inventory"`:
//! - One row per restaurant branch, with price and bag-type aggregates
//! - Filter predicates with positional `$n` placeholders
//! - Exactly one ORDER BY clause
//!
//! Radius filtering is not expressed here; see [`super::geo`].

use super::params::{FilterSet, SortOrder};

mod bind;

use bind::{push_float, push_text, push_text_list};

/// Bind values for `sqlx` queries, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Float(f64),
}

const SELECT_COLUMNS: &str = r#"SELECT
    r.restaurant_id::text AS restaurant_id,
    r.branch_id::text AS branch_id,
    r.name,
    r.cuisinetype,
    r.rating::float8 AS rating,
    r.mainimageurl,
    r.logourl,
    r.longitude::float8 AS longitude,
    r.latitude::float8 AS latitude,
    r.what_you_could_get,
    r.liveflag,
    MIN(i.sale_price)::float8 AS min_price,
    MAX(i.sale_price)::float8 AS max_price,
    ARRAY_AGG(DISTINCT i.bag_type::text) AS available_bag_types
FROM "Restaurant" r
LEFT JOIN "Inventory" i ON r.restaurant_id = i.restaurant_id AND r.branch_id = i.branch_id"#;

const GROUP_BY: &str = "GROUP BY r.restaurant_id, r.branch_id, r.name, r.cuisinetype, r.rating, \
r.mainimageurl, r.logourl, r.longitude, r.latitude, r.what_you_could_get, r.liveflag";

/// Query builder for restaurant browse.
#[derive(Debug)]
pub struct BrowseQuery<'a> {
    filters: &'a FilterSet,
}

impl<'a> BrowseQuery<'a> {
    pub fn new(filters: &'a FilterSet) -> Self {
        Self { filters }
    }

    pub fn build_sql(&self) -> (String, Vec<BindValue>) {
        let mut bind_params = Vec::new();
        let conditions = self.conditions(&mut bind_params);

        let mut sql = String::from(SELECT_COLUMNS);
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
        sql.push(' ');
        sql.push_str(GROUP_BY);
        sql.push(' ');
        sql.push_str(order_by_clause(self.filters.sort));

        (sql, bind_params)
    }

    /// Predicates in a fixed order: live flag, cuisines, price bounds, bag types, time window.
    fn conditions(&self, bind_params: &mut Vec<BindValue>) -> Vec<String> {
        let filters = self.filters;
        // Only live restaurants are browsable, whatever the filters say.
        let mut conditions = vec!["r.liveflag = true".to_string()];

        if let Some(cuisines) = filters.cuisines.as_deref().filter(|c| !c.is_empty()) {
            let placeholders = push_text_list(bind_params, cuisines);
            conditions.push(format!("r.cuisinetype IN ({placeholders})"));
        }

        // Each bound is its own predicate: a branch qualifies when any of its
        // inventory items falls in range.
        if let Some(min) = filters.min_price {
            let idx = push_float(bind_params, min);
            conditions.push(format!("i.sale_price >= ${idx}"));
        }
        if let Some(max) = filters.max_price {
            let idx = push_float(bind_params, max);
            conditions.push(format!("i.sale_price <= ${idx}"));
        }

        if let Some(bag_types) = filters.bag_types.as_deref().filter(|b| !b.is_empty()) {
            let placeholders = push_text_list(bind_params, bag_types);
            conditions.push(format!("i.bag_type IN ({placeholders})"));
        }

        // Both requested times must each fall inside the item's ordering window.
        // This is two point-in-range tests, not a window overlap test.
        if let Some((start, end)) = filters.time_window() {
            for time in [start, end] {
                let idx = push_text(bind_params, time.to_string());
                conditions.push(format!(
                    "${idx}::time BETWEEN i.order_start_time::time AND i.order_end_time::time"
                ));
            }
        }

        conditions
    }
}

/// ORDER BY for a requested sort; rating descending when absent.
pub fn order_by_clause(sort: Option<SortOrder>) -> &'static str {
    match sort {
        Some(SortOrder::PriceLowToHigh) => "ORDER BY MIN(i.sale_price) ASC",
        Some(SortOrder::PriceHighToLow) => "ORDER BY MIN(i.sale_price) DESC",
        Some(SortOrder::RatingLowToHigh) => "ORDER BY r.rating ASC",
        Some(SortOrder::NameAz) => "ORDER BY r.name ASC",
        Some(SortOrder::NameZa) => "ORDER BY r.name DESC",
        Some(SortOrder::RatingHighToLow) | None => "ORDER BY r.rating DESC",
    }
}
