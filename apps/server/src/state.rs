//! Shared application state

use crate::{
    config::DatabaseConfig,
    db::{
        CustomerStore, PostgresCustomerStore, PostgresRestaurantStore, RestaurantStore,
        SledVisitCounter, VisitCounter,
    },
    services::{BrowseService, CustomerService, RestaurantService},
    Config,
};
use anyhow::Context as _;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// `None` when the stores are not backed by PostgreSQL
    pub db_pool: Option<PgPool>,
    pub browse_service: Arc<BrowseService>,
    pub restaurant_service: Arc<RestaurantService>,
    pub customer_service: Arc<CustomerService>,
    pub visit_counter: Arc<dyn VisitCounter>,
}

impl AppState {
    /// Connect to PostgreSQL and open the visit counter database.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let pool = connect_pool(&config.database).await?;
        tracing::info!(
            max_connections = config.database.pool_max_size,
            "Database pool ready"
        );

        let visits = SledVisitCounter::open(&config.visits.path).with_context(|| {
            format!(
                "open visit counter database at {}",
                config.visits.path.display()
            )
        })?;

        let mut state = Self::from_stores(
            config,
            Arc::new(PostgresRestaurantStore::new(pool.clone())),
            Arc::new(PostgresCustomerStore::new(pool.clone())),
            Arc::new(visits),
        );
        state.db_pool = Some(pool);
        Ok(state)
    }

    /// Wire services over arbitrary store implementations.
    pub fn from_stores(
        config: Config,
        restaurants: Arc<dyn RestaurantStore>,
        customers: Arc<dyn CustomerStore>,
        visit_counter: Arc<dyn VisitCounter>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            db_pool: None,
            browse_service: Arc::new(BrowseService::new(restaurants.clone())),
            restaurant_service: Arc::new(RestaurantService::new(restaurants)),
            customer_service: Arc::new(CustomerService::new(customers)),
            visit_counter,
        }
    }
}

async fn connect_pool(database: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let mut options =
        PgConnectOptions::from_str(&database.url).context("parse database url")?;
    if database.require_ssl {
        options = options.ssl_mode(PgSslMode::Require);
    }
    if database.statement_timeout_seconds > 0 {
        options = options.options([(
            "statement_timeout",
            format!("{}s", database.statement_timeout_seconds),
        )]);
    }

    PgPoolOptions::new()
        .min_connections(database.pool_min_size)
        .max_connections(database.pool_max_size)
        .acquire_timeout(Duration::from_secs(database.pool_timeout_seconds))
        .connect_with(options)
        .await
        .context("connect to database")
}
