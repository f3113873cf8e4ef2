//! Database layer - repositories and data access

pub mod browse;
pub mod customers;
pub mod restaurants;
pub mod traits;
pub mod visits;

pub use customers::PostgresCustomerStore;
pub use restaurants::PostgresRestaurantStore;
pub use traits::{CustomerStore, RestaurantStore, VisitCounter};
pub use visits::SledVisitCounter;
