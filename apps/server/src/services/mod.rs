//! Service layer - orchestration between handlers and repositories

pub mod browse;
pub mod customers;
pub mod restaurants;

pub use browse::BrowseService;
pub use customers::{parse_customer_id, CustomerService};
pub use restaurants::{HomepageSections, RestaurantService};
