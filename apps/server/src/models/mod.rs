//! Domain models for the marketplace API

pub mod customer;
pub mod restaurant;

pub use customer::{Customer, CustomerUpdate, NewCustomer, CUSTOMER_FIELDS};
pub use restaurant::{
    BrowseResponse, Coordinates, PriceRange, RestaurantRecord, RestaurantSummary,
};
