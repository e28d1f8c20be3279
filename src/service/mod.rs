//! CatalogService: the catalog operations, each in its own transaction.

mod catalog;
mod validation;
pub use catalog::CatalogService;
pub use validation::{RestaurantPizzaValidator, MAX_PRICE, MIN_PRICE};
