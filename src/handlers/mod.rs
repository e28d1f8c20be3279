//! HTTP handlers for the catalog resources and the service-level endpoints.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
pub use pizza::*;
pub use restaurant::*;
pub use restaurant_pizza::*;

use crate::error::{AppError, RESTAURANT_NOT_FOUND};

/// Restaurant ids in paths are integers; anything else cannot name a restaurant.
fn parse_restaurant_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::NotFound(RESTAURANT_NOT_FOUND))
}
