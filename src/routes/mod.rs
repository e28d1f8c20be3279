//! Router assembly.

mod catalog;
mod common;
mod docs;
pub use catalog::catalog_routes;
pub use common::{common_routes, common_routes_with_ready};
pub use docs::{docs_routes, ApiDoc};
