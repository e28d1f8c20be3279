//! OpenAPI document for the catalog endpoints.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::restaurant::list_restaurants,
        crate::handlers::restaurant::get_restaurant,
        crate::handlers::restaurant::delete_restaurant,
        crate::handlers::pizza::list_pizzas,
        crate::handlers::restaurant_pizza::create_restaurant_pizza,
    ),
    components(schemas(
        crate::serializer::RestaurantSummary,
        crate::serializer::RestaurantDetail,
        crate::serializer::RestaurantPizzaEntry,
        crate::serializer::RestaurantPizzaDetail,
        crate::serializer::PizzaSummary,
        crate::handlers::restaurant_pizza::CreateRestaurantPizzaRequest,
        crate::response::ErrorBody,
        crate::response::ErrorsBody,
    )),
    tags(
        (name = "restaurants", description = "Restaurants and their pizzas"),
        (name = "pizzas", description = "Pizza catalog"),
        (name = "restaurant_pizzas", description = "Priced restaurant/pizza associations"),
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /api-docs/openapi.json
pub fn docs_routes() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi))
}
