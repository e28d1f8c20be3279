//! Restaurant pizza handlers: create.

use crate::error::AppError;
use crate::response::{self, ErrorsBody};
use crate::serializer::RestaurantPizzaDetail;
use crate::service::{CatalogService, RestaurantPizzaValidator};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use utoipa::ToSchema;

/// Documented request shape. The handler reads the body as raw JSON so that
/// every malformed payload is reported the same way.
#[derive(ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    pub price: f64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Restaurant pizza created", body = RestaurantPizzaDetail),
        (status = 400, description = "Validation errors", body = ErrorsBody),
    ),
    tag = "restaurant_pizzas"
)]
#[tracing::instrument(skip(state, payload))]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let candidate = RestaurantPizzaValidator::parse(&body)?;
    let created = CatalogService::create_restaurant_pizza(&state.pool, candidate).await?;
    Ok(response::created(created))
}
