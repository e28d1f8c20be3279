//! Restaurant handlers: list, read, delete.

use super::parse_restaurant_id;
use crate::error::AppError;
use crate::response::{self, ErrorBody};
use crate::serializer::{RestaurantDetail, RestaurantSummary};
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "All restaurants", body = [RestaurantSummary]),
    ),
    tag = "restaurants"
)]
#[tracing::instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let restaurants = CatalogService::list_restaurants(&state.pool).await?;
    Ok(response::ok(restaurants))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(
        ("id" = i64, Path, description = "Restaurant id")
    ),
    responses(
        (status = 200, description = "Restaurant with its pizzas", body = RestaurantDetail),
        (status = 404, description = "Restaurant not found", body = ErrorBody),
    ),
    tag = "restaurants"
)]
#[tracing::instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_restaurant_id(&id_str)?;
    let restaurant = CatalogService::get_restaurant(&state.pool, id).await?;
    Ok(response::ok(restaurant))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    params(
        ("id" = i64, Path, description = "Restaurant id")
    ),
    responses(
        (status = 204, description = "Restaurant and its pizzas deleted"),
        (status = 404, description = "Restaurant not found", body = ErrorBody),
    ),
    tag = "restaurants"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_restaurant_id(&id_str)?;
    CatalogService::delete_restaurant(&state.pool, id).await?;
    Ok(response::no_content())
}
