//! Pizza handlers: list.

use crate::error::AppError;
use crate::response;
use crate::serializer::PizzaSummary;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "All pizzas", body = [PizzaSummary]),
    ),
    tag = "pizzas"
)]
#[tracing::instrument(skip(state))]
pub async fn list_pizzas(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pizzas = CatalogService::list_pizzas(&state.pool).await?;
    Ok(response::ok(pizzas))
}
