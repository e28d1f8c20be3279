//! Service-level routes: the index page, liveness and readiness.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Html, routing::get, Json, Router};
use serde::Serialize;

/// Shared body of `/health` and `/ready`; `database` is only reported by readiness.
#[derive(Serialize)]
struct Probe {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

impl Probe {
    fn up(database: Option<&'static str>) -> Json<Self> {
        Json(Self { status: "ok", database })
    }
}

async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

async fn health() -> Json<Probe> {
    Probe::up(None)
}

async fn ready(State(state): State<AppState>) -> Result<Json<Probe>, (StatusCode, Json<Probe>)> {
    match sqlx::query("SELECT 1").fetch_optional(&state.pool).await {
        Ok(_) => Ok(Probe::up(Some("ok"))),
        Err(e) => {
            tracing::warn!(error = %e, "store unreachable");
            let body = Probe {
                status: "degraded",
                database: Some("unavailable"),
            };
            Err((StatusCode::SERVICE_UNAVAILABLE, Json(body)))
        }
    }
}

/// GET / and GET /health.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

/// [`common_routes`] plus GET /ready, which checks the store.
pub fn common_routes_with_ready(state: AppState) -> Router {
    common_routes().merge(Router::new().route("/ready", get(ready)).with_state(state))
}
