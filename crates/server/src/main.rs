use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shared::{
    domain::{RequestId, RequestRecord},
    error::{ApiError, ErrorCode},
    protocol::{health_route, messages_route, NewRequestPayload},
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;

use api::{create_request, get_request, list_requests, load_seed, ApiContext};
use app_state::AppState;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings();
    let seed = match &settings.seed_path {
        Some(path) => load_seed(path).map_err(|error| {
            error!(path = %path.display(), %error, "failed to load seed records");
            error
        })?,
        None => Vec::new(),
    };
    info!(records = seed.len(), "request book initialised");

    let state = AppState {
        api: ApiContext::new(seed),
    };
    let app = build_router(Arc::new(state), settings.max_body_bytes);

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route(health_route(), get(healthz))
        .route(
            messages_route(),
            get(http_list_requests).post(http_create_request),
        )
        .route("/messages/:id", get(http_get_request))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_list_requests(State(state): State<Arc<AppState>>) -> Json<Vec<RequestRecord>> {
    Json(list_requests(&state.api).await)
}

async fn http_get_request(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<RequestRecord>, (StatusCode, Json<ApiError>)> {
    get_request(&state.api, RequestId(id))
        .await
        .map(Json)
        .map_err(with_status)
}

async fn http_create_request(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewRequestPayload>,
) -> Result<(StatusCode, Json<RequestRecord>), (StatusCode, Json<ApiError>)> {
    let record = create_request(&state.api, payload)
        .await
        .map_err(with_status)?;
    Ok((StatusCode::CREATED, Json(record)))
}

fn with_status(err: ApiError) -> (StatusCode, Json<ApiError>) {
    let status = match err.code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(err))
}
