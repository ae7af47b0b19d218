use std::{net::SocketAddr, path::PathBuf};

use axum::{body::Bytes, http::StatusCode, routing::{get, post}, Json, Router};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{DecodeResponse, EncodeResponse, ErrorBody},
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod config;

use config::{load_settings, load_settings_from, Settings};

type ApiRejection = (StatusCode, Json<ErrorBody>);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = match std::env::var("APP__CONFIG_FILE") {
        Ok(path) => load_settings_from(&PathBuf::from(path))?,
        Err(_) => load_settings(),
    };
    let app = build_router(&settings);

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, max_body_bytes = settings.max_body_bytes, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(settings: &Settings) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(api::encode_route(), post(http_encode))
        .route(api::decode_route(), post(http_decode))
        .layer(RequestBodyLimitLayer::new(settings.max_body_bytes))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_encode(body: Bytes) -> Result<Json<EncodeResponse>, ApiRejection> {
    let req = api::parse_text_request(&body).map_err(reject)?;
    Ok(Json(api::encode(&req)))
}

async fn http_decode(body: Bytes) -> Result<Json<DecodeResponse>, ApiRejection> {
    let req = api::parse_text_request(&body).map_err(reject)?;
    api::decode(&req).map(Json).map_err(reject)
}

fn reject(err: ApiError) -> ApiRejection {
    let status = match err.code {
        ErrorCode::InvalidRequest | ErrorCode::InvalidBase64 => StatusCode::BAD_REQUEST,
    };
    warn!(code = ?err.code, message = %err.message, "request rejected");
    (status, Json(err.into()))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
