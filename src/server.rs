use crate::config::NeighbourConfig;
use crate::error::{ErrorKind, Result, StarNeighboursError};
use crate::graph::StarGraph;
use crate::health::{health_check, liveness_check};
use crate::models::ResponseEntry;
use crate::neighbours::compute_star_neighbours;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tower_http::compression::predicate::SizeAbove;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Responses smaller than this many bytes are sent uncompressed.
pub const MIN_COMPRESS_SIZE: u16 = 1000;

/// Shared state for all routes
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<dyn StarGraph>,
    pub config: Arc<NeighbourConfig>,
    pub start_time: Instant,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(graph: Arc<dyn StarGraph>, config: NeighbourConfig) -> Self {
        Self {
            graph,
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }
}

/// Body of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for StarNeighboursError {
    fn into_response(self) -> Response {
        let status = match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::AuthFailure => StatusCode::FORBIDDEN,
            ErrorKind::QueryFailure => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let detail = match self {
            StarNeighboursError::NotFound(msg)
            | StarNeighboursError::QueryFailure(msg)
            | StarNeighboursError::AuthFailure(msg) => msg,
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/repos/:owner/:repo/starneighbours", get(star_neighbours))
        .route("/healthz", get(health_check))
        .route("/livez", get(liveness_check))
        .layer(
            CompressionLayer::new()
                .gzip(true)
                .compress_when(SizeAbove::new(MIN_COMPRESS_SIZE)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API until `shutdown` resolves
pub async fn serve<F>(state: AppState, bind_addr: &str, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Star neighbours API listening on http://{}", bind_addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

async fn star_neighbours(
    State(state): State<AppState>,
    Path((owner, repo)): Path<(String, String)>,
) -> std::result::Result<Json<Vec<ResponseEntry>>, StarNeighboursError> {
    match compute_star_neighbours(state.graph.as_ref(), &state.config, &owner, &repo).await {
        Ok(entries) => Ok(Json(entries)),
        Err(e) => {
            error!(%owner, %repo, kind = ?e.kind(), "Star neighbours failed: {}", e);
            Err(e)
        }
    }
}
