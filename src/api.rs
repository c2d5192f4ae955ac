use std::net::SocketAddr;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Router,
};
use reqwest::StatusCode;
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tracing::log;

use crate::{config_handler::Config, format_service, score_client};

const MAX_MATCH_ID_LEN: usize = 10;

type SecurityHeaders = [(&'static str, &'static str); 6];

/// Fixed headers carried by every /livescore response, success or failure.
/// The content-type entry overrides the text/plain default axum would set.
fn security_headers() -> SecurityHeaders {
    [
        ("content-type", "text/plain; charset=utf-8"),
        ("x-content-type-options", "nosniff"),
        ("x-frame-options", "DENY"),
        ("x-xss-protection", "1; mode=block"),
        (
            "strict-transport-security",
            "max-age=31536000; includeSubDomains",
        ),
        ("x-robots-tag", "noindex, nofollow"),
    ]
}

#[derive(Clone)]
pub struct ApiState {
    /// Shared upstream client, built once at startup with the configured
    /// timeout. Safe for concurrent reuse across requests.
    pub client: reqwest::Client,
    /// The config file is re-read from this path on every request.
    pub config_path: String,
}

#[derive(Deserialize)]
struct LiveScoreQuery {
    #[serde(default)]
    id: String,
}

pub struct Api;
impl Api {
    pub async fn serve(port: u16, state: ApiState) {
        let app = Router::new()
            .route("/livescore", axum::routing::get(Api::get_livescore))
            .route("/404", axum::routing::get(Api::not_found))
            .route("/500", axum::routing::get(Api::internal_server_error))
            .with_state(state)
            .layer(ServiceBuilder::new().layer(CompressionLayer::new()));
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        log::info!("[API] Listening on {}", addr);
        _ = axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await;
    }

    async fn get_livescore(
        Query(query): Query<LiveScoreQuery>,
        State(state): State<ApiState>,
    ) -> impl IntoResponse {
        let headers = security_headers();

        if query.id.is_empty() {
            return (
                StatusCode::BAD_REQUEST,
                headers,
                "match ID is required".to_string(),
            );
        }
        if query.id.len() > MAX_MATCH_ID_LEN {
            return (
                StatusCode::BAD_REQUEST,
                headers,
                "match ID is too long".to_string(),
            );
        }

        let config = match Config::load(&state.config_path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("[API] Error loading config: {e}");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    headers,
                    "Internal server error".to_string(),
                );
            }
        };

        match score_client::fetch_score(&state.client, &query.id, &config.api_url).await {
            Ok(score) => (StatusCode::OK, headers, format_service::format_score(&score)),
            Err(e) => {
                log::error!("[API] Error fetching score: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    headers,
                    "Internal server error".to_string(),
                )
            }
        }
    }

    async fn not_found() -> impl IntoResponse {
        (StatusCode::NOT_FOUND, "404 Page Not Found")
    }

    async fn internal_server_error() -> impl IntoResponse {
        (StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error")
    }
}
