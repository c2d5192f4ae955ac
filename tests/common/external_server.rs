use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use livescore_server_rs::models::ScoreReport;
use reqwest::StatusCode;
use tokio::{sync::RwLock, task::JoinHandle};

/// Mock upstream scoring API. Serves canned score payloads (or raw bodies for
/// the failure cases) and counts how often each match id is requested.
#[derive(Default)]
pub struct AppState {
    pub scores: HashMap<String, ScoreReport>,
    pub raw_responses: HashMap<String, (u16, String)>,
    pub score_calls: HashMap<String, u32>,
}

pub struct ExternalServer {
    port: u16,
    handles: Vec<JoinHandle<()>>,

    pub api_state: Arc<RwLock<AppState>>,
}

impl Drop for ExternalServer {
    fn drop(&mut self) {
        for e in &self.handles {
            e.abort();
        }
    }
}

impl ExternalServer {
    pub fn new(port: u16) -> ExternalServer {
        ExternalServer {
            port,
            handles: vec![],
            api_state: Arc::new(RwLock::new(AppState::default())),
        }
    }

    pub async fn start(&mut self) -> Arc<RwLock<AppState>> {
        let external_mock = {
            let port = self.port;
            let state = self.api_state.clone();
            tokio::spawn(async move { ExternalServer::serve_external_data(state, port).await })
        };
        self.handles.push(external_mock);

        tokio::time::sleep(Duration::from_secs(2)).await; // wait for mock to start

        self.api_state.clone()
    }

    pub async fn add_score(&mut self, match_id: &str, score: ScoreReport) {
        self.api_state
            .write()
            .await
            .scores
            .insert(match_id.to_string(), score);
    }

    pub async fn add_raw_response(&mut self, match_id: &str, status: u16, body: &str) {
        self.api_state
            .write()
            .await
            .raw_responses
            .insert(match_id.to_string(), (status, body.to_string()));
    }

    /// Base url for path-style match lookups, ready for id concatenation.
    pub fn get_url(&self) -> String {
        format!("http://localhost:{}/score/", self.port)
    }

    /// Base url for query-style match lookups, ready for id concatenation.
    pub fn get_query_url(&self) -> String {
        format!("http://localhost:{}/score?id=", self.port)
    }

    async fn serve_external_data(state: Arc<RwLock<AppState>>, port: u16) {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let app = Router::new()
            .route("/score/:match_id", get(ExternalServer::get_score_by_path))
            .route("/score", get(ExternalServer::get_score_by_query))
            .with_state(state);

        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .unwrap();
    }

    async fn get_score_by_path(
        Path(match_id): Path<String>,
        State(state): State<Arc<RwLock<AppState>>>,
    ) -> (StatusCode, String) {
        ExternalServer::respond(&match_id, state).await
    }

    async fn get_score_by_query(
        Query(params): Query<HashMap<String, String>>,
        State(state): State<Arc<RwLock<AppState>>>,
    ) -> (StatusCode, String) {
        let match_id = params.get("id").cloned().unwrap_or_default();
        ExternalServer::respond(&match_id, state).await
    }

    async fn respond(match_id: &str, state: Arc<RwLock<AppState>>) -> (StatusCode, String) {
        let mut safe_state = state.write().await;
        *safe_state
            .score_calls
            .entry(match_id.to_string())
            .or_insert(0) += 1;

        if let Some((status, body)) = safe_state.raw_responses.get(match_id) {
            return (
                StatusCode::from_u16(*status).expect("valid status code"),
                body.clone(),
            );
        }
        if let Some(score) = safe_state.scores.get(match_id) {
            (
                StatusCode::OK,
                serde_json::to_string(score).expect("score should encode"),
            )
        } else {
            (StatusCode::NOT_FOUND, "404".to_string())
        }
    }
}
