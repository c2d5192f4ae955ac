use std::time::Instant;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::log;

use crate::models::ScoreReport;
use crate::validation::{self, ValidationError};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("match ID cannot be empty")]
    EmptyMatchId,

    #[error("failed to fetch score: {0}")]
    Network(#[source] reqwest::Error),

    #[error("unexpected status code: {0}")]
    UpstreamStatus(StatusCode),

    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid score data: {0}")]
    Invalid(#[from] ValidationError),
}

/// Fetches and validates the live score for one match. The request URL is the
/// configured base URL with the match id appended. A non-200 status fails the
/// call before the body is touched; the response body is released on every
/// exit path when the response is dropped.
pub async fn fetch_score(
    client: &Client,
    match_id: &str,
    api_url: &str,
) -> Result<ScoreReport, FetchError> {
    if match_id.is_empty() {
        return Err(FetchError::EmptyMatchId);
    }

    let url = format!("{}{}", api_url, escape_match_id(match_id));

    let before = Instant::now();
    let rsp = client.get(&url).send().await.map_err(FetchError::Network)?;
    if rsp.status() != StatusCode::OK {
        return Err(FetchError::UpstreamStatus(rsp.status()));
    }

    let score: ScoreReport = rsp.json().await.map_err(FetchError::Decode)?;
    log::info!("[REST] Call {url} {:.2?}", before.elapsed());

    validation::validate_score(&score)?;
    Ok(score)
}

// Sanitization hook for the match id. Identity for now, so ids containing
// reserved URL characters pass through unencoded.
fn escape_match_id(match_id: &str) -> &str {
    match_id
}
