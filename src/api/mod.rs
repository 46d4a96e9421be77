//! Backend API Client
//!
//! Bearer-authenticated GET requests against the clinic backend, organized
//! by domain.

mod auth;
mod patient;

use dashboard_core::{AppConfig, FetchError};
use serde::de::DeserializeOwned;

use crate::storage::TokenStorage;

pub use auth::*;
pub use patient::*;

/// Token persisted for the current session
fn bearer_token(config: &AppConfig) -> Result<String, FetchError> {
    TokenStorage::new(&config.token_storage_key)
        .get()
        .ok_or(FetchError::MissingToken)
}

/// GET `path` with the stored bearer token and decode a 2xx JSON body
async fn get_json<T: DeserializeOwned>(config: &AppConfig, path: &str) -> Result<T, FetchError> {
    let token = bearer_token(config)?;
    let url = config.endpoint(path);
    tracing::debug!(%url, "GET");

    let response = reqwest::Client::new()
        .get(&url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%url, status = status.as_u16(), "request rejected");
        return Err(FetchError::from_status(status.as_u16()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
