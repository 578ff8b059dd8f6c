//! Typed client for the team endpoints.
//!
//! Every function takes the API root (`BusinessConfig::api_url()`) so
//! commands can read it from their snapshot and tests can point it at a mock
//! server.

use std::collections::HashMap;

use log::debug;
use serde::Deserialize;

use crate::http::{Client, RequestBuilder, Response};
use crate::teams::{PageResult, Team, TeamMember, TeamMemberRole};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("server returned status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let url = request.full_url();
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.message))?;
    debug!("{url} -> {}", response.status);

    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }
    Ok(response)
}

fn decode<T: serde::de::DeserializeOwned>(response: &Response) -> ApiResult<T> {
    response.json().map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET `/team/{team_id}/members`
pub async fn find_team_members(
    api_url: &str,
    team_id: u64,
    query: Option<&str>,
    page: Option<u32>,
    per_page: Option<u32>,
) -> ApiResult<PageResult<TeamMember>> {
    let request = Client::get(format!("{api_url}/team/{team_id}/members"))
        .query("query", query)
        .query("page", page)
        .query("perPage", per_page);

    decode(&send(request).await?)
}

/// GET `/team/{team_id}`
pub async fn get_team(api_url: &str, team_id: u64) -> ApiResult<Team> {
    decode(&send(Client::get(format!("{api_url}/team/{team_id}"))).await?)
}

/// POST `/team/{team_id}/members/{member_id}` with `{ "role": ... }`
pub async fn update_team_member(
    api_url: &str,
    team_id: u64,
    member_id: u64,
    role: TeamMemberRole,
) -> ApiResult<()> {
    let request = Client::post(format!("{api_url}/team/{team_id}/members/{member_id}"))
        .json(&serde_json::json!({ "role": role }))
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    send(request).await.map(|_| ())
}

/// DELETE `/team/{team_id}/members/{member_id}`
pub async fn delete_team_member(api_url: &str, team_id: u64, member_id: u64) -> ApiResult<()> {
    send(Client::delete(format!("{api_url}/team/{team_id}/members/{member_id}")))
        .await
        .map(|_| ())
}

#[derive(Deserialize)]
struct FeatureFlagsResponse {
    payload: HashMap<String, serde_json::Value>,
}

/// GET `/feature-flag/all`
///
/// Only boolean flags are kept; any other payload value counts as off.
pub async fn get_feature_flags(api_url: &str) -> ApiResult<HashMap<String, bool>> {
    let response: FeatureFlagsResponse =
        decode(&send(Client::get(format!("{api_url}/feature-flag/all"))).await?)?;

    Ok(response
        .payload
        .into_iter()
        .map(|(name, value)| (name, value.as_bool().unwrap_or(false)))
        .collect())
}
