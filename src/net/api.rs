//! REST endpoints consumed by the client, one function per route.
//!
//! Each helper takes the `ApiClient` to use, so the caller decides which
//! token snapshot (if any) goes on the request.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::client::{ApiClient, Transport};
use super::error::ApiError;
use super::types::{
    AuthResponse, LoginRequest, PlanRequest, RegisterRequest, StravaConnectUrl, StravaSyncResult, TrainingPlan,
};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const PLANS_PATH: &str = "/plans";
pub const STRAVA_CONNECT_URL_PATH: &str = "/strava/connect-url";
pub const STRAVA_SYNC_PATH: &str = "/strava/sync";

/// `POST /login`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn login<T: Transport>(client: &ApiClient<T>, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    client.post(LOGIN_PATH, &LoginRequest { email, password }).await
}

/// `POST /register`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn register<T: Transport>(
    client: &ApiClient<T>,
    email: &str,
    name: Option<&str>,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    client.post(REGISTER_PATH, &RegisterRequest { email, name, password }).await
}

/// `GET /plans`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn list_plans<T: Transport>(client: &ApiClient<T>) -> Result<Vec<TrainingPlan>, ApiError> {
    client.get(PLANS_PATH).await
}

/// `POST /plans` or `POST /plans/generate`, depending on the request kind.
///
/// The response body is returned untyped: the two server variants disagree on
/// what they send back and the client only needs to know the call succeeded.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn create_plan<T: Transport>(
    client: &ApiClient<T>,
    request: &PlanRequest,
) -> Result<serde_json::Value, ApiError> {
    client.post(request.endpoint(), &request.body()).await
}

/// `GET /strava/connect-url`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn strava_connect_url<T: Transport>(client: &ApiClient<T>) -> Result<StravaConnectUrl, ApiError> {
    client.get(STRAVA_CONNECT_URL_PATH).await
}

/// `POST /strava/sync` with an empty JSON object.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn strava_sync<T: Transport>(client: &ApiClient<T>) -> Result<StravaSyncResult, ApiError> {
    client.post(STRAVA_SYNC_PATH, &serde_json::json!({})).await
}
