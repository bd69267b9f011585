//! Wire DTOs for the plan API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads. Optional server fields are
//! `Option`/`#[serde(default)]` so older or partial responses still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/login` and `/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    /// Name shown in the UI: the display name when set, otherwise the email.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.email)
    }
}

/// Successful response body of `POST /login` and `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    /// Sent as `null` when the user left it blank.
    pub name: Option<&'a str>,
    pub password: &'a str,
}

/// One scheduled session inside a training plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanSession {
    pub id: i64,
    pub date: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strava_activity_id: Option<String>,
}

/// A training plan as listed by `GET /plans`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub sessions: Vec<PlanSession>,
}

impl TrainingPlan {
    pub fn href(&self) -> String {
        format!("/plans/{}", self.id)
    }
}

/// The two plan-creation contracts the server has exposed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanRequest {
    /// `POST /plans` with an explicit name and goal.
    Manual { name: String, goal: String },
    /// `POST /plans/generate` with a free-text description.
    Generate { prompt: String },
}

impl PlanRequest {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Manual { .. } => "/plans",
            Self::Generate { .. } => "/plans/generate",
        }
    }

    pub fn body(&self) -> serde_json::Value {
        match self {
            Self::Manual { name, goal } => serde_json::json!({ "name": name, "goal": goal }),
            Self::Generate { prompt } => serde_json::json!({ "prompt": prompt }),
        }
    }
}

/// Response of `GET /strava/connect-url`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StravaConnectUrl {
    pub url: String,
}

/// Response of `POST /strava/sync`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StravaSyncResult {
    #[serde(default)]
    pub imported: u32,
    #[serde(default)]
    pub updated: u32,
}

/// Error body shape used by the API for rejected requests.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Option<serde_json::Value>,
}
