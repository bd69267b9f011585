//! Plan-list load state for the dashboard.
//!
//! DESIGN
//! ======
//! The list is fetched once per mount and never cached, so its whole state is
//! one enum: exactly one of loading, failed, or loaded is shown at a time.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

use crate::net::error::ApiError;
use crate::net::types::TrainingPlan;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum PlansState {
    #[default]
    Loading,
    Failed(String),
    Loaded(Vec<TrainingPlan>),
}

impl PlansState {
    pub fn from_result(result: Result<Vec<TrainingPlan>, ApiError>) -> Self {
        match result {
            Ok(plans) => Self::Loaded(plans),
            Err(e) => Self::Failed(e.user_message()),
        }
    }

    /// What the list should render for this state.
    pub fn view(&self) -> PlansView<'_> {
        match self {
            Self::Loading => PlansView::Loading,
            Self::Failed(message) => PlansView::Error(message),
            Self::Loaded(plans) if plans.is_empty() => PlansView::Empty,
            Self::Loaded(plans) => PlansView::List(plans),
        }
    }
}

/// One render branch of the plan list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlansView<'a> {
    Loading,
    Error(&'a str),
    /// Loaded with nothing to show; not an error.
    Empty,
    List(&'a [TrainingPlan]),
}
