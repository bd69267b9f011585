//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the `AuthSession` from Leptos context and call the REST
//! API directly; pages compose them per route.

pub mod create_plan_form;
pub mod navbar;
pub mod plans_list;
pub mod protected_route;
pub mod strava;
