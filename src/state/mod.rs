//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the plain token/user store with its storage backends; `auth`
//! wraps it in a reactive handle for context; `plans` models the dashboard
//! list load.

pub mod auth;
pub mod plans;
pub mod session;
