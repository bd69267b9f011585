//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Authenticated pages wrap their body in `ProtectedRoute`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod new_plan;
pub mod plan_detail;
pub mod register;
