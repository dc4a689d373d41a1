//! Shared UI crate for Cohortscope. The snapshot model, metric derivation,
//! charts and the dashboard page all live here; platform crates only launch
//! the app and provide a [`core::config::DashboardConfig`].

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}
