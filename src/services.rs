pub mod auth;
pub mod dashboard_service;

pub use auth::AuthService;
pub use dashboard_service::DashboardService;
