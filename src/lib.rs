pub mod config;
pub mod error;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::AppState;

/// Create the app router with all routes configured
///
/// Useful for integration testing without starting the full server.
pub fn create_app(
    config: config::Config,
    catalog: std::sync::Arc<smaakbalans_catalog::Catalog>,
) -> axum::Router {
    routes::router(AppState { config, catalog })
}
