//! # Axum Helpers
//!
//! Shared building blocks for the HTTP service.
//!
//! ## Modules
//!
//! - **[`errors`]**: [`AppError`], a status-only error response type
//! - **[`extractors`]**: JSON body and integer id extractors whose rejections are status-only
//! - **[`http`]**: CORS and security header middleware
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(Router::new(), &config)?;
//!     create_production_app(router, &config, async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::AppError;

pub use extractors::{IdPath, JsonBody};

pub use http::{create_cors_layer, security_headers};

pub use server::{
    HealthCheckFuture, HealthResponse, create_production_app, create_router, health_router,
    run_health_checks, shutdown_signal,
};
