//! # Cardform - Business Card Form
//!
//! Hosts the business card form page and the browser bundle (`cardform-ui`)
//! that drives it. Card rendering itself happens elsewhere; the form posts to
//! the configured renderer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cardform::config::Settings;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Arc::new(Settings::new()?);
//!     let app = cardform::create_app(settings)?;
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Layout
//!
//! - **Catalog**: templates, fonts and colour schemes offered by the form
//! - **Adapters**: HTTP handlers for the page and health checks
//! - **Config**: file, environment and CLI settings with validation

pub mod adapters;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;

use crate::adapters::health_handler::HealthHandler;
use crate::adapters::page_handler::PageHandler;
use crate::config::Settings;
use crate::error::AppError;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Creates the Axum application router.
///
/// # Routes
///
/// * `/` - the card form page
/// * `/health`, `/health/ready`, `/health/live` - health checks
/// * `/pkg/*` - compiled browser bundle from `assets.dir`
pub fn create_app(settings: Arc<Settings>) -> Result<Router, AppError> {
    let page_handler = Arc::new(PageHandler::new(settings.clone())?);
    let health_handler = Arc::new(HealthHandler::new(settings.clone()));

    let router = Router::new()
        .route("/", get({
            let handler = page_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.index().await }
            }
        }))
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/ready", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.ready().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }))
        .nest_service("/pkg", ServeDir::new(&settings.assets.dir))
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
