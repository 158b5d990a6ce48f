use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Settings;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub templates: usize,
}

pub struct HealthHandler {
    start_time: std::time::Instant,
    settings: Arc<Settings>,
}

impl HealthHandler {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self {
            start_time: std::time::Instant::now(),
            settings,
        }
    }

    /// Entry script of the browser bundle, e.g. `ui/dist/cardform_ui.js`.
    pub fn bundle_path(&self) -> PathBuf {
        self.settings
            .assets
            .dir
            .join(format!("{}.js", self.settings.assets.bundle))
    }

    /// Basic health check - returns 200 if server is running
    pub async fn health(&self) -> impl IntoResponse {
        let status = HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            templates: self.settings.catalog.templates.len(),
        };

        (StatusCode::OK, Json(status))
    }

    /// Readiness check - the page is useless until the bundle it imports is on disk
    pub async fn ready(&self) -> impl IntoResponse {
        let bundle = self.bundle_path();

        if tokio::fs::try_exists(&bundle).await.unwrap_or(false) {
            (StatusCode::OK, Json(serde_json::json!({
                "status": "ready",
                "message": "Server is ready to accept requests"
            })))
        } else {
            tracing::warn!("Browser bundle not found at {}", bundle.display());
            (StatusCode::SERVICE_UNAVAILABLE, Json(serde_json::json!({
                "status": "not_ready",
                "message": format!("Browser bundle missing: {}", bundle.display())
            })))
        }
    }

    /// Liveness check - returns 200 if server is alive
    pub async fn live(&self) -> impl IntoResponse {
        (StatusCode::OK, Json(serde_json::json!({
            "status": "alive",
            "message": "Server is alive"
        })))
    }
}
