//! Health checks
//!
//! `/health` answers as long as the process is serving requests.
//! `/health/ready` also pings the user store.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roster_services::UserStore;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Health check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Store health
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub response_time_ms: u64,
}

/// Health report
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ComponentHealth>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HealthReport {
    pub fn http_status(&self) -> StatusCode {
        match self.status {
            HealthStatus::Healthy => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

const STORE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Health checker service
pub struct HealthChecker {
    start_time: Instant,
    store: UserStore,
    store_kind: &'static str,
}

impl HealthChecker {
    pub fn new(store: UserStore, store_kind: &'static str) -> Self {
        Self {
            start_time: Instant::now(),
            store,
            store_kind,
        }
    }

    fn report(&self, status: HealthStatus, components: Vec<ComponentHealth>) -> HealthReport {
        HealthReport {
            status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            components,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Process-level check; never touches the store
    pub fn liveness(&self) -> HealthReport {
        self.report(HealthStatus::Healthy, Vec::new())
    }

    /// Ping the store
    pub async fn readiness(&self) -> HealthReport {
        let store = self.check_store().await;
        self.report(store.status, vec![store])
    }

    async fn check_store(&self) -> ComponentHealth {
        let start = Instant::now();

        let (status, message) = match tokio::time::timeout(STORE_CHECK_TIMEOUT, self.store.ping()).await {
            Ok(Ok(())) => (HealthStatus::Healthy, None),
            Ok(Err(e)) => {
                warn!(error = %e, store = self.store_kind, "Store ping failed");
                (HealthStatus::Unhealthy, Some(e.to_string()))
            }
            Err(_) => {
                warn!(store = self.store_kind, "Store ping timed out");
                (HealthStatus::Unhealthy, Some("timed out".to_string()))
            }
        };

        ComponentHealth {
            name: self.store_kind.to_string(),
            status,
            message,
            response_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Liveness check
pub async fn liveness(State(health): State<Arc<HealthChecker>>) -> Json<HealthReport> {
    Json(health.liveness())
}

/// Readiness check
pub async fn readiness(State(health): State<Arc<HealthChecker>>) -> (StatusCode, Json<HealthReport>) {
    let report = health.readiness().await;
    (report.http_status(), Json(report))
}
