//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;
use crate::domain::SettingsStatus;
use crate::infrastructure::application::BootstrapState;

/// Health response with component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    };

    (StatusCode::OK, Json(response))
}

/// Liveness check - simple check to verify the service is running
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Readiness check - bootstrap state and Simulink settings
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let checks = vec![
        bootstrap_check(state.application.state()),
        settings_check(
            state.application.settings_status(),
            &state.application.settings_load().missing_keys(),
        ),
    ];

    let overall_status = overall(&checks);
    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
    };

    let status_code = match overall_status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

fn bootstrap_check(state: BootstrapState) -> HealthCheck {
    let status = match state {
        BootstrapState::Ready => HealthStatus::Healthy,
        _ => HealthStatus::Unhealthy,
    };

    HealthCheck {
        name: "bootstrap".to_string(),
        status,
        message: Some(state.to_string()),
    }
}

fn settings_check(status: SettingsStatus, missing: &[&str]) -> HealthCheck {
    match status {
        SettingsStatus::Loaded => HealthCheck {
            name: "simulink_settings".to_string(),
            status: HealthStatus::Healthy,
            message: None,
        },
        SettingsStatus::Partial => HealthCheck {
            name: "simulink_settings".to_string(),
            status: HealthStatus::Degraded,
            message: Some(format!("missing: {}", missing.join(", "))),
        },
        SettingsStatus::Failed => HealthCheck {
            name: "simulink_settings".to_string(),
            status: HealthStatus::Degraded,
            message: Some("settings file could not be read".to_string()),
        },
    }
}

fn overall(checks: &[HealthCheck]) -> HealthStatus {
    if checks.iter().any(|c| c.status == HealthStatus::Unhealthy) {
        HealthStatus::Unhealthy
    } else if checks.iter().any(|c| c.status == HealthStatus::Degraded) {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    }
}
