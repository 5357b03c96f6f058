//! Todo service configuration.

use std::env;
use std::time::Duration;

use common::{CreatePolicy, ServiceConfig, StoreConfig};

/// Default deadline for one CLI run
const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Log level from TODO_SERVICE_LOG_LEVEL, then LOG_LEVEL, then "info".
pub fn log_level_from_env() -> String {
    env::var("TODO_SERVICE_LOG_LEVEL")
        .or_else(|_| env::var("LOG_LEVEL"))
        .unwrap_or_else(|_| "info".to_string())
}

/// Todo service configuration.
#[derive(Debug, Clone)]
pub struct TodoServiceConfig {
    /// Name and log level
    pub service: ServiceConfig,
    /// In-memory store behavior
    pub store: StoreConfig,
    /// Deadline applied to each run's context
    pub operation_timeout: Duration,
}

impl TodoServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let create_policy = match env::var("TODO_SERVICE_CREATE_POLICY") {
            Ok(raw) => raw.parse::<CreatePolicy>().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to {}", e, CreatePolicy::default());
                CreatePolicy::default()
            }),
            Err(_) => CreatePolicy::default(),
        };

        Self {
            service: ServiceConfig {
                service_name: "todo-service".to_string(),
                log_level: log_level_from_env(),
            },
            store: StoreConfig { create_policy },
            operation_timeout: Duration::from_millis(
                env::var("TODO_SERVICE_TIMEOUT_MS")
                    .or_else(|_| env::var("OPERATION_TIMEOUT_MS"))
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_MS),
            ),
        }
    }
}

impl Default for TodoServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "todo-service".to_string(),
                ..ServiceConfig::default()
            },
            store: StoreConfig::default(),
            operation_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}
