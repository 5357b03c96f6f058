//! Shared configuration structures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Base service configuration shared by all services.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// What a create does when the id is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatePolicy {
    /// Fail with `Conflict` and leave the stored record untouched
    #[default]
    Reject,
    /// Silently replace the stored record
    Upsert,
}

impl FromStr for CreatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(CreatePolicy::Reject),
            "upsert" => Ok(CreatePolicy::Upsert),
            other => Err(format!("unknown create policy: {}", other)),
        }
    }
}

impl fmt::Display for CreatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatePolicy::Reject => write!(f, "reject"),
            CreatePolicy::Upsert => write!(f, "upsert"),
        }
    }
}

/// In-memory store configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    pub create_policy: CreatePolicy,
}
