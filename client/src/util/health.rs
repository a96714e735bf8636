//! Health report evaluation for the status dashboard.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use crate::net::types::HealthStatus;

/// Literal a healthy field carries.
pub const HEALTHY: &str = "ok";

/// Which field of [`HealthStatus`] a dashboard row reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceKey {
    Backend,
    Database,
    Llm,
}

/// Fixed descriptor for one dashboard row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub key: ServiceKey,
    pub label: &'static str,
    pub description: &'static str,
}

/// Rows in display order.
pub const SERVICES: [ServiceDescriptor; 3] = [
    ServiceDescriptor {
        key: ServiceKey::Backend,
        label: "Backend API",
        description: "Brief service availability",
    },
    ServiceDescriptor {
        key: ServiceKey::Database,
        label: "Database",
        description: "Brief storage connection & read/write",
    },
    ServiceDescriptor {
        key: ServiceKey::Llm,
        label: "Language model",
        description: "Summarization provider reachability",
    },
];

impl ServiceKey {
    pub fn read(self, health: &HealthStatus) -> &str {
        match self {
            Self::Backend => &health.backend,
            Self::Database => &health.database,
            Self::Llm => &health.llm,
        }
    }
}

/// Rendered state of one service row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServiceState {
    Checking,
    Operational,
    /// Carries the raw status string for display.
    Degraded(String),
}

impl ServiceState {
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Checking => "Checking",
            Self::Operational => "Operational",
            Self::Degraded(_) => "Degraded",
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Degraded(raw) => Some(raw.as_str()),
            _ => None,
        }
    }
}

/// State of a row given the latest report, `None` while a check is pending.
pub fn service_state(key: ServiceKey, health: Option<&HealthStatus>) -> ServiceState {
    let Some(health) = health else {
        return ServiceState::Checking;
    };
    let raw = key.read(health);
    if raw == HEALTHY {
        ServiceState::Operational
    } else {
        ServiceState::Degraded(raw.to_owned())
    }
}

/// True iff every field is exactly `"ok"`.
pub fn all_operational(health: &HealthStatus) -> bool {
    SERVICES.iter().all(|svc| svc.key.read(health) == HEALTHY)
}

pub fn aggregate_message(health: &HealthStatus) -> &'static str {
    if all_operational(health) {
        "All systems operational"
    } else {
        "One or more services are degraded"
    }
}
