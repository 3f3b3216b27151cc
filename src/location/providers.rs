use std::future::Future;

use serde::Deserialize;
use tracing::debug;

use crate::{
    config::DEFAULT_FALLBACK,
    error::LocationError,
    models::{Coordinate, LocationFix},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Host platform capability behind the location gate.
///
/// `request_permission` is asked exactly once per gate, and
/// `current_position` only after a grant.
pub trait LocationProvider: Send + Sync + 'static {
    fn request_permission(&self) -> impl Future<Output = PermissionStatus> + Send;
    fn current_position(
        &self,
    ) -> impl Future<Output = Result<LocationFix, LocationError>> + Send;
}

/// Grants permission and always reports the same position
#[derive(Debug, Clone)]
pub struct FixedProvider {
    pub coordinate: Coordinate,
    pub accuracy: Option<f64>,
}

impl LocationProvider for FixedProvider {
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn current_position(&self) -> Result<LocationFix, LocationError> {
        debug!(coordinate = %self.coordinate, "fixed provider position");
        Ok(LocationFix::now(self.coordinate, self.accuracy))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedProvider;

impl LocationProvider for DeniedProvider {
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Denied
    }

    async fn current_position(&self) -> Result<LocationFix, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

/// Grants permission but every position request fails
#[derive(Debug, Clone)]
pub struct FailingProvider {
    pub message: String,
}

impl LocationProvider for FailingProvider {
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn current_position(&self) -> Result<LocationFix, LocationError> {
        Err(LocationError::FetchError(self.message.clone()))
    }
}

/// Provider selection from the `[location.provider]` config table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProviderConfig {
    Fixed {
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        accuracy: Option<f64>,
    },
    Denied,
    Failing {
        #[serde(default = "default_failure")]
        message: String,
    },
}

fn default_failure() -> String {
    "location services unavailable".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig::Fixed {
            latitude: DEFAULT_FALLBACK.latitude,
            longitude: DEFAULT_FALLBACK.longitude,
            accuracy: None,
        }
    }
}

impl ProviderConfig {
    pub fn build(&self) -> ConfiguredProvider {
        match self {
            ProviderConfig::Fixed {
                latitude,
                longitude,
                accuracy,
            } => ConfiguredProvider::Fixed(FixedProvider {
                coordinate: Coordinate::new(*latitude, *longitude),
                accuracy: *accuracy,
            }),
            ProviderConfig::Denied => ConfiguredProvider::Denied(DeniedProvider),
            ProviderConfig::Failing { message } => ConfiguredProvider::Failing(FailingProvider {
                message: message.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ConfiguredProvider {
    Fixed(FixedProvider),
    Denied(DeniedProvider),
    Failing(FailingProvider),
}

impl LocationProvider for ConfiguredProvider {
    async fn request_permission(&self) -> PermissionStatus {
        match self {
            ConfiguredProvider::Fixed(p) => p.request_permission().await,
            ConfiguredProvider::Denied(p) => p.request_permission().await,
            ConfiguredProvider::Failing(p) => p.request_permission().await,
        }
    }

    async fn current_position(&self) -> Result<LocationFix, LocationError> {
        match self {
            ConfiguredProvider::Fixed(p) => p.current_position().await,
            ConfiguredProvider::Denied(p) => p.current_position().await,
            ConfiguredProvider::Failing(p) => p.current_position().await,
        }
    }
}
