use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use slaysafe::{
    Catalog, Coordinate, LocationError, LocationFix,
    location::{LocationProvider, PermissionStatus},
};
use tempfile::NamedTempFile;

/// Coordinate used as the device position in tests
pub const TEST_FIX: Coordinate = Coordinate::new(40.7128, -74.0060);

pub fn builtin_catalog() -> Catalog {
    Catalog::builtin().expect("built-in catalog should be valid")
}

/// Writes `contents` to a temporary `.toml` file that lives as long as the handle.
pub fn write_toml(contents: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp toml file");
    std::fs::write(file.path(), contents).expect("Failed to write temp toml file");
    file
}

/// Provider whose position request never completes
#[derive(Debug, Default)]
pub struct HangingProvider;

impl LocationProvider for HangingProvider {
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    fn current_position(
        &self,
    ) -> impl Future<Output = Result<LocationFix, LocationError>> + Send {
        std::future::pending()
    }
}

/// Counts calls while answering with a fixed permission and position.
#[derive(Debug)]
pub struct CountingProvider {
    pub permission: PermissionStatus,
    pub permission_calls: AtomicUsize,
    pub position_calls: AtomicUsize,
}

impl CountingProvider {
    pub fn new(permission: PermissionStatus) -> Arc<Self> {
        Arc::new(Self {
            permission,
            permission_calls: AtomicUsize::new(0),
            position_calls: AtomicUsize::new(0),
        })
    }

    pub fn permission_calls(&self) -> usize {
        self.permission_calls.load(Ordering::SeqCst)
    }

    pub fn position_calls(&self) -> usize {
        self.position_calls.load(Ordering::SeqCst)
    }
}

impl LocationProvider for CountingProvider {
    async fn request_permission(&self) -> PermissionStatus {
        self.permission_calls.fetch_add(1, Ordering::SeqCst);
        self.permission
    }

    async fn current_position(&self) -> Result<LocationFix, LocationError> {
        self.position_calls.fetch_add(1, Ordering::SeqCst);
        Ok(LocationFix::now(TEST_FIX, Some(5.0)))
    }
}

pub fn fixed_provider() -> Arc<slaysafe::location::FixedProvider> {
    Arc::new(slaysafe::location::FixedProvider {
        coordinate: TEST_FIX,
        accuracy: Some(12.0),
    })
}
