//! Permission-gated, one-shot location lookup.
//!
//! The gate asks the provider for permission once, then for a single
//! position, and settles into a terminal state. It never re-polls. Requests
//! are cancellable: dropping the [`CancelHandle`] (or the owning
//! [`LocationGate`]) stops the in-flight lookup.

mod providers;

use std::{sync::Arc, time::Duration};

use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{error::LocationError, models::LocationFix};

pub use providers::{
    ConfiguredProvider, DeniedProvider, FailingProvider, FixedProvider, LocationProvider,
    PermissionStatus, ProviderConfig,
};

#[derive(Debug, Clone, PartialEq)]
pub enum UnavailableReason {
    PermissionDenied,
    FetchError(String),
}

impl UnavailableReason {
    pub fn code(&self) -> &'static str {
        match self {
            UnavailableReason::PermissionDenied => "permission_denied",
            UnavailableReason::FetchError(_) => "fetch_error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            UnavailableReason::PermissionDenied => {
                "Permission to access location was denied".to_string()
            }
            UnavailableReason::FetchError(detail) => {
                format!("Could not determine your location: {}", detail)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum GateState {
    #[default]
    Pending,
    Available(LocationFix),
    Unavailable(UnavailableReason),
}

impl GateState {
    pub fn fix(&self) -> Option<&LocationFix> {
        match self {
            GateState::Available(fix) => Some(fix),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, GateState::Pending)
    }
}

/// Outcome of one location request
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(GateState),
    Cancelled,
}

/// Cancels the request it was created with, explicitly or on drop.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl Drop for CancelHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// A not-yet-driven location request.
///
/// The caller decides where the future runs (an iced `Task`, `tokio::spawn`,
/// or a plain `.await`).
#[derive(Debug)]
pub struct LocationRequest<P> {
    provider: Arc<P>,
    timeout: Option<Duration>,
    cancel_rx: watch::Receiver<bool>,
}

impl<P: LocationProvider> LocationRequest<P> {
    pub fn new(provider: Arc<P>, timeout: Option<Duration>) -> (Self, CancelHandle) {
        let (tx, cancel_rx) = watch::channel(false);
        (
            Self {
                provider,
                timeout,
                cancel_rx,
            },
            CancelHandle { tx },
        )
    }

    pub async fn run(mut self) -> Resolution {
        tokio::select! {
            biased;
            _ = cancelled(&mut self.cancel_rx) => {
                debug!("location request cancelled");
                Resolution::Cancelled
            }
            state = locate(self.provider.as_ref(), self.timeout) => Resolution::Resolved(state),
        }
    }
}

async fn cancelled(rx: &mut watch::Receiver<bool>) {
    loop {
        if *rx.borrow_and_update() {
            return;
        }
        // A dropped sender counts as cancellation too.
        if rx.changed().await.is_err() {
            return;
        }
    }
}

async fn locate<P: LocationProvider>(provider: &P, timeout: Option<Duration>) -> GateState {
    debug!("requesting location permission");
    if provider.request_permission().await == PermissionStatus::Denied {
        warn!("location permission denied");
        return GateState::Unavailable(UnavailableReason::PermissionDenied);
    }

    let position = match timeout {
        Some(limit) => tokio::time::timeout(limit, provider.current_position())
            .await
            .unwrap_or_else(|_| {
                Err(LocationError::FetchError(format!(
                    "timed out after {}s",
                    limit.as_secs()
                )))
            }),
        None => provider.current_position().await,
    };

    match position {
        Ok(fix) => {
            info!(coordinate = %fix.coordinate, "location fix acquired");
            GateState::Available(fix)
        }
        Err(LocationError::PermissionDenied) => {
            warn!("location permission revoked before fetch");
            GateState::Unavailable(UnavailableReason::PermissionDenied)
        }
        Err(LocationError::FetchError(detail)) => {
            warn!(error = %detail, "failed to fetch location");
            GateState::Unavailable(UnavailableReason::FetchError(detail))
        }
    }
}

/// Location state owned by the home screen.
///
/// `Pending` until exactly one request resolves it. `loading` is true only
/// while a request is in flight.
#[derive(Debug, Default)]
pub struct LocationGate {
    state: GateState,
    loading: bool,
    started: bool,
    cancel: Option<CancelHandle>,
}

impl LocationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// User-facing text for an unavailable location
    pub fn error_message(&self) -> Option<String> {
        match &self.state {
            GateState::Unavailable(reason) => Some(reason.message()),
            _ => None,
        }
    }

    /// Begin the single request of this gate. Returns `None` if one was
    /// already started.
    pub fn start<P: LocationProvider>(
        &mut self,
        provider: Arc<P>,
        timeout: Option<Duration>,
    ) -> Option<LocationRequest<P>> {
        if self.started {
            debug!("location gate already started");
            return None;
        }
        let (request, cancel) = LocationRequest::new(provider, timeout);
        self.started = true;
        self.loading = true;
        self.cancel = Some(cancel);
        Some(request)
    }

    /// Apply the request outcome. Returns false if the gate had already
    /// settled and the outcome was ignored.
    pub fn resolve(&mut self, resolution: Resolution) -> bool {
        if self.state.is_resolved() || !self.loading {
            debug!(?resolution, "ignoring late location resolution");
            return false;
        }
        self.loading = false;
        self.cancel = None;
        match resolution {
            Resolution::Resolved(state) => {
                debug!(?state, "location gate resolved");
                self.state = state;
            }
            Resolution::Cancelled => debug!("location gate left pending"),
        }
        true
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.cancel.take() {
            handle.cancel();
        }
        self.loading = false;
    }
}

/// A location request running on the tokio runtime. Aborted on drop.
#[derive(Debug)]
pub struct LocationTask {
    handle: JoinHandle<Resolution>,
    cancel: CancelHandle,
}

impl LocationTask {
    pub fn spawn<P: LocationProvider>(provider: Arc<P>, timeout: Option<Duration>) -> Self {
        let (request, cancel) = LocationRequest::new(provider, timeout);
        Self {
            handle: tokio::spawn(request.run()),
            cancel,
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the terminal state. A cancelled request stays `Pending`.
    pub async fn wait(mut self) -> GateState {
        match (&mut self.handle).await {
            Ok(Resolution::Resolved(state)) => state,
            Ok(Resolution::Cancelled) => GateState::Pending,
            Err(err) => {
                warn!(error = %err, "location task failed");
                GateState::Unavailable(UnavailableReason::FetchError(err.to_string()))
            }
        }
    }
}

impl Drop for LocationTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
