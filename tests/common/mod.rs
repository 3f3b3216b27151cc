mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from slaysafe for tests
pub use slaysafe::{
    AppConfig, Catalog, Coordinate, GateState, LocationFix, LocationGate, LocationTask,
    LookupNotFound, MapConfig, Tab, UnavailableReason, ViewState,
    location::{
        DeniedProvider, FailingProvider, FixedProvider, LocationProvider, PermissionStatus,
        Resolution,
    },
    presenter::{self, HomeScreen, MapCenter, MarkerKind, StatusNotice, TabContent},
    view_state::Listing,
};
