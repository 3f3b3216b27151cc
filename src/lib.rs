pub mod catalog;
pub mod config;
pub mod error;
pub mod location;
pub mod models;
pub mod navigation;
pub mod presenter;
pub mod view_state;

pub use catalog::Catalog;
pub use config::{AppConfig, MapConfig};
pub use error::{CatalogError, LocationError, LookupNotFound, NavigationError};
pub use location::{GateState, LocationGate, LocationTask, UnavailableReason};
pub use models::{Coordinate, EmergencyResource, LocationFix, Review, SafetyTip, Venue};
pub use navigation::{Navigator, Route};
pub use presenter::{HomeScreen, present, present_welcome};
pub use view_state::{Listing, Tab, ViewState};

#[cfg(feature = "gui")]
pub mod gui;
