//! Turns catalog + view state + location into a screen model.
//!
//! Everything here is a pure function of its inputs: the same inputs always
//! produce an equal [`HomeScreen`], which is what the GUI and the CLI draw.

mod text;

use serde::Serialize;

use crate::{
    catalog::Catalog,
    config::MapConfig,
    location::GateState,
    models::{Coordinate, EmergencyResource, Review, SafetyTip, Venue},
    view_state::{Listing, Tab, ViewState},
};

pub use text::{render_text, render_welcome_text};

pub const HOME_TITLE: &str = "✨ SafeNightOut ✨";
pub const USER_MARKER_TITLE: &str = "You are here";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WelcomeScreen {
    pub app_name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub start_label: &'static str,
}

pub fn present_welcome() -> WelcomeScreen {
    WelcomeScreen {
        app_name: "SlaySafe",
        tagline: "Your Safety Companion",
        description: "Discover safe venues, connect with friends, and stay informed about your surroundings",
        start_label: "Start Exploring",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeScreen {
    pub title: &'static str,
    pub tabs: Vec<TabButton>,
    pub content: TabContent,
    pub overlay: Option<DetailOverlay>,
    pub notice: Option<StatusNotice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabButton {
    pub tab: Tab,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TabContent {
    Listing {
        listing: Listing,
        map: MapView,
        items: Vec<VenueSummary>,
    },
    Safety {
        tips: Vec<SafetyTip>,
        resources: Vec<EmergencyResource>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub address: String,
    pub safety_rating: f32,
    pub features: Vec<String>,
}

impl From<&Venue> for VenueSummary {
    fn from(venue: &Venue) -> Self {
        Self {
            id: venue.id.clone(),
            name: venue.name.clone(),
            category: venue.category.clone(),
            address: venue.address.clone(),
            safety_rating: venue.safety_rating,
            features: venue.features.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MapCenter {
    Fix,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinate,
    pub centered_on: MapCenter,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
    pub markers: Vec<MapMarker>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Venue,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: String,
    pub kind: MarkerKind,
    pub coordinate: Coordinate,
    pub title: String,
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailOverlay {
    pub listing: Listing,
    pub venue_id: String,
    pub name: String,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusNotice {
    Locating,
    LocationUnavailable { reason: &'static str, message: String },
}

pub fn present(
    catalog: &Catalog,
    view: &ViewState,
    location: &GateState,
    map: &MapConfig,
) -> HomeScreen {
    let tab = view.tab();
    let content = match tab.listing() {
        Some(listing) => {
            let entries = catalog.listing(listing);
            TabContent::Listing {
                listing,
                map: map_view(entries, location, map),
                items: entries.iter().map(VenueSummary::from).collect(),
            }
        }
        None => TabContent::Safety {
            tips: catalog.safety_tips.clone(),
            resources: catalog.emergency_resources.clone(),
        },
    };

    HomeScreen {
        title: HOME_TITLE,
        tabs: Tab::ALL
            .iter()
            .map(|&t| TabButton {
                tab: t,
                label: t.label(),
                active: t == tab,
            })
            .collect(),
        content,
        overlay: overlay(catalog, view),
        notice: notice(location),
    }
}

fn map_view(entries: &[Venue], location: &GateState, config: &MapConfig) -> MapView {
    let fix = location.fix();
    let mut markers: Vec<MapMarker> = entries
        .iter()
        .filter_map(|venue| {
            venue.coordinate.map(|coordinate| MapMarker {
                id: venue.id.clone(),
                kind: MarkerKind::Venue,
                coordinate,
                title: venue.name.clone(),
                subtitle: Some(venue.category.clone()),
            })
        })
        .collect();

    let (center, centered_on) = match fix {
        Some(fix) => {
            markers.push(MapMarker {
                id: "user".to_string(),
                kind: MarkerKind::User,
                coordinate: fix.coordinate,
                title: USER_MARKER_TITLE.to_string(),
                subtitle: None,
            });
            (fix.coordinate, MapCenter::Fix)
        }
        None => (config.fallback, MapCenter::Fallback),
    };

    MapView {
        center,
        centered_on,
        latitude_delta: config.latitude_delta,
        longitude_delta: config.longitude_delta,
        markers,
    }
}

fn overlay(catalog: &Catalog, view: &ViewState) -> Option<DetailOverlay> {
    let selection = view.selection()?;
    if view.tab().listing() != Some(selection.listing) {
        return None;
    }
    let venue = catalog.find(selection.listing, &selection.venue_id)?;
    Some(DetailOverlay {
        listing: selection.listing,
        venue_id: venue.id.clone(),
        name: venue.name.clone(),
        reviews: venue.reviews.clone(),
    })
}

fn notice(location: &GateState) -> Option<StatusNotice> {
    match location {
        GateState::Pending => Some(StatusNotice::Locating),
        GateState::Available(_) => None,
        GateState::Unavailable(reason) => Some(StatusNotice::LocationUnavailable {
            reason: reason.code(),
            message: reason.message(),
        }),
    }
}
