use thiserror::Error;

use crate::navigation::Route;
use crate::view_state::Listing;

/// Failures reported by a location provider.
///
/// These never leave the location gate; they are folded into
/// [`GateState::Unavailable`](crate::location::GateState).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("permission to access location was denied")]
    PermissionDenied,
    #[error("could not fetch current position: {0}")]
    FetchError(String),
}

/// A selection referred to an entry the catalog does not have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no {listing} entry with id {id:?}")]
pub struct LookupNotFound {
    pub listing: String,
    pub id: String,
}

impl LookupNotFound {
    pub fn new(listing: Option<Listing>, id: impl Into<String>) -> Self {
        Self {
            listing: listing.map_or_else(|| "safety".to_string(), |l| l.to_string()),
            id: id.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate {kind} id {id:?}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("{kind} {id:?} has rating {rating} outside 0.0..=5.0")]
    RatingOutOfRange {
        kind: &'static str,
        id: String,
        rating: f32,
    },
    #[error("venue {id:?} has an invalid coordinate")]
    InvalidCoordinate { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot navigate from {from:?} to {to:?}")]
pub struct NavigationError {
    pub from: Route,
    pub to: Route,
}
