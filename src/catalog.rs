use std::{collections::HashSet, path::Path};

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::CatalogError,
    models::{EmergencyResource, SafetyTip, Venue},
    view_state::Listing,
};

const BUILTIN_CATALOG: &str = include_str!("../fixtures/catalog.toml");

/// Static content shown by the app.
///
/// Loaded once and never mutated afterwards; every list keeps its file order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub venues: Vec<Venue>,
    #[serde(default)]
    pub events: Vec<Venue>,
    #[serde(default)]
    pub safety_tips: Vec<SafetyTip>,
    #[serde(default)]
    pub emergency_resources: Vec<EmergencyResource>,
}

impl Catalog {
    /// The catalog bundled with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {:?}", path))?;
        let catalog = Self::from_toml_str(&source)
            .with_context(|| format!("Invalid catalog {:?}", path))?;
        debug!(
            path = %path.display(),
            venues = catalog.venues.len(),
            events = catalog.events.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn listing(&self, listing: Listing) -> &[Venue] {
        match listing {
            Listing::Venues => &self.venues,
            Listing::Events => &self.events,
        }
    }

    pub fn find(&self, listing: Listing, id: &str) -> Option<&Venue> {
        self.listing(listing).iter().find(|venue| venue.id == id)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (kind, entries) in [("venue", &self.venues), ("event", &self.events)] {
            unique_ids(kind, entries.iter().map(|v| v.id.as_str()))?;
            for venue in entries {
                check_rating(kind, &venue.id, venue.safety_rating)?;
                unique_ids("review", venue.reviews.iter().map(|r| r.id.as_str()))?;
                for review in &venue.reviews {
                    check_rating("review", &review.id, review.rating)?;
                }
                if venue.coordinate.is_some_and(|c| !c.is_valid()) {
                    return Err(CatalogError::InvalidCoordinate {
                        id: venue.id.clone(),
                    });
                }
            }
        }
        unique_ids("safety tip", self.safety_tips.iter().map(|t| t.id.as_str()))?;
        unique_ids(
            "emergency resource",
            self.emergency_resources.iter().map(|r| r.id.as_str()),
        )?;
        Ok(())
    }
}

fn unique_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn check_rating(kind: &'static str, id: &str, rating: f32) -> Result<(), CatalogError> {
    if (0.0..=5.0).contains(&rating) {
        Ok(())
    } else {
        Err(CatalogError::RatingOutOfRange {
            kind,
            id: id.to_string(),
            rating,
        })
    }
}
