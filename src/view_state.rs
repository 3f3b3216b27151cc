use serde::Serialize;
use tracing::debug;

use crate::{catalog::Catalog, error::LookupNotFound};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Venues,
    Events,
    Safety,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Venues, Tab::Events, Tab::Safety];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Venues => "Venues",
            Tab::Events => "Events",
            Tab::Safety => "Safety",
        }
    }

    /// The venue-shaped list behind this tab, if it has one.
    pub fn listing(self) -> Option<Listing> {
        match self {
            Tab::Venues => Some(Listing::Venues),
            Tab::Events => Some(Listing::Events),
            Tab::Safety => None,
        }
    }
}

/// Catalog lists that share the venue shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Listing {
    Venues,
    Events,
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Listing::Venues => write!(f, "venues"),
            Listing::Events => write!(f, "events"),
        }
    }
}

/// Detail overlay target, looked up by id rather than held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub listing: Listing,
    pub venue_id: String,
}

/// In-memory UI state of the home screen.
///
/// Exactly one tab is active at any time. A selection is only stored after
/// the catalog confirmed the id exists, and only while its list is the one
/// on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    tab: Tab,
    selection: Option<Selection>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Switch tabs. An open overlay is closed unless the new tab shows the
    /// same list.
    pub fn select_tab(&mut self, tab: Tab) {
        debug!(from = ?self.tab, to = ?tab, "select tab");
        self.tab = tab;
        if self
            .selection
            .as_ref()
            .is_some_and(|s| tab.listing() != Some(s.listing))
        {
            debug!("selection closed by tab switch");
            self.selection = None;
        }
    }

    /// Open the detail overlay for an entry of the current tab's list.
    ///
    /// An unknown id leaves the state untouched.
    pub fn select_venue(&mut self, catalog: &Catalog, id: &str) -> Result<(), LookupNotFound> {
        let listing = self.tab.listing();
        let found = listing.and_then(|listing| catalog.find(listing, id).map(|_| listing));
        match found {
            Some(listing) => {
                debug!(%listing, id, "select venue");
                self.selection = Some(Selection {
                    listing,
                    venue_id: id.to_string(),
                });
                Ok(())
            }
            None => {
                debug!(tab = ?self.tab, id, "venue not found");
                Err(LookupNotFound::new(listing, id))
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// True when no overlay is open and the default tab is active.
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }
}
