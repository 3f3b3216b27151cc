use serde::Serialize;
use tracing::{info, warn};

use crate::error::NavigationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Route {
    #[default]
    Welcome,
    Home,
}

/// Two-screen flow: the app opens on `Welcome` and moves to `Home` once.
#[derive(Debug, Default)]
pub struct Navigator {
    current: Route,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn navigate(&mut self, to: Route) -> Result<(), NavigationError> {
        match (self.current, to) {
            (Route::Welcome, Route::Home) => {
                info!(from = ?self.current, to = ?to, "navigate");
                self.current = to;
                Ok(())
            }
            (from, to) => {
                warn!(?from, ?to, "navigation rejected");
                Err(NavigationError { from, to })
            }
        }
    }
}
