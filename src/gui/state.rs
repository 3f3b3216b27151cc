use std::sync::Arc;

use crate::{catalog::Catalog, config::AppConfig, navigation::Navigator};

/// State shared by every screen for the lifetime of the window.
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<Catalog>,
    pub navigator: Navigator,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: Arc<Catalog>) -> Self {
        Self {
            config,
            catalog,
            navigator: Navigator::new(),
        }
    }
}
