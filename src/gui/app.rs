use std::sync::Arc;

use iced::{Element, Task};

use super::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage, welcome::WelcomePage},
};
use crate::{catalog::Catalog, config::AppConfig};

pub struct SlaySafeApp {
    state: AppState,
    screen: ScreenData,
}

impl SlaySafeApp {
    pub fn new(config: AppConfig, catalog: Arc<Catalog>) -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::new(config, catalog),
                screen: ScreenData::Welcome(WelcomePage),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        "SlaySafe - Your Safety Companion".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(|msg| match msg {
                ScreenMessage::ScreenMessage(msg) => msg,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view(&self.state).map(|msg| match msg {
            ScreenMessage::ScreenMessage(msg) => msg,
            ScreenMessage::ParentMessage(never) => match never {},
        })
    }
}

/// Open the desktop window on the welcome screen and block until it closes.
pub fn run(config: AppConfig, catalog: Catalog) -> anyhow::Result<()> {
    let catalog = Arc::new(catalog);
    iced::application(
        move || SlaySafeApp::new(config.clone(), catalog.clone()),
        SlaySafeApp::update,
        SlaySafeApp::view,
    )
    .title(SlaySafeApp::title)
    .run()
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))
}
