use std::sync::Arc;

use iced::{
    Element, Length, Task,
    widget::{Column, column, container, scrollable, stack},
};
use tracing::warn;

use crate::{
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{
            detail_sheet, header, map_panel, notice, resource_card, section_title, tab_bar,
            tip_card, venue_card,
        },
    },
    location::{LocationGate, Resolution},
    presenter::{self, TabContent},
    view_state::{Tab, ViewState},
};

/// Tabbed browsing screen. Owns the location gate, so leaving the screen
/// cancels a lookup that is still running.
#[derive(Debug)]
pub struct HomePage {
    view: ViewState,
    gate: LocationGate,
}

#[derive(Debug, Clone)]
pub enum HomeMessage {
    SelectTab(Tab),
    SelectVenue(String),
    CloseDetails,
    LocationResolved(Resolution),
}

impl HomePage {
    /// Build the screen and the task that resolves its location gate.
    pub fn new(state: &AppState) -> (Self, Task<ScreenMessage<Self>>) {
        let mut gate = LocationGate::new();
        let provider = Arc::new(state.config.location.provider.build());
        let task = match gate.start(provider, state.config.location.timeout()) {
            Some(request) => Task::perform(request.run(), |resolution| {
                ScreenMessage::ScreenMessage(HomeMessage::LocationResolved(resolution))
            }),
            None => Task::none(),
        };
        (
            Self {
                view: ViewState::new(),
                gate,
            },
            task,
        )
    }
}

impl Screen for HomePage {
    type Message = HomeMessage;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let screen = presenter::present(
            &state.catalog,
            &self.view,
            self.gate.state(),
            &state.config.map,
        );

        let mut body = Column::<HomeMessage>::new()
            .push(header(screen.title))
            .push(tab_bar(screen.tabs, HomeMessage::SelectTab));
        if let Some(status) = screen.notice {
            body = body.push(notice(status));
        }

        let content: Element<'a, HomeMessage> = match screen.content {
            TabContent::Listing { map, items, .. } => column![
                map_panel(map),
                scrollable(
                    Column::<HomeMessage>::with_children(items.into_iter().map(|item| {
                        let id = item.id.clone();
                        venue_card(item, HomeMessage::SelectVenue(id))
                    }))
                    .spacing(10)
                    .padding(10)
                )
                .height(Length::Fill),
            ]
            .into(),
            TabContent::Safety { tips, resources } => scrollable(
                column![
                    section_title("💝 Safety Tips 💝"),
                    Column::<HomeMessage>::with_children(tips.into_iter().map(tip_card))
                        .spacing(10),
                    section_title("🆘 Emergency Resources 🆘"),
                    Column::<HomeMessage>::with_children(resources.into_iter().map(resource_card))
                        .spacing(10),
                ]
                .spacing(20)
                .padding(15),
            )
            .height(Length::Fill)
            .into(),
        };
        body = body.push(content);

        let page: Element<'a, HomeMessage> = match screen.overlay {
            Some(overlay) => stack![
                container(body).width(Length::Fill).height(Length::Fill),
                detail_sheet(overlay, HomeMessage::CloseDetails),
            ]
            .into(),
            None => body.into(),
        };
        page.map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            HomeMessage::SelectTab(tab) => self.view.select_tab(tab),
            HomeMessage::SelectVenue(id) => {
                if let Err(err) = self.view.select_venue(&state.catalog, &id) {
                    warn!(error = %err, "no overlay opened");
                }
            }
            HomeMessage::CloseDetails => self.view.clear_selection(),
            HomeMessage::LocationResolved(resolution) => {
                self.gate.resolve(resolution);
            }
        }
        Task::none()
    }
}
