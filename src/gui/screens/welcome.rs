use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, text},
};

use crate::{
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{DEEP_PINK, GREY},
    },
    presenter::present_welcome,
};

#[derive(Debug, Clone)]
pub struct WelcomePage;

#[derive(Debug, Clone)]
pub enum ParentMessage {
    StartExploring,
}

impl Screen for WelcomePage {
    type Message = Infallible;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let welcome = present_welcome();
        let content = column![
            column![
                text(welcome.app_name).size(48).color(DEEP_PINK),
                text(welcome.tagline).size(24).color(GREY),
                text(welcome.description).size(18).color(GREY),
            ]
            .spacing(16)
            .align_x(Center),
            button(text(welcome.start_label).size(20))
                .padding([16, 32])
                .on_press(ScreenMessage::ParentMessage(ParentMessage::StartExploring)),
        ]
        .spacing(40)
        .padding(20)
        .align_x(Center);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
