mod map;

use iced::{
    Color, Element, Length, Theme, border,
    alignment::Vertical,
    widget::{Column, Row, button, column, container, container::Style, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    models::{EmergencyResource, SafetyTip},
    presenter::{DetailOverlay, StatusNotice, TabButton, VenueSummary},
    view_state::Tab,
};

pub use map::map_panel;

pub const PINK: Color = Color::from_rgb8(0xff, 0x69, 0xb4);
pub const DEEP_PINK: Color = Color::from_rgb8(0xff, 0x14, 0x93);
pub const BLUSH: Color = Color::from_rgb8(0xff, 0xd1, 0xdc);
pub const GREY: Color = Color::from_rgb8(0x66, 0x66, 0x66);

fn card_style(theme: &Theme) -> Style {
    bordered_box(theme)
        .border(border::rounded(15.0).color(PINK).width(1.0))
        .background(Color::WHITE)
}

fn banner_style(color: Color) -> impl Fn(&Theme) -> Style {
    move |_theme: &Theme| Style::default().background(color)
}

pub fn header<'a, Message: 'a>(title: &'a str) -> Element<'a, Message> {
    container(text(title).size(24).color(Color::WHITE))
        .padding(20)
        .center_x(Length::Fill)
        .style(banner_style(PINK))
        .into()
}

pub fn tab_bar<'a, Message: Clone + 'a>(
    tabs: Vec<TabButton>,
    on_select: impl Fn(Tab) -> Message,
) -> Element<'a, Message> {
    let buttons = tabs.into_iter().map(|tab| -> Element<'a, Message> {
        let pressed = button(container(text(tab.label)).center_x(Length::Fill))
            .width(Length::Fill)
            .on_press(on_select(tab.tab));
        if tab.active {
            pressed.style(button::primary).into()
        } else {
            pressed.style(button::secondary).into()
        }
    });
    container(Row::with_children(buttons).spacing(10))
        .padding(10)
        .style(banner_style(BLUSH))
        .into()
}

pub fn notice<'a, Message: 'a>(status: StatusNotice) -> Element<'a, Message> {
    let message = match status {
        StatusNotice::Locating => "Finding your location...".to_string(),
        StatusNotice::LocationUnavailable { message, .. } => {
            format!("{}. Showing the default map area.", message)
        }
    };
    container(text(message).color(DEEP_PINK))
        .padding(8)
        .width(Length::Fill)
        .into()
}

pub fn venue_card<'a, Message: Clone + 'a>(
    venue: VenueSummary,
    on_press: Message,
) -> Element<'a, Message> {
    let features: Row<'a, Message> = Row::with_children(
        venue
            .features
            .into_iter()
            .map(|feature| -> Element<'a, Message> {
                container(text(format!("💗 {}", feature)).size(12).color(DEEP_PINK))
                    .padding(5)
                    .style(banner_style(BLUSH))
                    .into()
            }),
    )
    .spacing(4);

    let content = column![
        row![
            text(venue.name).size(18).color(DEEP_PINK).width(Length::Fill),
            container(text(format!("Safety: {}/5 ✨", venue.safety_rating)).color(Color::WHITE))
                .padding(8)
                .style(banner_style(PINK)),
        ]
        .align_y(Vertical::Center),
        text(venue.category).color(GREY),
        text(venue.address).color(GREY),
        features,
    ]
    .spacing(5);

    button(container(content).padding(15).width(Length::Fill).style(card_style))
        .padding(0)
        .style(button::text)
        .on_press(on_press)
        .into()
}

pub fn section_title<'a, Message: 'a>(title: &'a str) -> Element<'a, Message> {
    container(text(title).size(20).color(DEEP_PINK))
        .center_x(Length::Fill)
        .into()
}

pub fn tip_card<'a, Message: 'a>(tip: SafetyTip) -> Element<'a, Message> {
    container(
        column![
            container(text(tip.icon).size(30)).center_x(Length::Fill),
            text(tip.title).size(16).color(DEEP_PINK),
            text(tip.description).color(GREY),
        ]
        .spacing(5),
    )
    .padding(15)
    .width(Length::Fill)
    .style(card_style)
    .into()
}

pub fn resource_card<'a, Message: 'a>(resource: EmergencyResource) -> Element<'a, Message> {
    container(
        column![
            text(resource.name).size(16).color(DEEP_PINK),
            text(resource.number).size(18).color(PINK),
            text(resource.available).color(GREY),
        ]
        .spacing(5)
        .align_x(iced::Alignment::Center),
    )
    .padding(15)
    .center_x(Length::Fill)
    .style(card_style)
    .into()
}

/// Bottom sheet listing the reviews of the selected venue.
pub fn detail_sheet<'a, Message: Clone + 'a>(
    overlay: DetailOverlay,
    on_close: Message,
) -> Element<'a, Message> {
    let reviews: Column<'a, Message> = Column::with_children(
        overlay
            .reviews
            .into_iter()
            .map(|review| -> Element<'a, Message> {
                container(
                    column![
                        text(review.text),
                        text(format!("Rating: {}/5 ⭐", review.rating)).color(PINK),
                    ]
                    .spacing(5),
                )
                .padding(10)
                .width(Length::Fill)
                .style(banner_style(Color::from_rgb8(0xff, 0xf5, 0xf7)))
                .into()
            }),
    )
    .spacing(10);

    let sheet = container(
        column![
            text(overlay.name).size(20).color(DEEP_PINK),
            text("Reviews:").size(16).color(PINK),
            reviews,
            button(container(text("Close").color(Color::WHITE)).center_x(Length::Fill))
                .width(Length::Fill)
                .padding(15)
                .style(button::primary)
                .on_press(on_close),
        ]
        .spacing(10),
    )
    .padding(20)
    .width(Length::Fill)
    .style(card_style);

    container(sheet)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .into()
}
