pub mod home;
pub mod welcome;

use iced::{Element, Task};
use tracing::warn;

use crate::{
    gui::{AppState, Message},
    navigation::Route,
};

#[derive(Debug)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

impl<S: Screen> Clone for ScreenMessage<S> {
    fn clone(&self) -> Self {
        match self {
            ScreenMessage::ScreenMessage(msg) => ScreenMessage::ScreenMessage(msg.clone()),
            ScreenMessage::ParentMessage(msg) => ScreenMessage::ParentMessage(msg.clone()),
        }
    }
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug)]
pub enum ScreenData {
    Welcome(welcome::WelcomePage),
    Home(home::HomePage),
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::Welcome(screen) => screen.view(state).map(Message::Welcome),
            ScreenData::Home(screen) => screen.view(state).map(Message::Home),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::Welcome(ScreenMessage::ParentMessage(parent_msg))) => match parent_msg {
                welcome::ParentMessage::StartExploring => {
                    if let Err(err) = state.navigator.navigate(Route::Home) {
                        warn!(error = %err, "ignoring start request");
                        return Task::none();
                    }
                    let (page, task) = home::HomePage::new(state);
                    // Replacing the screen drops the previous one, cancelling
                    // anything it still had in flight.
                    *x = ScreenData::Home(page);
                    task.map(Message::Home).map(ScreenMessage::ScreenMessage)
                }
            },
            (ScreenData::Welcome(page), Message::Welcome(ScreenMessage::ScreenMessage(msg))) => page
                .update(msg, state)
                .map(Message::Welcome)
                .map(ScreenMessage::ScreenMessage),
            (ScreenData::Home(page), Message::Home(ScreenMessage::ScreenMessage(msg))) => page
                .update(msg, state)
                .map(Message::Home)
                .map(ScreenMessage::ScreenMessage),
            (ScreenData::Home(_), Message::Home(ScreenMessage::ParentMessage(never))) => {
                match never {}
            }
            // Messages addressed to a screen that is no longer shown.
            _ => Task::none(),
        }
    }
}
