use crate::gui::screens::{ScreenMessage, home::HomePage, welcome::WelcomePage};

#[derive(Debug, Clone)]
pub enum Message {
    Welcome(ScreenMessage<WelcomePage>),
    Home(ScreenMessage<HomePage>),
}
