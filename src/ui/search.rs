use iced::widget::text_input;
use iced::{Element, Length};

use crate::Message;

/// Search bar: filters on every keystroke, no debounce, no re-fetch
pub fn view(term: &str) -> Element<'_, Message> {
    text_input("Search images by name", term)
        .on_input(Message::SearchChanged)
        .padding(10)
        .width(Length::Fixed(420.0))
        .into()
}
