/// The paginated thumbnail grid
///
/// Renders the current page of the filtered view as fixed-size cards
/// in a wrapping layout. Cards show the thumbnail, name, upload date,
/// and the Rename/Delete actions.

use std::collections::HashMap;

use chrono::DateTime;
use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::state::data::ImageRecord;
use crate::Message;

const CARD_WIDTH: f32 = 280.0;
const CARD_IMAGE_HEIGHT: f32 = 180.0;

/// Render an ISO-8601 timestamp as e.g. "August 29, 2026, 1:05 PM"
pub fn format_date(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(date) => date.format("%B %-d, %Y, %-I:%M %p").to_string(),
        Err(_) => "Invalid date".to_string(),
    }
}

/// Build the grid for one page of records
pub fn view<'a>(
    records: &[&'a ImageRecord],
    thumbnails: &HashMap<i64, Handle>,
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = records
        .iter()
        .map(|record| card(record, thumbnails.get(&record.id)))
        .collect();

    Wrap::with_elements(cards)
        .spacing(20.0)
        .line_spacing(20.0)
        .into()
}

fn card<'a>(record: &'a ImageRecord, thumbnail: Option<&Handle>) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(CARD_WIDTH))
            .height(Length::Fixed(CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text("Loading...").size(13))
            .width(Length::Fixed(CARD_WIDTH))
            .height(Length::Fixed(CARD_IMAGE_HEIGHT))
            .center_x(Length::Fixed(CARD_WIDTH))
            .center_y(Length::Fixed(CARD_IMAGE_HEIGHT))
            .style(container::bordered_box)
            .into(),
    };

    let details = column![
        text(&record.name).size(14),
        text(format_date(&record.upload_date))
            .size(12)
            .style(text::secondary),
    ]
    .spacing(2);

    let actions = row![
        button(text("Rename").size(12))
            .style(button::secondary)
            .padding([4.0, 8.0])
            .on_press(Message::RenameRequested(record.clone())),
        button(text("Delete").size(12))
            .style(button::danger)
            .padding([4.0, 8.0])
            .on_press(Message::DeleteRequested(record.clone())),
    ]
    .spacing(8);

    column![
        preview,
        row![details, actions]
            .width(Length::Fixed(CARD_WIDTH))
            .spacing(10)
            .align_y(Alignment::Start),
    ]
    .spacing(8)
    .into()
}

/// "Page x of y" with Previous/Next, clamped at both ends
pub fn pagination(current: usize, count: usize) -> Element<'static, Message> {
    row![
        button(text("Previous").size(13))
            .style(button::secondary)
            .on_press_maybe((current > 1).then_some(Message::PrevPage)),
        text(format!("Page {} of {}", current, count)).size(13),
        button(text("Next").size(13))
            .style(button::secondary)
            .on_press_maybe((current < count).then_some(Message::NextPage)),
    ]
    .spacing(15)
    .align_y(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date("2026-08-29T13:05:00.000Z"),
            "August 29, 2026, 1:05 PM"
        );
        assert_eq!(
            format_date("2026-01-02T00:30:00.000Z"),
            "January 2, 2026, 12:30 AM"
        );
    }

    #[test]
    fn test_format_date_rejects_garbage() {
        assert_eq!(format_date("not-a-date"), "Invalid date");
        assert_eq!(format_date(""), "Invalid date");
    }
}
