/// The upload modal
///
/// Shows the current selection as preview cards, lets the user add
/// or remove files, and submits the batch. Everything is locked
/// while the creates are in flight.

use iced::widget::{button, column, container, horizontal_space, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::upload::{SelectedImage, UploadState};
use crate::Message;

const PREVIEW_WIDTH: f32 = 120.0;
const PREVIEW_HEIGHT: f32 = 80.0;

pub fn view(upload: &UploadState) -> Element<'_, Message> {
    let busy = upload.is_uploading();
    let files = upload.files();

    let mut content = column![
        text("Upload Images").size(18),
        text("Select one or multiple images to upload:").size(14),
        button(text("Add Images").size(13))
            .style(button::secondary)
            .on_press_maybe((!busy).then_some(Message::PickFiles)),
    ]
    .spacing(14);

    if !files.is_empty() {
        let previews: Vec<Element<'_, Message>> = files
            .iter()
            .enumerate()
            .map(|(index, file)| preview_card(index, file, busy))
            .collect();
        content = content.push(Wrap::with_elements(previews).spacing(10.0).line_spacing(10.0));
    }

    if let Some(error) = upload.error() {
        content = content.push(text(error).size(12).style(text::danger));
    }

    let upload_label = if busy { "Uploading..." } else { "Upload" };
    let can_submit = !busy && !files.is_empty();
    content = content.push(
        row![
            horizontal_space(),
            button(text("Cancel").size(13))
                .style(button::secondary)
                .on_press_maybe((!busy).then_some(Message::CloseUpload)),
            button(text(upload_label).size(13))
                .on_press_maybe(can_submit.then_some(Message::SubmitUpload)),
        ]
        .spacing(10),
    );

    container(content)
        .width(Length::Fixed(600.0))
        .padding(24)
        .style(container::rounded_box)
        .into()
}

fn preview_card(index: usize, file: &SelectedImage, busy: bool) -> Element<'_, Message> {
    column![
        image(file.preview.clone())
            .width(Length::Fixed(PREVIEW_WIDTH))
            .height(Length::Fixed(PREVIEW_HEIGHT))
            .content_fit(ContentFit::Cover),
        row![
            text(&file.candidate.name).size(11).width(Length::Fixed(PREVIEW_WIDTH - 30.0)),
            button(text("x").size(11))
                .style(button::text)
                .on_press_maybe((!busy).then_some(Message::RemoveSelected(index))),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(4)
    .into()
}
