/// Modal overlay plus the delete-confirm and rename dialogs
///
/// A modal is the base view with an opaque dimmed layer stacked on
/// top; clicking outside the dialog emits `on_blur` (update ignores
/// it while a request is in flight).

use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, stack, text,
    text_input,
};
use iced::{Color, Element, Length};

use crate::state::data::ImageRecord;
use crate::Message;

/// Stack a dialog over the base view with a dimmed backdrop
pub fn overlay<'a>(
    base: Element<'a, Message>,
    dialog: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    let backdrop = center(opaque(dialog)).style(|_theme| container::Style {
        background: Some(
            Color {
                a: 0.6,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    });

    stack![base, opaque(mouse_area(backdrop).on_press(on_blur))].into()
}

fn dialog_card<'a>(content: Element<'a, Message>, width: f32) -> Element<'a, Message> {
    container(content)
        .width(Length::Fixed(width))
        .padding(24)
        .style(container::rounded_box)
        .into()
}

/// Confirmation dialog for the pending-delete record
pub fn confirm_delete<'a>(record: &'a ImageRecord, busy: bool) -> Element<'a, Message> {
    let content = column![
        text("Delete Image").size(18),
        text(format!("Are you sure you want to delete \"{}\"?", record.name)).size(14),
        text("Warning: this action is irreversible. Deleted images cannot be recovered.")
            .size(12)
            .style(text::danger),
        row![
            horizontal_space(),
            button(text("Cancel").size(13))
                .style(button::secondary)
                .on_press_maybe((!busy).then_some(Message::DeleteCancelled)),
            button(text(if busy { "Deleting..." } else { "Delete" }).size(13))
                .style(button::danger)
                .on_press_maybe((!busy).then_some(Message::DeleteConfirmed)),
        ]
        .spacing(10),
    ]
    .spacing(14);

    dialog_card(content.into(), 420.0)
}

/// Rename dialog: collects the new name, Save submits the trimmed value
pub fn rename_dialog<'a>(
    current_name: &'a str,
    input: &'a str,
    busy: bool,
    error: Option<&'a str>,
) -> Element<'a, Message> {
    let can_save = !busy && !input.trim().is_empty();

    let mut content = column![
        text("Rename Image").size(18),
        text(format!("Enter a new name for \"{}\":", current_name)).size(14),
        text_input("New name", input)
            .on_input_maybe((!busy).then_some(Message::RenameInput))
            .on_submit(Message::RenameSubmitted)
            .padding(8),
    ]
    .spacing(14);

    if let Some(message) = error {
        content = content.push(text(message).size(12).style(text::danger));
    }

    content = content.push(
        row![
            horizontal_space(),
            button(text("Cancel").size(13))
                .style(button::secondary)
                .on_press_maybe((!busy).then_some(Message::RenameCancelled)),
            button(text(if busy { "Saving..." } else { "Save" }).size(13))
                .on_press_maybe(can_save.then_some(Message::RenameSubmitted)),
        ]
        .spacing(10),
    );

    dialog_card(content.into(), 420.0)
}
