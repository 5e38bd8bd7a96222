use std::collections::HashMap;

use iced::widget::image::Handle;
use iced::widget::{button, column, container, horizontal_space, row, scrollable, text};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;

// Declare the application modules
mod state;
mod store;
mod ui;
mod upload;

use state::collection::CollectionState;
use state::data::{ImageRecord, UploadCandidate};
use store::ImageStore;
use upload::{convert, SelectedImage, UploadState};

/// State of the rename dialog while it is open
#[derive(Debug)]
struct RenameDialog {
    /// The record being renamed
    record: ImageRecord,
    /// Current value of the editable name field
    input: String,
    /// A patch request is in flight
    busy: bool,
    /// Last failure, shown inside the dialog
    error: Option<String>,
}

/// Main application state
struct Gallery {
    /// Handle to the external image store
    store: ImageStore,
    /// The reload-driven mirror of the store's record list
    collection: CollectionState,
    /// A reload is in flight
    loading: bool,
    /// Upload dialog state machine
    upload: UploadState,
    /// Pending-delete marker; holds at most one candidate record
    pending_delete: Option<ImageRecord>,
    /// The confirmed delete request is in flight
    delete_busy: bool,
    /// Rename dialog, when open
    rename: Option<RenameDialog>,
    /// Decoded thumbnails by record id
    thumbnails: HashMap<i64, Handle>,
    /// Status message to display to the user
    status: String,
    /// Dismissible error banner
    error: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Reload settled with the full record set or an error
    Loaded(Result<Vec<ImageRecord>, String>),
    /// A record's thumbnail finished decoding or fetching
    ThumbnailLoaded(i64, Result<Handle, String>),
    /// Search input changed
    SearchChanged(String),
    PrevPage,
    NextPage,
    /// User opened the upload dialog
    OpenUpload,
    CloseUpload,
    /// User clicked "Add Images" in the upload dialog
    PickFiles,
    /// File-to-data-URL conversion settled for a picked batch
    FilesConverted(Result<Vec<SelectedImage>, String>),
    /// Remove one file from the selection before submitting
    RemoveSelected(usize),
    SubmitUpload,
    /// The create batch settled with the number of uploaded images
    UploadFinished(Result<usize, String>),
    /// User asked to delete a record; confirmation comes next
    DeleteRequested(ImageRecord),
    DeleteCancelled,
    DeleteConfirmed,
    DeleteFinished(Result<(), String>),
    /// User asked to rename a record; the dialog collects the new name
    RenameRequested(ImageRecord),
    RenameInput(String),
    RenameCancelled,
    RenameSubmitted,
    RenameFinished(Result<(), String>),
    DismissError,
}

impl Gallery {
    /// Create a new instance of the application and start the first load
    fn new() -> (Self, Task<Message>) {
        let mut gallery = Gallery {
            store: ImageStore::new(),
            collection: CollectionState::new(),
            loading: false,
            upload: UploadState::default(),
            pending_delete: None,
            delete_busy: false,
            rename: None,
            thumbnails: HashMap::new(),
            status: String::from("Loading images..."),
            error: None,
        };
        let load = gallery.reload();
        (gallery, load)
    }

    /// Fetch the full record set from the store
    ///
    /// Every mutation goes through here afterwards; there is no
    /// incremental patching.
    fn reload(&mut self) -> Task<Message> {
        self.loading = true;
        let store = self.store.clone();
        Task::perform(
            async move { store.get_all_images().await.map_err(|e| e.to_string()) },
            Message::Loaded,
        )
    }

    /// Queue thumbnail work for records we have no handle for yet
    ///
    /// Data URLs decode locally; remote URLs are fetched through the
    /// store client. Handles of deleted records are dropped.
    fn refresh_thumbnails(&mut self) -> Task<Message> {
        let ids: Vec<i64> = self.collection.items().iter().map(|r| r.id).collect();
        self.thumbnails.retain(|id, _| ids.contains(id));

        let mut tasks = Vec::new();
        for record in self.collection.items() {
            if self.thumbnails.contains_key(&record.id) {
                continue;
            }
            if let Some(bytes) = convert::decode_data_url(&record.url) {
                self.thumbnails.insert(record.id, Handle::from_bytes(bytes));
            } else {
                let store = self.store.clone();
                let url = record.url.clone();
                let id = record.id;
                tasks.push(Task::perform(
                    async move {
                        store
                            .fetch_image_bytes(&url)
                            .await
                            .map(Handle::from_bytes)
                            .map_err(|e| e.to_string())
                    },
                    move |result| Message::ThumbnailLoaded(id, result),
                ));
            }
        }
        Task::batch(tasks)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(Ok(records)) => {
                self.loading = false;
                self.error = None;
                self.status = format!("Ready. {} images in gallery.", records.len());
                self.collection.replace_items(records);
                self.refresh_thumbnails()
            }
            Message::Loaded(Err(error)) => {
                // Previous items are kept; only the banner changes
                self.loading = false;
                eprintln!("⚠️  Failed to load images: {}", error);
                self.error = Some(format!("Failed to load images: {}", error));
                self.status = String::from("Showing previously loaded images.");
                Task::none()
            }
            Message::ThumbnailLoaded(id, Ok(handle)) => {
                self.thumbnails.insert(id, handle);
                Task::none()
            }
            Message::ThumbnailLoaded(id, Err(error)) => {
                eprintln!("⚠️  Thumbnail for image {} failed: {}", id, error);
                Task::none()
            }
            Message::SearchChanged(term) => {
                self.collection.set_search_term(term);
                Task::none()
            }
            Message::PrevPage => {
                self.collection.prev_page();
                Task::none()
            }
            Message::NextPage => {
                self.collection.next_page();
                Task::none()
            }
            Message::OpenUpload => {
                self.upload.open();
                Task::none()
            }
            Message::CloseUpload => {
                if !self.upload.is_uploading() {
                    self.upload.close();
                }
                Task::none()
            }
            Message::PickFiles => {
                // Native picker, synchronous like the rest of the event loop
                let files = FileDialog::new()
                    .set_title("Select Images")
                    .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp"])
                    .pick_files();

                if let Some(paths) = files {
                    return Task::perform(
                        async move {
                            convert::read_candidates(paths)
                                .await
                                .map_err(|e| e.to_string())
                        },
                        Message::FilesConverted,
                    );
                }
                Task::none()
            }
            Message::FilesConverted(Ok(files)) => {
                self.upload.add_files(files);
                Task::none()
            }
            Message::FilesConverted(Err(error)) => {
                self.upload.set_error(error);
                Task::none()
            }
            Message::RemoveSelected(index) => {
                self.upload.remove_file(index);
                Task::none()
            }
            Message::SubmitUpload => {
                if let Some(candidates) = self.upload.begin_upload() {
                    self.status = format!("Uploading {} images...", candidates.len());
                    let store = self.store.clone();
                    return Task::perform(
                        upload_batch(store, candidates),
                        Message::UploadFinished,
                    );
                }
                Task::none()
            }
            Message::UploadFinished(Ok(count)) => {
                self.upload.finish_success();
                self.status = format!("✅ Uploaded {} images successfully.", count);
                println!("📤 Uploaded {} images", count);
                self.reload()
            }
            Message::UploadFinished(Err(error)) => {
                // Selection stays so the user can retry
                eprintln!("⚠️  Upload failed: {}", error);
                self.upload.finish_failure(format!("Upload failed: {}", error));
                self.status = String::from("Upload failed.");
                Task::none()
            }
            Message::DeleteRequested(record) => {
                if !self.delete_busy {
                    self.pending_delete = Some(record);
                }
                Task::none()
            }
            Message::DeleteCancelled => {
                if !self.delete_busy {
                    self.pending_delete = None;
                }
                Task::none()
            }
            Message::DeleteConfirmed => {
                if let Some(record) = &self.pending_delete {
                    if !self.delete_busy {
                        self.delete_busy = true;
                        let store = self.store.clone();
                        let id = record.id;
                        return Task::perform(
                            async move { store.delete_image(id).await.map_err(|e| e.to_string()) },
                            Message::DeleteFinished,
                        );
                    }
                }
                Task::none()
            }
            Message::DeleteFinished(result) => {
                // The marker is cleared on both outcomes
                self.delete_busy = false;
                self.pending_delete = None;
                match result {
                    Ok(()) => {
                        self.status = String::from("✅ Image deleted successfully.");
                        self.reload()
                    }
                    Err(error) => {
                        eprintln!("⚠️  Delete failed: {}", error);
                        self.error = Some(format!("Failed to delete image: {}", error));
                        Task::none()
                    }
                }
            }
            Message::RenameRequested(record) => {
                self.rename = Some(RenameDialog {
                    input: record.name.clone(),
                    record,
                    busy: false,
                    error: None,
                });
                Task::none()
            }
            Message::RenameInput(value) => {
                if let Some(dialog) = &mut self.rename {
                    if !dialog.busy {
                        dialog.input = value;
                    }
                }
                Task::none()
            }
            Message::RenameCancelled => {
                if self.rename.as_ref().is_some_and(|d| !d.busy) {
                    self.rename = None;
                }
                Task::none()
            }
            Message::RenameSubmitted => {
                if let Some(dialog) = &mut self.rename {
                    let new_name = dialog.input.trim().to_string();
                    if !dialog.busy && !new_name.is_empty() {
                        dialog.busy = true;
                        let store = self.store.clone();
                        let id = dialog.record.id;
                        return Task::perform(
                            async move {
                                store
                                    .rename_image(id, &new_name)
                                    .await
                                    .map(|_| ())
                                    .map_err(|e| e.to_string())
                            },
                            Message::RenameFinished,
                        );
                    }
                }
                Task::none()
            }
            Message::RenameFinished(Ok(())) => {
                self.rename = None;
                self.status = String::from("✅ Image renamed successfully.");
                self.reload()
            }
            Message::RenameFinished(Err(error)) => {
                eprintln!("⚠️  Rename failed: {}", error);
                if let Some(dialog) = &mut self.rename {
                    dialog.busy = false;
                    dialog.error = Some(format!("Failed to rename image: {}", error));
                }
                Task::none()
            }
            Message::DismissError => {
                self.error = None;
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = row![
            ui::search::view(self.collection.search_term()),
            horizontal_space(),
            button(text("Upload Image").size(14)).on_press(Message::OpenUpload),
        ]
        .spacing(20)
        .align_y(Alignment::Center);

        let mut content = column![header].spacing(20);

        if let Some(error) = &self.error {
            content = content.push(
                container(
                    row![
                        text(error).size(13).style(text::danger),
                        horizontal_space(),
                        button(text("Dismiss").size(12))
                            .style(button::secondary)
                            .on_press(Message::DismissError),
                    ]
                    .align_y(Alignment::Center),
                )
                .padding(10)
                .width(Length::Fill)
                .style(container::bordered_box),
            );
        }

        let filtered_count = self.collection.filtered().len();
        if self.loading && self.collection.items().is_empty() {
            content = content.push(text("Loading images...").size(16));
        } else if filtered_count == 0 {
            content = content.push(
                column![
                    text("No images found").size(20),
                    text("You haven't uploaded any images yet. Click below to get started.")
                        .size(14)
                        .style(text::secondary),
                    button(text("Upload Image").size(14)).on_press(Message::OpenUpload),
                ]
                .spacing(12)
                .align_x(Alignment::Center)
                .width(Length::Fill),
            );
        } else {
            let page = self.collection.visible_page();
            content = content.push(
                scrollable(ui::grid::view(&page, &self.thumbnails)).height(Length::Fill),
            );
            if self.collection.page_count() > 1 {
                content = content.push(ui::grid::pagination(
                    self.collection.current_page(),
                    self.collection.page_count(),
                ));
            }
        }

        content = content.push(text(&self.status).size(12).style(text::secondary));

        let base: Element<Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(30)
            .into();

        // At most one modal is reachable at a time
        if self.upload.is_open() {
            ui::modal::overlay(
                base,
                ui::upload_dialog::view(&self.upload),
                Message::CloseUpload,
            )
        } else if let Some(record) = &self.pending_delete {
            ui::modal::overlay(
                base,
                ui::modal::confirm_delete(record, self.delete_busy),
                Message::DeleteCancelled,
            )
        } else if let Some(dialog) = &self.rename {
            ui::modal::overlay(
                base,
                ui::modal::rename_dialog(
                    &dialog.record.name,
                    &dialog.input,
                    dialog.busy,
                    dialog.error.as_deref(),
                ),
                Message::RenameCancelled,
            )
        } else {
            base
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    iced::application("Image Gallery", Gallery::update, Gallery::view)
        .theme(Gallery::theme)
        .window_size(iced::Size::new(1280.0, 860.0))
        .centered()
        .run_with(Gallery::new)
}

/// Submit one create per candidate, sequentially in selection order
///
/// The first failure aborts the batch; the caller keeps the selection
/// so the user can retry. Exactly one reload follows a successful batch.
async fn upload_batch(
    store: ImageStore,
    candidates: Vec<UploadCandidate>,
) -> Result<usize, String> {
    let total = candidates.len();
    for candidate in &candidates {
        store
            .create_image(candidate)
            .await
            .map_err(|e| format!("{}: {}", candidate.name, e))?;
    }
    Ok(total)
}
