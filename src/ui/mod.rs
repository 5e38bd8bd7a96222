/// Presentational views
///
/// Every view here is a pure function from state to widgets; children
/// never mutate anything, they only emit `Message` intents upward:
/// - grid.rs: the paginated thumbnail grid and its page controls
/// - search.rs: the search bar
/// - upload_dialog.rs: the upload modal
/// - modal.rs: the overlay helper plus the delete and rename dialogs

pub mod grid;
pub mod modal;
pub mod search;
pub mod upload_dialog;
