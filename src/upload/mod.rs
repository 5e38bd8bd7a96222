/// Upload pipeline module
///
/// Local files travel through three phases before they reach the store:
///
/// ```text
/// Idle -> Selecting (files picked, previews built)
///      -> Uploading (creates in flight, dialog locked)
///      -> Idle      (success: selection cleared, dialog closes)
///      or Selecting (failure: selection retained, error shown)
/// ```
///
/// The conversion itself lives in convert.rs.

pub mod convert;

pub use convert::{ConvertError, SelectedImage};

use crate::state::data::UploadCandidate;

/// State machine for the upload dialog
#[derive(Debug, Default)]
pub enum UploadState {
    /// Dialog closed, nothing selected
    #[default]
    Idle,
    /// Dialog open; files may still be added or removed
    Selecting {
        files: Vec<SelectedImage>,
        error: Option<String>,
    },
    /// Creates in flight; the dialog is locked until the batch settles
    Uploading { files: Vec<SelectedImage> },
}

impl UploadState {
    /// Open the dialog with an empty selection
    pub fn open(&mut self) {
        if matches!(self, UploadState::Idle) {
            *self = UploadState::Selecting {
                files: Vec::new(),
                error: None,
            };
        }
    }

    /// Close the dialog and discard the selection
    pub fn close(&mut self) {
        *self = UploadState::Idle;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, UploadState::Idle)
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadState::Uploading { .. })
    }

    pub fn files(&self) -> &[SelectedImage] {
        match self {
            UploadState::Idle => &[],
            UploadState::Selecting { files, .. } | UploadState::Uploading { files } => files,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UploadState::Selecting { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Append newly converted files to the selection
    pub fn add_files(&mut self, mut new_files: Vec<SelectedImage>) {
        if let UploadState::Selecting { files, error } = self {
            files.append(&mut new_files);
            *error = None;
        }
    }

    /// Record a conversion failure without losing what is already selected
    pub fn set_error(&mut self, message: String) {
        if let UploadState::Selecting { error, .. } = self {
            *error = Some(message);
        }
    }

    /// Drop one file from the selection before submitting
    pub fn remove_file(&mut self, index: usize) {
        if let UploadState::Selecting { files, .. } = self {
            if index < files.len() {
                files.remove(index);
            }
        }
    }

    /// Lock the dialog and hand back the candidates to submit
    ///
    /// Returns None when there is nothing to upload or an upload
    /// is already in flight.
    pub fn begin_upload(&mut self) -> Option<Vec<UploadCandidate>> {
        if let UploadState::Selecting { files, .. } = self {
            if files.is_empty() {
                return None;
            }
            let files = std::mem::take(files);
            let candidates = files.iter().map(|f| f.candidate.clone()).collect();
            *self = UploadState::Uploading { files };
            return Some(candidates);
        }
        None
    }

    /// The whole batch was created: clear the selection and close
    pub fn finish_success(&mut self) {
        if matches!(self, UploadState::Uploading { .. }) {
            *self = UploadState::Idle;
        }
    }

    /// The batch failed: keep the selection so the user can retry
    pub fn finish_failure(&mut self, message: String) {
        if let UploadState::Uploading { files } = std::mem::take(self) {
            *self = UploadState::Selecting {
                files,
                error: Some(message),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image::Handle;

    fn selected(name: &str) -> SelectedImage {
        SelectedImage {
            candidate: UploadCandidate {
                name: name.to_string(),
                url: "data:image/png;base64,AA==".to_string(),
                upload_date: "2026-08-29T10:00:00.000Z".to_string(),
            },
            preview: Handle::from_bytes(vec![0u8; 4]),
        }
    }

    #[test]
    fn test_open_and_close() {
        let mut state = UploadState::default();
        assert!(!state.is_open());
        state.open();
        assert!(state.is_open());
        state.add_files(vec![selected("a.png")]);
        state.close();
        assert!(!state.is_open());
        assert!(state.files().is_empty());
    }

    #[test]
    fn test_begin_upload_requires_a_selection() {
        let mut state = UploadState::default();
        state.open();
        assert!(state.begin_upload().is_none());

        state.add_files(vec![selected("a.png"), selected("b.png")]);
        let candidates = state.begin_upload().unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "a.png");
        assert!(state.is_uploading());

        // already in flight
        assert!(state.begin_upload().is_none());
    }

    #[test]
    fn test_success_clears_selection_and_closes() {
        let mut state = UploadState::default();
        state.open();
        state.add_files(vec![selected("a.png")]);
        state.begin_upload().unwrap();
        state.finish_success();
        assert!(!state.is_open());
        assert!(state.files().is_empty());
    }

    #[test]
    fn test_failure_keeps_selection_and_shows_error() {
        let mut state = UploadState::default();
        state.open();
        state.add_files(vec![selected("a.png"), selected("b.png")]);
        state.begin_upload().unwrap();
        state.finish_failure("store unreachable".to_string());

        assert!(state.is_open());
        assert!(!state.is_uploading());
        assert_eq!(state.files().len(), 2);
        assert_eq!(state.error(), Some("store unreachable"));
    }

    #[test]
    fn test_remove_file_before_submit() {
        let mut state = UploadState::default();
        state.open();
        state.add_files(vec![selected("a.png"), selected("b.png")]);
        state.remove_file(0);
        assert_eq!(state.files().len(), 1);
        assert_eq!(state.files()[0].candidate.name, "b.png");
        // out-of-range index is a no-op
        state.remove_file(5);
        assert_eq!(state.files().len(), 1);
    }

    #[test]
    fn test_adding_files_clears_stale_error() {
        let mut state = UploadState::default();
        state.open();
        state.set_error("bad file".to_string());
        assert_eq!(state.error(), Some("bad file"));
        state.add_files(vec![selected("a.png")]);
        assert!(state.error().is_none());
    }
}
