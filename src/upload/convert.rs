/// File-to-data-URL conversion
///
/// Selected files are read from disk, sniffed for their image format,
/// and embedded as `data:<mime>;base64,<payload>` strings. That string
/// is both the preview source and the `url` field submitted to the
/// store, which keeps the mock store self-contained (no object storage).

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose, Engine as _};
use chrono::{SecondsFormat, Utc};
use iced::widget::image::Handle;
use thiserror::Error;

use crate::state::data::UploadCandidate;

/// Errors while turning a picked file into an upload candidate
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("{path} is not a recognized image file")]
    NotAnImage { path: String },
}

/// A converted file together with its decoded preview handle
#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub candidate: UploadCandidate,
    pub preview: Handle,
}

/// Current time in the store's timestamp format
/// (RFC 3339 with millisecond precision, e.g. "2026-08-29T13:05:00.123Z")
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Encode image bytes as a data URL, sniffing the MIME type from magic bytes
pub fn to_data_url(path: &Path, bytes: &[u8]) -> Result<String, ConvertError> {
    let format = image::guess_format(bytes).map_err(|_| ConvertError::NotAnImage {
        path: path.display().to_string(),
    })?;
    let payload = general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{}", format.to_mime_type(), payload))
}

/// Decode a data URL back into raw bytes
///
/// Returns None for anything that is not a base64 data URL
/// (remote http(s) URLs are fetched instead of decoded).
pub fn decode_data_url(url: &str) -> Option<Vec<u8>> {
    let rest = url.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    if !meta.ends_with(";base64") {
        return None;
    }
    general_purpose::STANDARD.decode(payload).ok()
}

/// Convert picked files to upload candidates, in selection order
///
/// Each candidate's uploadDate is stamped when its conversion finishes,
/// not from file metadata. One unreadable or non-image file fails the
/// whole batch; the error names the file.
pub async fn read_candidates(paths: Vec<PathBuf>) -> Result<Vec<SelectedImage>, ConvertError> {
    let mut selected = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| ConvertError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let url = to_data_url(&path, &bytes)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "untitled".to_string());
        selected.push(SelectedImage {
            candidate: UploadCandidate {
                name,
                url,
                upload_date: now_iso(),
            },
            preview: Handle::from_bytes(bytes),
        });
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_data_url_carries_sniffed_mime() {
        let url = to_data_url(Path::new("cat.png"), &PNG_MAGIC).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_jpeg_magic_is_recognized() {
        let url = to_data_url(Path::new("dog.jpg"), &[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_non_image_bytes_are_rejected() {
        let err = to_data_url(Path::new("notes.txt"), b"hello world").unwrap_err();
        assert!(matches!(err, ConvertError::NotAnImage { .. }));
    }

    #[test]
    fn test_data_url_round_trips() {
        let url = to_data_url(Path::new("cat.png"), &PNG_MAGIC).unwrap();
        assert_eq!(decode_data_url(&url).unwrap(), PNG_MAGIC.to_vec());
    }

    #[test]
    fn test_remote_urls_are_not_decoded() {
        assert!(decode_data_url("https://example.com/cat.png").is_none());
        assert!(decode_data_url("data:text/plain,hello").is_none());
    }

    #[test]
    fn test_timestamp_is_rfc3339_utc_with_millis() {
        let stamp = now_iso();
        assert!(stamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
        // millisecond precision, like the store's existing records
        let fraction = stamp.split('.').nth(1).unwrap();
        assert_eq!(fraction.len(), "123Z".len());
    }
}
