/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the store client and the UI layer. Field names are camelCase
/// on the wire (`uploadDate`), matching the store's JSON format.

use serde::{Deserialize, Serialize};

/// A stored image's metadata and reference URL
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    /// Unique store-assigned ID
    pub id: i64,
    /// Display name (usually the original filename)
    pub name: String,
    /// Remote URL or embedded data URL
    pub url: String,
    /// ISO-8601 timestamp assigned at upload time
    pub upload_date: String,
}

/// A locally selected image awaiting creation in the store
///
/// Ephemeral: exists only between file selection and a successful
/// create. The store assigns the ID, so there is none here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadCandidate {
    /// Display name taken from the selected file
    pub name: String,
    /// `data:<mime>;base64,<payload>` encoding of the file's bytes
    pub url: String,
    /// ISO-8601 timestamp assigned when the file was converted
    pub upload_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_format_is_camel_case() {
        let json = r#"{"id":2,"name":"Dog.png","url":"data:image/png;base64,AA==","uploadDate":"2026-08-29T10:00:00.000Z"}"#;
        let record: ImageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 2);
        assert_eq!(record.name, "Dog.png");
        assert_eq!(record.upload_date, "2026-08-29T10:00:00.000Z");

        let back = serde_json::to_string(&record).unwrap();
        assert!(back.contains("\"uploadDate\""));
        assert!(!back.contains("upload_date"));
    }

    #[test]
    fn test_candidate_has_no_id_on_the_wire() {
        let candidate = UploadCandidate {
            name: "cat.png".to_string(),
            url: "data:image/png;base64,AA==".to_string(),
            upload_date: "2026-08-29T10:00:00.000Z".to_string(),
        };
        let json = serde_json::to_string(&candidate).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"uploadDate\""));
    }
}
