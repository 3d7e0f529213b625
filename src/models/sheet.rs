use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One generated label-sheet archive, as the backend reports it. The client
/// never fabricates these; the list is whatever the last fetch returned.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct GeneratedSheet {
    pub id: String,
    pub original_filename: String,
    pub label_count: u32,
    pub sheet_count: u32,
    pub total_size_bytes: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SheetListResponse {
    pub sheets: Vec<GeneratedSheet>,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    #[default]
    Idle,
    Downloading,
    /// Sticky until the next page load; a finished download stays marked.
    Downloaded,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeleteStatus {
    #[default]
    Idle,
    Deleting,
}

/// Per-sheet button state, persisted to localStorage between visits.
/// Field names stay camelCase so existing stored entries keep parsing.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SheetUiState {
    #[serde(default)]
    pub download_status: DownloadStatus,
    #[serde(default)]
    pub delete_status: DeleteStatus,
}

impl SheetUiState {
    /// A row must not start a download while its delete is in flight,
    /// or while another download already runs.
    pub fn download_disabled(&self) -> bool {
        self.download_status == DownloadStatus::Downloading
            || self.delete_status == DeleteStatus::Deleting
    }

    /// Mirror guard for the delete button.
    pub fn delete_disabled(&self) -> bool {
        self.delete_status == DeleteStatus::Deleting
            || self.download_status == DownloadStatus::Downloading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_sheet_list() {
        let body = r#"{
            "sheets": [{
                "id": "0b6e3f6a-9a6e-4a53-8f6e-2f6f1d2c9a10",
                "original_filename": "labels.csv",
                "label_count": 117,
                "sheet_count": 6,
                "total_size_bytes": 482133,
                "created_at": "2025-07-02T17:48:13.123456+00:00"
            }]
        }"#;

        let parsed: SheetListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.sheets.len(), 1);
        let sheet = &parsed.sheets[0];
        assert_eq!(sheet.original_filename, "labels.csv");
        assert_eq!(sheet.label_count, 117);
        assert_eq!(sheet.created_at.timezone(), Utc);
    }

    #[test]
    fn ui_state_round_trips_the_legacy_wire_format() {
        // Entries written by earlier releases must keep loading as-is.
        let stored = r#"{"downloadStatus":"downloaded","deleteStatus":"idle"}"#;
        let state: SheetUiState = serde_json::from_str(stored).unwrap();
        assert_eq!(state.download_status, DownloadStatus::Downloaded);
        assert_eq!(state.delete_status, DeleteStatus::Idle);
        assert_eq!(serde_json::to_string(&state).unwrap(), stored);
    }

    #[test]
    fn missing_fields_default_to_idle() {
        let state: SheetUiState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.download_status, DownloadStatus::Idle);
        assert_eq!(state.delete_status, DeleteStatus::Idle);
    }

    #[test]
    fn opposing_action_is_blocked_while_one_runs() {
        let downloading = SheetUiState {
            download_status: DownloadStatus::Downloading,
            delete_status: DeleteStatus::Idle,
        };
        assert!(downloading.download_disabled());
        assert!(downloading.delete_disabled());

        let deleting = SheetUiState {
            download_status: DownloadStatus::Idle,
            delete_status: DeleteStatus::Deleting,
        };
        assert!(deleting.download_disabled());
        assert!(deleting.delete_disabled());

        let downloaded = SheetUiState {
            download_status: DownloadStatus::Downloaded,
            delete_status: DeleteStatus::Idle,
        };
        assert!(!downloaded.download_disabled());
        assert!(!downloaded.delete_disabled());
    }
}
