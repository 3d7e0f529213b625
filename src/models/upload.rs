use serde::{Deserialize, Serialize};

/// What the backend reports after processing one uploaded spreadsheet.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UploadResponse {
    pub success: bool,
    pub user_sheet_id: String,
    pub files_uploaded: u32,
    pub total_size: u64,
    pub label_count: u32,
    pub sheet_count: u32,
    pub message: String,
}
