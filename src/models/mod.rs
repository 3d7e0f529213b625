pub mod auth;
pub mod sheet;
pub mod upload;

pub use auth::{AuthStatusResponse, CredentialsRequest, ErrorBody, LoginResponse};
pub use sheet::{DeleteStatus, DownloadStatus, GeneratedSheet, SheetListResponse, SheetUiState};
pub use upload::UploadResponse;
