// Shared helpers

pub mod constants;
pub mod download;
pub mod format;
pub mod validate;

pub use constants::*;
pub use download::save_archive;
pub use format::{download_file_name, format_file_size, format_timestamp};
pub use validate::{validate_spreadsheet, UploadRejection};
