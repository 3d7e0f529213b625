/// Backend base URL, resolved at compile time:
/// - Development: http://localhost:5000 (default)
/// - Production: set BACKEND_URL in .env (forwarded by build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// localStorage key for the per-sheet button states. Key and shape predate
/// this rewrite; existing entries must keep loading.
pub const STORAGE_KEY_SHEET_STATES: &str = "sheetStates";

/// Client-side ceiling checked before any upload request goes out. The
/// backend enforces its own limit and answers 413 past it.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// MIME types the uploader accepts: CSV, legacy Excel, OOXML Excel.
pub const ALLOWED_UPLOAD_TYPES: [&str; 3] = [
    "text/csv",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

/// How long transient banners stay up before clearing themselves.
pub const BANNER_CLEAR_MS: u32 = 5_000;
