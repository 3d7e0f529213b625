pub mod session_context;
pub mod use_flash;
pub mod use_navigator;
pub mod use_session;
pub mod use_sheets;
pub mod use_upload;

pub use session_context::SessionProvider;
pub use use_flash::{use_flash, FlashHandle};
pub use use_navigator::{use_navigator, Navigator, Route};
pub use use_session::{use_session, SessionHandle, SessionStatus};
pub use use_sheets::{use_sheets, UseSheetsHandle};
pub use use_upload::{use_upload, UploadPhase, UseUploadHandle};
