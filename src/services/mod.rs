pub mod api_client;
pub mod upload;

pub use api_client::ApiClient;
pub use upload::upload_spreadsheet;
