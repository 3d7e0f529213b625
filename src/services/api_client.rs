// ============================================================================
// API CLIENT - HTTP communication only (stateless)
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::RequestCredentials;

use crate::error::ApiError;
use crate::models::{
    AuthStatusResponse, CredentialsRequest, ErrorBody, GeneratedSheet, LoginResponse,
    SheetListResponse,
};
use crate::utils::constants::BACKEND_URL;

/// Thin client over the backend endpoints. Every request carries the session
/// cookie; auth decisions live server-side.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Is the caller's cookie still good? Callers treat any error as "no".
    pub async fn auth_status(&self) -> Result<AuthStatusResponse, ApiError> {
        let response = with_credentials(Request::get(&format!("{}/auth/status", self.base_url)))
            .send()
            .await
            .map_err(network_error)?;
        parse_json(response).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.submit_credentials("/auth/login", email, password).await
    }

    pub async fn signup(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.submit_credentials("/auth/signup", email, password).await
    }

    /// Session teardown. Callers navigate away whether or not this lands.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = with_credentials(Request::post(&format!("{}/auth/logout", self.base_url)))
            .send()
            .await
            .map_err(network_error)?;
        if response.ok() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }

    /// The authoritative sheet list. The result replaces whatever the client
    /// held; there is no merging.
    pub async fn my_sheets(&self) -> Result<Vec<GeneratedSheet>, ApiError> {
        let response = with_credentials(Request::get(&format!("{}/my-sheets", self.base_url)))
            .send()
            .await
            .map_err(network_error)?;
        let list: SheetListResponse = parse_json(response).await?;
        log::info!("📋 Fetched {} sheets", list.sheets.len());
        Ok(list.sheets)
    }

    /// Raw archive bytes for one sheet.
    pub async fn download_sheet(&self, sheet_id: &str) -> Result<Vec<u8>, ApiError> {
        let url = format!("{}/download-sheet/{}", self.base_url, sheet_id);
        let response = with_credentials(Request::get(&url))
            .send()
            .await
            .map_err(network_error)?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .binary()
            .await
            .map_err(|e| ApiError::Network(format!("Could not read archive: {}", e)))
    }

    pub async fn delete_sheet(&self, sheet_id: &str) -> Result<(), ApiError> {
        let url = format!("{}/delete-sheet/{}", self.base_url, sheet_id);
        let response = with_credentials(Request::delete(&url))
            .send()
            .await
            .map_err(network_error)?;
        if response.ok() {
            log::info!("🗑️ Deleted sheet {}", sheet_id);
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }

    async fn submit_credentials(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        let body = CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = with_credentials(Request::post(&format!("{}{}", self.base_url, path)))
            .json(&body)
            .map_err(|e| ApiError::Network(format!("Could not encode request: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;
        parse_json(response).await
    }
}

fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn parse_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Network(format!("Unreadable server response: {}", e)))
}

/// Pull the backend's `{"error": ...}` detail out of a failure response and
/// classify it by status.
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error);
    ApiError::from_status(status, detail)
}
