// src/integrations/portal/client.rs
//
// HTTP implementation of the portal gateway.
//
// - Attaches the bearer token from the shared cell to authenticated calls
// - Maps non-2xx responses to structured failures (status + detail)
// - Never mutates domain state; returns records the services own

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{ApplicationDraft, ApplicationRecord};
use crate::error::{AppError, AppResult, ErrorDetail};
use crate::infrastructure::TokenCell;

use super::gateway::{PortalGateway, RegisterRequest, TokenResponse};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("LICENSEHUB_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Error body of a portal response, e.g. `{"detail": "..."}` or
/// `{"detail": [{"loc": [...], "msg": "..."}]}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<ErrorDetail>,
}

pub struct PortalClient {
    base_url: String,
    http: Client,
    token: TokenCell,
}

impl PortalClient {
    pub fn new(config: &PortalConfig, token: TokenCell) -> Self {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request without a credential (login, register).
    fn public_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(header::ACCEPT, "application/json")
    }

    /// Request carrying the bearer token when one is present. When the cell
    /// is empty the request still goes out bare and the server rejects it.
    fn authed_request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self.public_request(method, path);
        if let Some(token) = self.token.get() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        request
    }

    /// Convert a non-2xx response into a structured failure.
    async fn error_from_response(response: Response) -> AppError {
        let status = response.status();
        let detail = match response.bytes().await {
            Ok(body) => serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail),
            Err(_) => None,
        };

        if status == StatusCode::NOT_FOUND {
            return AppError::NotFound;
        }
        AppError::Api {
            status: status.as_u16(),
            detail,
        }
    }

    async fn expect_json<T>(response: Response) -> AppResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(response.json::<T>().await?)
    }

    async fn expect_no_content(response: Response) -> AppResult<()> {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }
}

/// The list endpoint degrades to empty on anything that is not a list of
/// records, so a malformed payload can never take down the dashboard.
fn parse_application_list(value: serde_json::Value) -> Vec<ApplicationRecord> {
    match value {
        serde_json::Value::Array(_) => match serde_json::from_value(value) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("unparseable application list, degrading to empty: {}", e);
                Vec::new()
            }
        },
        other => {
            log::warn!("unexpected application list payload: {}", other);
            Vec::new()
        }
    }
}

#[async_trait]
impl PortalGateway for PortalClient {
    async fn login(&self, username: &str, password: &str) -> AppResult<TokenResponse> {
        let response = self
            .public_request(Method::POST, "/api/token")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    async fn register(&self, request: &RegisterRequest) -> AppResult<()> {
        let response = self
            .public_request(Method::POST, "/api/register")
            .json(request)
            .send()
            .await?;
        Self::expect_no_content(response).await
    }

    async fn list_applications(&self) -> AppResult<Vec<ApplicationRecord>> {
        let response = self
            .authed_request(Method::GET, "/api/driver_license/my")
            .send()
            .await?;
        let value: serde_json::Value = Self::expect_json(response).await?;
        Ok(parse_application_list(value))
    }

    async fn get_application(&self, id: i64) -> AppResult<ApplicationRecord> {
        let response = self
            .authed_request(Method::GET, &format!("/api/driver_license/{}", id))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    async fn create_application(&self, draft: &ApplicationDraft) -> AppResult<ApplicationRecord> {
        let response = self
            .authed_request(Method::POST, "/api/driver_license")
            .json(draft)
            .send()
            .await?;
        Self::expect_json(response).await
    }

    async fn update_application(
        &self,
        id: i64,
        draft: &ApplicationDraft,
    ) -> AppResult<ApplicationRecord> {
        let response = self
            .authed_request(Method::PUT, &format!("/api/driver_license/{}", id))
            .json(draft)
            .send()
            .await?;
        Self::expect_json(response).await
    }

    async fn delete_application(&self, id: i64) -> AppResult<()> {
        let response = self
            .authed_request(Method::DELETE, &format!("/api/driver_license/{}", id))
            .send()
            .await?;
        Self::expect_no_content(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_strips_trailing_slash_from_base_url() {
        let config = PortalConfig {
            base_url: "http://localhost:8000/".to_string(),
            timeout: Duration::from_secs(5),
        };
        let client = PortalClient::new(&config, TokenCell::new());
        assert_eq!(client.url("/api/token"), "http://localhost:8000/api/token");
    }

    #[test]
    fn test_list_parses_well_formed_payload() {
        let payload = json!([{
            "id": 1,
            "last_name": "Silva",
            "first_name": "Ana",
            "middle_name": "Maria",
            "driver_license_number": "D1",
            "birth_date": "1990-04-12",
            "sex": "female",
            "height": 168.0,
            "unit_number": "12",
            "street_number": "100",
            "street_name": "Main St",
            "po_box": null,
            "city": "Toronto",
            "province": "ON",
            "postal_code": "M5V 2T6",
            "status": "in_progress"
        }]);

        let records = parse_application_list(payload);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, Some(1));
    }

    #[test]
    fn test_list_degrades_non_list_payload_to_empty() {
        let payload = json!({ "detail": "Internal Server Error" });
        assert!(parse_application_list(payload).is_empty());
    }

    #[test]
    fn test_list_degrades_malformed_entries_to_empty() {
        let payload = json!([{ "id": 1 }]);
        assert!(parse_application_list(payload).is_empty());
    }

    #[test]
    fn test_error_body_parses_both_detail_shapes() {
        let single: ErrorBody =
            serde_json::from_value(json!({ "detail": "Invalid token." })).unwrap();
        assert!(matches!(single.detail, Some(ErrorDetail::Message(_))));

        let list: ErrorBody = serde_json::from_value(json!({
            "detail": [{ "loc": ["body", "height"], "msg": "must be positive" }]
        }))
        .unwrap();
        assert!(matches!(list.detail, Some(ErrorDetail::Fields(_))));
    }
}
