//! REST client shared by every back-office service.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;

use crate::session::Session;

/// Errors returned by the back-office API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP transport or decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request body could not be encoded.
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    /// The session is missing, expired or revoked.
    #[error("not signed in or session expired")]
    Unauthorized,

    /// The requested resource does not exist.
    #[error("not found")]
    NotFound,

    /// Any other non-2xx response.
    #[error("request failed with status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,

        /// Message reported by the backend, or the raw body
        message: String,
    },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Map a failed response onto an [`ApiError`].
#[must_use]
pub fn error_for_status(status: StatusCode, body: &str) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        _ => {
            let message = serde_json::from_str::<ErrorBody>(body)
                .map(|body| body.message)
                .unwrap_or_else(|_| body.trim().to_string());

            ApiError::Status {
                status: status.as_u16(),
                message,
            }
        }
    }
}

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// Create a client for `base_url` (without trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Create a client for `base_url` over a preconfigured HTTP client.
    #[must_use]
    pub fn with_http(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Absolute URL for an API path starting with `/`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Start a request, authenticated with `session` when given.
    #[must_use]
    pub fn request(&self, method: Method, path: &str, session: Option<&Session>) -> RequestBuilder {
        let request = self.http.request(method, self.url(path));

        match session {
            Some(session) => request.bearer_auth(session.access_token().expose()),
            None => request,
        }
    }

    /// Send a request and decode its JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status or an
    /// undecodable body.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = checked(request.send().await?).await?;

        Ok(response.json().await?)
    }

    /// Send a request whose response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    pub async fn send_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        checked(request.send().await?).await?;

        Ok(())
    }
}

async fn checked(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    Err(error_for_status(status, &text))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::session;

    use super::*;

    #[test]
    fn unauthorized_and_not_found_have_dedicated_errors() {
        assert!(matches!(
            error_for_status(StatusCode::UNAUTHORIZED, ""),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            error_for_status(StatusCode::NOT_FOUND, "{\"message\":\"gone\"}"),
            ApiError::NotFound
        ));
    }

    #[test]
    fn status_error_prefers_backend_message() {
        let error = error_for_status(
            StatusCode::CONFLICT,
            "{\"message\":\"Promotion code already exists\"}",
        );

        assert!(matches!(
            error,
            ApiError::Status { status: 409, ref message } if message == "Promotion code already exists"
        ));
    }

    #[test]
    fn status_error_falls_back_to_raw_body() {
        let error = error_for_status(StatusCode::BAD_GATEWAY, " upstream timeout\n");

        assert!(matches!(
            error,
            ApiError::Status { status: 502, ref message } if message == "upstream timeout"
        ));
    }

    #[test]
    fn authenticated_request_carries_bearer_token() -> TestResult {
        let client = ApiClient::new("https://api.example.com");

        let request = client
            .request(Method::GET, "/products", Some(&session()))
            .build()?;

        assert_eq!(request.url().as_str(), "https://api.example.com/products");
        assert_eq!(
            request
                .headers()
                .get(reqwest::header::AUTHORIZATION)
                .map(|value| value.to_str())
                .transpose()?,
            Some("Bearer access-token")
        );

        Ok(())
    }

    #[test]
    fn anonymous_request_has_no_authorization_header() -> TestResult {
        let client = ApiClient::new("https://api.example.com");

        let request = client.request(Method::POST, "/auth/login", None).build()?;

        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());

        Ok(())
    }
}
