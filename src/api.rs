#[cfg(target_arch = "wasm32")]
use gloo_net::http::Request;
#[cfg(target_arch = "wasm32")]
use serde::de::DeserializeOwned;

#[cfg(target_arch = "wasm32")]
use crate::models::{CreateUserRequest, UsersResponse};

const API_BASE_URL: &str = match option_env!("WASM_API_BASE_URL") {
    Some(value) => value,
    None => "http://127.0.0.1:8080",
};

#[derive(Debug, Clone)]
pub(crate) enum ApiError {
    Network(String),
    Http { status: u16, message: String },
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Http { status, message } => write!(f, "http error {status}: {message}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn endpoint(path: &str) -> String {
    join_url(API_BASE_URL, path)
}

fn users_query(page: u32, limit: u32) -> String {
    format!("/api/users?page={page}&limit={limit}")
}

fn http_error_message(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        format!("request failed with status {status}")
    } else {
        body.to_string()
    }
}

#[cfg(target_arch = "wasm32")]
async fn parse_json<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
async fn error_from_response(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    ApiError::Http {
        status,
        message: http_error_message(status, &body),
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn fetch_users(page: u32, limit: u32) -> Result<UsersResponse, ApiError> {
    let response = Request::get(&endpoint(&users_query(page, limit)))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    parse_json(response).await
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn create_user(request: &CreateUserRequest) -> Result<(), ApiError> {
    let response = Request::post(&endpoint("/api/users"))
        .json(request)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(
            join_url("http://localhost:8080/", "/api/users"),
            "http://localhost:8080/api/users"
        );
        assert_eq!(
            join_url("http://localhost:8080", "api/users"),
            "http://localhost:8080/api/users"
        );
    }

    #[test]
    fn endpoint_targets_api_path() {
        assert!(endpoint("/api/users").ends_with("/api/users"));
    }

    #[test]
    fn users_query_carries_page_and_limit() {
        assert_eq!(users_query(2, 10), "/api/users?page=2&limit=10");
    }

    #[test]
    fn http_error_message_prefers_response_body() {
        assert_eq!(http_error_message(422, "email taken"), "email taken");
    }

    #[test]
    fn http_error_message_falls_back_to_status() {
        assert_eq!(
            http_error_message(500, "  "),
            "request failed with status 500"
        );
    }

    #[test]
    fn api_error_display_includes_cause() {
        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.to_string(), "network error: connection refused");

        let http = ApiError::Http {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(http.to_string(), "http error 404: not found");

        let decode = ApiError::Decode("missing field `users`".to_string());
        assert_eq!(decode.to_string(), "decode error: missing field `users`");
    }
}
