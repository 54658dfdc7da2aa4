//! API Client
//!
//! Single chokepoint for HTTP calls: attaches the bearer token, encodes JSON
//! bodies and turns non-2xx responses into `ApiError`s.

mod auth;
mod complaints;
mod transport;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, GENERIC_ERROR_MESSAGE};

// Re-export all public items
pub use auth::*;
pub use complaints::*;
pub use transport::GlooTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

/// Multipart form. The file part is a browser `File` handle.
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub file: Option<(String, web_sys::File)>,
}

impl MultipartForm {
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    pub fn file(mut self, name: &str, file: Option<web_sys::File>) -> Self {
        self.file = file.map(|f| (name.to_string(), f));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    None,
    Json(String),
    Multipart(MultipartForm),
}

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Sends one request. Only transport failures are errors here; HTTP error
/// statuses come back as responses.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Error body shape. `detail` is what the server sends; `message` is accepted
/// as well. Anything else (e.g. validation arrays) falls back.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<serde_json::Value>,
}

/// Extract the server's message from an error body, or use `fallback`
pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| {
            [parsed.detail, parsed.message]
                .into_iter()
                .flatten()
                .find_map(|value| match value {
                    serde_json::Value::String(s) if !s.is_empty() => Some(s),
                    _ => None,
                })
        })
        .unwrap_or_else(|| fallback.to_string())
}

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
    token: Option<String>,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Bearer token attached to every request, if any
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn request(&self, method: HttpMethod, path: &str, body: RequestBody) -> ApiRequest {
        let mut headers = Vec::new();
        if matches!(body, RequestBody::Json(_)) {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = &self.token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        ApiRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body,
        }
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
        fallback: &str,
    ) -> Result<R, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        let response = self.transport.send(request).await.map_err(|e| {
            log::error!(target: "Api", "{:?} {} failed: {}", method, url, e);
            e
        })?;

        if !response.is_success() {
            let message = error_message(&response.body, fallback);
            log::warn!(target: "Api", "{:?} {} -> {}: {}", method, url, response.status, message);
            return Err(ApiError::Http {
                status: response.status,
                message,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn json_body<B: Serialize>(body: &B) -> Result<RequestBody, ApiError> {
        serde_json::to_string(body)
            .map(RequestBody::Json)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let request = self.request(HttpMethod::Get, path, RequestBody::None);
        self.execute(request, GENERIC_ERROR_MESSAGE).await
    }

    pub async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let request = self.request(HttpMethod::Post, path, Self::json_body(body)?);
        self.execute(request, GENERIC_ERROR_MESSAGE).await
    }

    pub async fn put_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let request = self.request(HttpMethod::Put, path, Self::json_body(body)?);
        self.execute(request, GENERIC_ERROR_MESSAGE).await
    }

    /// Multipart POST; no JSON content type, the browser sets the boundary
    pub async fn post_multipart<R: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartForm,
        fallback: &str,
    ) -> Result<R, ApiError> {
        let request = self.request(HttpMethod::Post, path, RequestBody::Multipart(form));
        self.execute(request, fallback).await
    }
}

#[cfg(test)]
pub mod mock {
    //! Scripted transport for controller tests

    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::*;

    type Hook = Box<dyn Fn(&ApiRequest)>;

    #[derive(Clone, Default)]
    pub struct MockTransport {
        responses: Rc<RefCell<VecDeque<Result<ApiResponse, ApiError>>>>,
        requests: Rc<RefCell<Vec<ApiRequest>>>,
        on_send: Rc<RefCell<Option<Hook>>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, status: u16, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(ApiResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(self, error: ApiError) -> Self {
            self.responses.borrow_mut().push_back(Err(error));
            self
        }

        /// Run `hook` while a request is in flight
        pub fn on_send(self, hook: impl Fn(&ApiRequest) + 'static) -> Self {
            *self.on_send.borrow_mut() = Some(Box::new(hook));
            self
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.borrow().clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for MockTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
            if let Some(hook) = self.on_send.borrow().as_ref() {
                hook(&request);
            }
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
        }
    }
}
