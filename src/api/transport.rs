//! Browser Transport
//!
//! `fetch` via gloo-net.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

use super::{ApiRequest, ApiResponse, HttpMethod, HttpTransport, MultipartForm, RequestBody};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

fn form_data(form: &MultipartForm) -> Result<web_sys::FormData, ApiError> {
    let data = web_sys::FormData::new()
        .map_err(|e| ApiError::Network(format!("failed to create form data: {:?}", e)))?;
    for (name, value) in &form.fields {
        data.append_with_str(name, value)
            .map_err(|e| ApiError::Network(format!("failed to append {}: {:?}", name, e)))?;
    }
    if let Some((name, file)) = &form.file {
        data.append_with_blob_and_filename(name, file, &file.name())
            .map_err(|e| ApiError::Network(format!("failed to attach {}: {:?}", name, e)))?;
    }
    Ok(data)
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder: RequestBuilder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match &request.body {
            RequestBody::None => builder.build(),
            RequestBody::Json(json) => builder.body(json.clone()),
            RequestBody::Multipart(form) => builder.body(form_data(form)?),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        // An unreadable body is treated as empty; error decoding falls back
        let body = response.text().await.unwrap_or_default();
        Ok(ApiResponse { status, body })
    }
}
