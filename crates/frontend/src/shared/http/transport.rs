use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use web_sys::RequestCredentials;

use super::error::HttpError;
use super::request::{ApiRequest, ApiResponse, Method};

/// The single outbound HTTP seam
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, base_url: &str, request: &ApiRequest) -> Result<ApiResponse, HttpError>;
}

/// `fetch` through gloo-net, cookies always included
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    }
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, base_url: &str, request: &ApiRequest) -> Result<ApiResponse, HttpError> {
        let url = format!("{}{}", base_url, request.path_and_query());
        let builder = builder(request.method, &url).credentials(RequestCredentials::Include);

        let prepared = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| HttpError::Serialize(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| HttpError::Serialize(e.to_string()))?,
        };

        let response = prepared
            .send()
            .await
            .map_err(|e| HttpError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
