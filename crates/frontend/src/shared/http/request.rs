use contracts::system::auth::ApiErrorBody;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::HttpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Outbound request relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// Encoded query string without the leading `?`
    pub query: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// Encode `params` as the query string
    pub fn with_query<Q: Serialize>(mut self, params: &Q) -> Result<Self, HttpError> {
        let query =
            serde_qs::to_string(params).map_err(|e| HttpError::Serialize(e.to_string()))?;
        self.query = if query.is_empty() { None } else { Some(query) };
        Ok(self)
    }

    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, HttpError> {
        let value =
            serde_json::to_value(body).map_err(|e| HttpError::Serialize(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }
}

/// Raw response as seen by the transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        serde_json::from_str(&self.body).map_err(|e| HttpError::Decode(e.to_string()))
    }

    pub fn error_body(&self) -> Option<ApiErrorBody> {
        serde_json::from_str(&self.body).ok()
    }

    /// Non-2xx responses become [`HttpError::Status`]
    pub fn into_result(self) -> Result<Self, HttpError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(HttpError::Status {
                status: self.status,
                body: self.error_body(),
            })
        }
    }
}
