//! HTTP client adapter
//!
//! Every backend call goes through [`ApiClient`], which runs a chain of
//! [`Middleware`] around a single [`Transport`]. Delay and fault injection and
//! the session-expiry redirect are middleware; the browser transport is
//! `gloo-net`.

pub mod client;
pub mod error;
pub mod middleware;
pub mod request;
pub mod transport;

pub use client::{use_api, ApiClient};
pub use error::HttpError;
pub use middleware::{
    DelayMiddleware, DelayPolicy, FaultMiddleware, Middleware, SessionExpiredHandler,
    SessionGuardMiddleware, Sleeper,
};
pub use request::{ApiRequest, ApiResponse, Method};
pub use transport::{BrowserTransport, Transport};
