use std::sync::Arc;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use super::error::HttpError;
use super::middleware::{
    DelayMiddleware, DelayPolicy, FaultMiddleware, Middleware, SessionExpiredHandler,
    SessionGuardMiddleware, TimerSleeper,
};
use super::request::{ApiRequest, ApiResponse};
use super::transport::{BrowserTransport, Transport};
use crate::shared::config::AppConfig;
use crate::system::auth::storage;

/// Backend client shared through context; cheap to clone
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    transport: Arc<dyn Transport>,
    middleware: Arc<Vec<Arc<dyn Middleware>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            transport,
            middleware: Arc::new(Vec::new()),
        }
    }

    pub fn with_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        Arc::make_mut(&mut self.middleware).push(middleware);
        self
    }

    /// Browser wiring: gloo transport, optional delay/fault injection, session guard
    pub fn from_config(config: &AppConfig) -> Self {
        let sleeper = Arc::new(TimerSleeper);
        let mut client = Self::new(config.base_url(), Arc::new(BrowserTransport));

        if config.enable_api_delay {
            client = client.with_middleware(Arc::new(DelayMiddleware::new(
                DelayPolicy::default(),
                sleeper.clone(),
            )));
        }
        if config.enable_api_error {
            client = client.with_middleware(Arc::new(FaultMiddleware::new(
                config.api_error_target.clone(),
                sleeper,
            )));
        }

        client.with_middleware(Arc::new(SessionGuardMiddleware::new(Arc::new(
            RedirectToSignIn,
        ))))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn request(&self, request: ApiRequest) -> Result<ApiResponse, HttpError> {
        log::debug!("{} {}", request.method.as_str(), request.path_and_query());

        for middleware in self.middleware.iter() {
            if let Err(err) = middleware.before_request(&request).await {
                let result = Err(err);
                self.observe(&request, &result);
                return result;
            }
        }

        let result = self
            .transport
            .send(&self.base_url, &request)
            .await
            .and_then(ApiResponse::into_result);

        if let Err(err) = &result {
            log::debug!("{} {} failed: {}", request.method.as_str(), request.path, err);
        }
        self.observe(&request, &result);
        result
    }

    fn observe(&self, request: &ApiRequest, result: &Result<ApiResponse, HttpError>) {
        for middleware in self.middleware.iter() {
            middleware.after_response(request, result);
        }
    }

    /// Send and decode a JSON body
    pub async fn fetch_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, HttpError> {
        self.request(request).await?.json()
    }

    /// Send and ignore the response body
    pub async fn execute(&self, request: ApiRequest) -> Result<(), HttpError> {
        self.request(request).await.map(|_| ())
    }
}

/// Persists the session-expired flag and hard-reloads into the sign-in page,
/// which drops every in-memory cache
struct RedirectToSignIn;

impl SessionExpiredHandler for RedirectToSignIn {
    fn session_expired(&self) {
        storage::set_auth_error_flag();
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href("/sign-in") {
                log::error!("Failed to redirect to sign-in: {:?}", e);
            }
        }
    }
}

/// Hook to access the API client
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::middleware::tests::{CountingHandler, RecordingSleeper};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::collections::VecDeque;
    use std::sync::atomic::Ordering;
    use std::sync::Mutex;

    /// Replays scripted responses and records what was sent
    #[derive(Default)]
    struct ScriptedTransport {
        responses: Mutex<VecDeque<ApiResponse>>,
        sent: Mutex<Vec<String>>,
    }

    impl ScriptedTransport {
        fn with(responses: Vec<ApiResponse>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                sent: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn send(&self, base_url: &str, request: &ApiRequest) -> Result<ApiResponse, HttpError> {
            self.sent
                .lock()
                .unwrap()
                .push(format!("{}{}", base_url, request.path_and_query()));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| HttpError::Network("no scripted response".into()))
        }
    }

    fn ok(body: &str) -> ApiResponse {
        ApiResponse {
            status: 200,
            body: body.into(),
        }
    }

    #[test]
    fn test_fetch_json_joins_base_url() {
        let transport = ScriptedTransport::with(vec![ok(r#"{"amount":12,"diffFromYesterday":-4}"#)]);
        let client = ApiClient::new("http://localhost:3333/", transport.clone());

        let value: serde_json::Value =
            block_on(client.fetch_json(ApiRequest::get("/metrics/day-orders-amount"))).unwrap();
        assert_eq!(value["amount"], 12);
        assert_eq!(
            *transport.sent.lock().unwrap(),
            vec!["http://localhost:3333/metrics/day-orders-amount".to_string()]
        );
    }

    #[test]
    fn test_fault_short_circuits_transport() {
        let transport = ScriptedTransport::with(vec![ok("{}")]);
        let sleeper = Arc::new(RecordingSleeper::default());
        let client = ApiClient::new("http://api", transport.clone())
            .with_middleware(Arc::new(FaultMiddleware::new(Some("profile".into()), sleeper)));

        let result = block_on(client.execute(ApiRequest::put("/profile")));
        assert!(matches!(result, Err(HttpError::Simulated { .. })));
        assert!(transport.sent.lock().unwrap().is_empty());

        assert!(block_on(client.execute(ApiRequest::get("/orders"))).is_ok());
        assert_eq!(transport.sent.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_unauthorized_response_fires_handler_and_propagates() {
        let transport = ScriptedTransport::with(vec![
            ApiResponse {
                status: 401,
                body: r#"{"code":"UNAUTHORIZED"}"#.into(),
            },
            ApiResponse {
                status: 401,
                body: r#"{"code":"OTHER"}"#.into(),
            },
        ]);
        let handler = Arc::new(CountingHandler::default());
        let client = ApiClient::new("http://api", transport)
            .with_middleware(Arc::new(SessionGuardMiddleware::new(handler.clone())));

        let first = block_on(client.execute(ApiRequest::get("/me")));
        assert_eq!(first.unwrap_err().status(), Some(401));
        assert_eq!(handler.count.load(Ordering::SeqCst), 1);

        let second = block_on(client.execute(ApiRequest::get("/me")));
        assert!(second.is_err());
        assert_eq!(handler.count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_middleware_runs_in_registration_order() {
        let transport = ScriptedTransport::with(vec![ok("{}")]);
        let sleeper = Arc::new(RecordingSleeper::default());
        let client = ApiClient::new("http://api", transport)
            .with_middleware(Arc::new(DelayMiddleware::new(
                DelayPolicy::Fixed(2000),
                sleeper.clone(),
            )))
            .with_middleware(Arc::new(FaultMiddleware::new(None, sleeper.clone())));

        assert!(block_on(client.execute(ApiRequest::get("/orders"))).is_err());
        assert_eq!(*sleeper.calls.lock().unwrap(), vec![2000, 3000]);
    }
}
