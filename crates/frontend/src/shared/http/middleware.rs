use std::sync::Arc;

use async_trait::async_trait;

use super::error::HttpError;
use super::request::{ApiRequest, ApiResponse};

/// Hooks run by [`super::ApiClient`] around the transport, in registration order
#[async_trait(?Send)]
pub trait Middleware: Send + Sync {
    /// Returning an error aborts the request before it reaches the transport
    async fn before_request(&self, _request: &ApiRequest) -> Result<(), HttpError> {
        Ok(())
    }

    /// Observes the settled result; cannot change it
    fn after_response(&self, _request: &ApiRequest, _result: &Result<ApiResponse, HttpError>) {}
}

#[async_trait(?Send)]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, ms: u32);
}

/// `setTimeout` based sleeper
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerSleeper;

#[async_trait(?Send)]
impl Sleeper for TimerSleeper {
    async fn sleep(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

// ---------------------------------------------------------------------------
// Simulated latency
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayPolicy {
    /// Uniform in `0..=max_ms`
    Random { max_ms: u32 },
    Fixed(u32),
}

impl Default for DelayPolicy {
    fn default() -> Self {
        DelayPolicy::Random { max_ms: 3000 }
    }
}

pub struct DelayMiddleware {
    policy: DelayPolicy,
    sleeper: Arc<dyn Sleeper>,
    /// Returns a value in `[0, 1)`
    random: Arc<dyn Fn() -> f64 + Send + Sync>,
}

impl DelayMiddleware {
    pub fn new(policy: DelayPolicy, sleeper: Arc<dyn Sleeper>) -> Self {
        Self {
            policy,
            sleeper,
            random: Arc::new(js_sys::Math::random),
        }
    }

    pub fn with_random(mut self, random: impl Fn() -> f64 + Send + Sync + 'static) -> Self {
        self.random = Arc::new(random);
        self
    }

    pub fn next_delay(&self) -> u32 {
        match self.policy {
            DelayPolicy::Fixed(ms) => ms,
            DelayPolicy::Random { max_ms } => {
                let r = (self.random)().clamp(0.0, 1.0);
                (r * max_ms as f64).round() as u32
            }
        }
    }
}

#[async_trait(?Send)]
impl Middleware for DelayMiddleware {
    async fn before_request(&self, _request: &ApiRequest) -> Result<(), HttpError> {
        let ms = self.next_delay();
        self.sleeper.sleep(ms).await;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Fault injection
// ---------------------------------------------------------------------------

pub const FAULT_DELAY_MS: u32 = 3000;

/// Fails matching requests after [`FAULT_DELAY_MS`]. With a target set only
/// requests whose path contains it fail; without one every request fails.
pub struct FaultMiddleware {
    target: Option<String>,
    sleeper: Arc<dyn Sleeper>,
}

impl FaultMiddleware {
    pub fn new(target: Option<String>, sleeper: Arc<dyn Sleeper>) -> Self {
        Self { target, sleeper }
    }

    pub fn matches(&self, request: &ApiRequest) -> bool {
        match &self.target {
            Some(target) => request.path.contains(target.as_str()),
            None => true,
        }
    }
}

#[async_trait(?Send)]
impl Middleware for FaultMiddleware {
    async fn before_request(&self, request: &ApiRequest) -> Result<(), HttpError> {
        if !self.matches(request) {
            return Ok(());
        }

        self.sleeper.sleep(FAULT_DELAY_MS).await;
        let target = self.target.clone().unwrap_or_else(|| "ALL".to_string());
        log::warn!("Simulated failure for {} {}", request.method.as_str(), request.path);
        Err(HttpError::Simulated { target })
    }
}

// ---------------------------------------------------------------------------
// Session expiry
// ---------------------------------------------------------------------------

pub trait SessionExpiredHandler: Send + Sync {
    fn session_expired(&self);
}

/// Calls the handler when a response is 401 with code `UNAUTHORIZED`.
/// The error itself still reaches the caller.
pub struct SessionGuardMiddleware {
    handler: Arc<dyn SessionExpiredHandler>,
}

impl SessionGuardMiddleware {
    pub fn new(handler: Arc<dyn SessionExpiredHandler>) -> Self {
        Self { handler }
    }
}

#[async_trait(?Send)]
impl Middleware for SessionGuardMiddleware {
    fn after_response(&self, request: &ApiRequest, result: &Result<ApiResponse, HttpError>) {
        if let Err(err) = result {
            if err.is_session_expired() {
                log::warn!("Session expired on {}", request.path);
                self.handler.session_expired();
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use contracts::system::auth::ApiErrorBody;
    use futures::executor::block_on;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Records requested sleeps instead of waiting
    #[derive(Default)]
    pub struct RecordingSleeper {
        pub calls: Mutex<Vec<u32>>,
    }

    #[async_trait(?Send)]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, ms: u32) {
            self.calls.lock().unwrap().push(ms);
        }
    }

    #[derive(Default)]
    pub struct CountingHandler {
        pub count: AtomicUsize,
    }

    impl SessionExpiredHandler for CountingHandler {
        fn session_expired(&self) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_fixed_and_random_delay() {
        let sleeper = Arc::new(RecordingSleeper::default());
        let fixed = DelayMiddleware::new(DelayPolicy::Fixed(2000), sleeper.clone());
        block_on(fixed.before_request(&ApiRequest::get("/orders"))).unwrap();

        let random = DelayMiddleware::new(DelayPolicy::default(), sleeper.clone())
            .with_random(|| 0.5);
        assert_eq!(random.next_delay(), 1500);
        block_on(random.before_request(&ApiRequest::get("/orders"))).unwrap();

        assert_eq!(*sleeper.calls.lock().unwrap(), vec![2000, 1500]);
    }

    #[test]
    fn test_fault_without_target_fails_everything() {
        let sleeper = Arc::new(RecordingSleeper::default());
        let fault = FaultMiddleware::new(None, sleeper.clone());
        let result = block_on(fault.before_request(&ApiRequest::get("/metrics/month-receipt")));
        assert_eq!(
            result,
            Err(HttpError::Simulated {
                target: "ALL".into()
            })
        );
        assert_eq!(*sleeper.calls.lock().unwrap(), vec![FAULT_DELAY_MS]);
    }

    #[test]
    fn test_fault_with_target_only_hits_matching_paths() {
        let sleeper = Arc::new(RecordingSleeper::default());
        let fault = FaultMiddleware::new(Some("profile".into()), sleeper.clone());

        assert!(block_on(fault.before_request(&ApiRequest::get("/orders"))).is_ok());
        assert!(sleeper.calls.lock().unwrap().is_empty());

        let result = block_on(fault.before_request(&ApiRequest::put("/profile")));
        assert!(matches!(result, Err(HttpError::Simulated { .. })));
    }

    #[test]
    fn test_session_guard_only_reacts_to_unauthorized_code() {
        let handler = Arc::new(CountingHandler::default());
        let guard = SessionGuardMiddleware::new(handler.clone());
        let request = ApiRequest::get("/me");

        let other = Err(HttpError::Status {
            status: 401,
            body: Some(ApiErrorBody {
                code: Some("INVALID_CREDENTIALS".into()),
                message: None,
            }),
        });
        guard.after_response(&request, &other);
        assert_eq!(handler.count.load(Ordering::SeqCst), 0);

        let expired = Err(HttpError::Status {
            status: 401,
            body: Some(ApiErrorBody {
                code: Some("UNAUTHORIZED".into()),
                message: None,
            }),
        });
        guard.after_response(&request, &expired);
        assert_eq!(handler.count.load(Ordering::SeqCst), 1);
    }
}
