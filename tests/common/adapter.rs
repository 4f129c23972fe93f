use cors_policy::constants::header;
use cors_policy::{Cors, RequestContext};
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory request as an HTTP server would hand it over.
#[derive(Debug, Clone)]
pub struct TestRequest {
    pub method: String,
    pub headers: Vec<(String, String)>,
}

impl TestRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn header_values(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// Sets a header the way an adapter does: `Vary` is appended, anything
    /// else replaces an existing value.
    fn apply_header(&mut self, name: &str, value: String) {
        if !name.eq_ignore_ascii_case(header::VARY) {
            self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        }
        self.headers.push((name.to_string(), value));
    }
}

/// Middleware adapter wrapping a handler that answers `200 OK`.
///
/// Counts handler invocations so tests can check short-circuiting.
pub struct TestAdapter {
    cors: Cors,
    handler_headers: Vec<(String, String)>,
    handler_calls: AtomicUsize,
}

impl TestAdapter {
    pub fn new(cors: Cors) -> Self {
        Self {
            cors,
            handler_headers: Vec::new(),
            handler_calls: AtomicUsize::new(0),
        }
    }

    /// Header the wrapped handler sets on every response it produces.
    pub fn handler_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.handler_headers.push((name.into(), value.into()));
        self
    }

    pub fn handler_calls(&self) -> usize {
        self.handler_calls.load(Ordering::SeqCst)
    }

    pub fn handle(&self, request: &TestRequest) -> TestResponse {
        let context = RequestContext::new(&request.method)
            .with_origin(request.get(header::ORIGIN))
            .with_request_method(request.get(header::ACCESS_CONTROL_REQUEST_METHOD))
            .with_request_headers(request.get(header::ACCESS_CONTROL_REQUEST_HEADERS))
            .with_private_network(
                request
                    .get(header::ACCESS_CONTROL_REQUEST_PRIVATE_NETWORK)
                    .is_some_and(|value| value.eq_ignore_ascii_case("true")),
            );
        let decision = self.cors.check(&context);

        let mut response = if decision.end_response {
            TestResponse {
                status: decision.status.unwrap_or(204),
                headers: Vec::new(),
                body: String::new(),
            }
        } else {
            self.handler_calls.fetch_add(1, Ordering::SeqCst);
            TestResponse {
                status: 200,
                headers: self.handler_headers.clone(),
                body: "ok".into(),
            }
        };

        for (name, value) in decision.headers {
            response.apply_header(name, value);
        }
        response
    }
}
