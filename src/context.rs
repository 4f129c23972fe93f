use crate::constants::method;

/// The parts of an inbound request the engine looks at.
///
/// `None` means the header was absent; `Some("")` means it was present but
/// empty, which matters for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
    pub access_control_request_private_network: bool,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str) -> Self {
        Self {
            method,
            origin: None,
            access_control_request_method: None,
            access_control_request_headers: None,
            access_control_request_private_network: false,
        }
    }

    pub fn with_origin(mut self, origin: Option<&'a str>) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_request_method(mut self, method: Option<&'a str>) -> Self {
        self.access_control_request_method = method;
        self
    }

    pub fn with_request_headers(mut self, headers: Option<&'a str>) -> Self {
        self.access_control_request_headers = headers;
        self
    }

    pub fn with_private_network(mut self, requested: bool) -> Self {
        self.access_control_request_private_network = requested;
        self
    }
}

/// Classification of a request, computed before any policy lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// No `Origin` header; the engine does nothing.
    NoCors,
    /// A cross-origin request that is not a preflight, including `OPTIONS`
    /// requests lacking `Access-Control-Request-Method`.
    Actual,
    /// `OPTIONS` carrying `Access-Control-Request-Method`.
    Preflight,
}

impl RequestKind {
    pub fn classify(request: &RequestContext<'_>) -> Self {
        if request.origin.is_none() {
            return Self::NoCors;
        }

        // Methods are case-sensitive, so `options` is not a preflight.
        if request.method == method::OPTIONS && request.access_control_request_method.is_some() {
            Self::Preflight
        } else {
            Self::Actual
        }
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
