use crate::constants::status;
use crate::context::RequestKind;
use crate::headers::Headers;

/// Outcome of evaluating one request against a [`crate::Policy`].
///
/// Adapters copy `headers` onto the response. When `end_response` is set the
/// adapter answers immediately with `status` and an empty body instead of
/// invoking the wrapped handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsDecision {
    pub kind: RequestKind,
    pub allowed: bool,
    pub headers: Headers,
    pub status: Option<u16>,
    pub end_response: bool,
}

impl CorsDecision {
    /// Request without an `Origin` header: pass through untouched.
    pub(crate) fn not_applicable() -> Self {
        Self {
            kind: RequestKind::NoCors,
            allowed: false,
            headers: Headers::new(),
            status: None,
            end_response: false,
        }
    }

    pub(crate) fn actual(allowed: bool, headers: Headers) -> Self {
        Self {
            kind: RequestKind::Actual,
            allowed,
            headers,
            status: None,
            end_response: false,
        }
    }

    pub(crate) fn preflight_accepted(headers: Headers, status: u16) -> Self {
        Self {
            kind: RequestKind::Preflight,
            allowed: true,
            headers,
            status: Some(status),
            end_response: true,
        }
    }

    pub(crate) fn preflight_rejected() -> Self {
        Self {
            kind: RequestKind::Preflight,
            allowed: false,
            headers: Headers::new(),
            status: Some(status::PREFLIGHT_REJECTED),
            end_response: true,
        }
    }

    /// Looks up an emitted header by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
