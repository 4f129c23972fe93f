use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::status;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::Origin;
use crate::origin_pattern::OriginPatternError;
use crate::policy::Policy;
use thiserror::Error;

/// Largest accepted `Access-Control-Max-Age`, in seconds.
pub const MAX_AGE_LIMIT: u64 = 86_400;

/// User-facing CORS configuration, validated by [`crate::Cors::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct CorsOptions {
    pub origin: Origin,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub credentials: bool,
    pub max_age: Option<u64>,
    pub allow_private_network: bool,
    pub preflight_success_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::Any,
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            credentials: false,
            max_age: None,
            allow_private_network: false,
            preflight_success_status: status::PREFLIGHT_SUCCESS,
        }
    }
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn methods(mut self, methods: AllowedMethods) -> Self {
        self.methods = methods;
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.allowed_headers = headers;
        self
    }

    pub fn exposed_headers(mut self, headers: ExposedHeaders) -> Self {
        self.exposed_headers = headers;
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = enabled;
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn allow_private_network(mut self, enabled: bool) -> Self {
        self.allow_private_network = enabled;
        self
    }

    pub fn preflight_success_status(mut self, status: u16) -> Self {
        self.preflight_success_status = status;
        self
    }

    /// Runs the same checks as [`crate::Cors::new`] without keeping the result.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Policy::compile(self).map(drop)
    }
}

/// Configuration defects. Checks run field by field in declaration order,
/// then the cross-field checks; the first defect wins.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("at least one origin must be configured")]
    EmptyOrigins,
    #[error("\"*\" cannot appear in an origin list; use Origin::Any to allow every origin")]
    WildcardInOriginList,
    #[error("invalid origin {origin:?}: {source}")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: OriginPatternError,
    },
    #[error("origin {0:?} is listed more than once")]
    DuplicateOrigin(String),
    #[error("at least one allowed request header must be configured")]
    EmptyAllowedHeaders,
    #[error("allowed headers list cannot contain \"*\"; use AllowedHeaders::Any instead")]
    AllowedHeadersListCannotContainWildcard,
    #[error("invalid request header name {0:?}")]
    InvalidHeaderName(String),
    #[error("request header {0:?} is forbidden and cannot be allowed")]
    ForbiddenHeaderName(String),
    #[error("at least one method must be configured")]
    EmptyMethods,
    #[error("invalid method {0:?}")]
    InvalidMethod(String),
    #[error("method {0:?} is forbidden")]
    ForbiddenMethod(String),
    #[error("invalid exposed header name {0:?}")]
    InvalidExposedHeader(String),
    #[error("exposed headers cannot contain \"*\"")]
    ExposedHeadersCannotContainWildcard,
    #[error("max age of {value} seconds exceeds the limit of {max}")]
    MaxAgeOutOfRange { value: u64, max: u64 },
    #[error("preflight success status {0} is not in the 2xx range")]
    InvalidPreflightStatus(u16),
    #[error("credentials cannot be allowed together with any origin")]
    CredentialsRequireSpecificOrigin,
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
