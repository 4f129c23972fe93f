use crate::allowed_headers::AllowedHeaderSet;
use crate::allowed_methods::AllowedMethodSet;
use crate::options::{CorsOptions, MAX_AGE_LIMIT, ValidationError};
use crate::origin::OriginMode;
use crate::origin_pattern::Scheme;
use crate::request_origin::RequestOrigin;
use crate::util::lower_ascii;

/// Compiled, immutable form of [`CorsOptions`].
///
/// Every field has been validated; nothing here is touched after
/// construction, so a `Policy` can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct Policy {
    origin: OriginMode,
    allowed_headers: AllowedHeaderSet,
    methods: AllowedMethodSet,
    credentials: bool,
    exposed_headers: Option<String>,
    max_age: Option<u64>,
    max_age_header: Option<String>,
    allow_private_network: bool,
    preflight_success_status: u16,
}

impl Policy {
    pub(crate) fn compile(options: &CorsOptions) -> Result<Self, ValidationError> {
        let origin = options.origin.compile()?;
        let allowed_headers = options.allowed_headers.compile()?;
        let methods = options.methods.compile()?;
        let exposed_headers = options.exposed_headers.compile()?;

        if let Some(value) = options.max_age
            && value > MAX_AGE_LIMIT
        {
            return Err(ValidationError::MaxAgeOutOfRange {
                value,
                max: MAX_AGE_LIMIT,
            });
        }

        if !(200..=299).contains(&options.preflight_success_status) {
            return Err(ValidationError::InvalidPreflightStatus(
                options.preflight_success_status,
            ));
        }

        if origin.is_any() && options.credentials {
            return Err(ValidationError::CredentialsRequireSpecificOrigin);
        }

        Ok(Self {
            origin,
            allowed_headers,
            methods,
            credentials: options.credentials,
            exposed_headers,
            max_age: options.max_age,
            max_age_header: options.max_age.map(|seconds| seconds.to_string()),
            allow_private_network: options.allow_private_network,
            preflight_success_status: options.preflight_success_status,
        })
    }

    pub fn origin(&self) -> &OriginMode {
        &self.origin
    }

    pub fn allowed_headers(&self) -> &AllowedHeaderSet {
        &self.allowed_headers
    }

    pub fn methods(&self) -> &AllowedMethodSet {
        &self.methods
    }

    pub fn credentials(&self) -> bool {
        self.credentials
    }

    /// Serialized `Access-Control-Expose-Headers` value, if any names are exposed.
    pub fn exposed_headers(&self) -> Option<&str> {
        self.exposed_headers.as_deref()
    }

    pub fn max_age(&self) -> Option<u64> {
        self.max_age
    }

    pub(crate) fn max_age_header(&self) -> Option<&str> {
        self.max_age_header.as_deref()
    }

    pub fn allow_private_network(&self) -> bool {
        self.allow_private_network
    }

    pub fn preflight_success_status(&self) -> u16 {
        self.preflight_success_status
    }

    /// Whether an origin tuple is allowed. A missing `port` means the scheme default.
    pub fn origin_allowed(&self, scheme: Scheme, host: &str, port: Option<u16>) -> bool {
        match &self.origin {
            OriginMode::Any => true,
            OriginMode::Explicit(matcher) => matcher.matches(scheme, &lower_ascii(host), port),
        }
    }

    /// Whether a raw `Origin` header value is allowed.
    pub fn allows_origin_value(&self, value: &str) -> bool {
        match &self.origin {
            OriginMode::Any => !value.is_empty(),
            OriginMode::Explicit(matcher) => RequestOrigin::parse(value).is_some_and(|origin| {
                matcher.matches(origin.scheme(), origin.host(), origin.port())
            }),
        }
    }

    /// Checks a comma-separated `Access-Control-Request-Headers` value.
    pub fn headers_allowed(&self, requested: &str) -> bool {
        self.allowed_headers.allows_headers(requested)
    }

    pub fn method_allowed(&self, method: &str) -> bool {
        self.methods.allows_method(method)
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
