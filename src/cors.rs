use crate::context::{RequestContext, RequestKind};
use crate::header_builder::{HeaderBuilder, OriginOutcome};
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::OriginMode;
use crate::origin_pattern::Scheme;
use crate::policy::Policy;
use crate::result::CorsDecision;
use tracing::{debug, warn};

/// CORS decision engine built from validated [`CorsOptions`].
///
/// Immutable after construction; share it by reference or behind an `Arc`.
#[derive(Clone, Debug)]
pub struct Cors {
    policy: Policy,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        let policy = Policy::compile(&options)?;

        match policy.origin() {
            OriginMode::Any => debug!(
                origin_mode = "any",
                private_network = policy.allow_private_network(),
                "compiled CORS policy"
            ),
            OriginMode::Explicit(matcher) => {
                debug!(
                    origin_mode = "explicit",
                    exact = matcher.exact_len(),
                    wildcard = matcher.wildcard_len(),
                    credentials = policy.credentials(),
                    private_network = policy.allow_private_network(),
                    "compiled CORS policy"
                );
                if policy.credentials() && matcher.scheme_len(Scheme::Http) > 0 {
                    warn!(
                        origins = matcher.scheme_len(Scheme::Http),
                        "credentials are allowed for insecure http origins"
                    );
                }
            }
        }

        Ok(Self { policy })
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        match RequestKind::classify(request) {
            RequestKind::NoCors => CorsDecision::not_applicable(),
            RequestKind::Actual => self.process_actual(request),
            RequestKind::Preflight => self.process_preflight(request),
        }
    }

    fn process_actual(&self, request: &RequestContext<'_>) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.policy);
        let origin = request.origin.unwrap_or_default();

        let mut headers = match builder.build_origin_headers(origin) {
            OriginOutcome::Allow(headers) => headers,
            OriginOutcome::Disallow(headers) => {
                return CorsDecision::actual(false, headers.into_headers());
            }
        };
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());

        CorsDecision::actual(true, headers.into_headers())
    }

    fn process_preflight(&self, request: &RequestContext<'_>) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.policy);
        let origin = request.origin.unwrap_or_default();

        let OriginOutcome::Allow(origin_headers) = builder.build_origin_headers(origin) else {
            return CorsDecision::preflight_rejected();
        };

        let requested_method = request.access_control_request_method.unwrap_or_default();
        if !self.policy.method_allowed(requested_method) {
            return CorsDecision::preflight_rejected();
        }

        let requested_headers = request.access_control_request_headers;
        if !self
            .policy
            .headers_allowed(requested_headers.unwrap_or_default())
        {
            return CorsDecision::preflight_rejected();
        }

        if request.access_control_request_private_network && !self.policy.allow_private_network() {
            return CorsDecision::preflight_rejected();
        }

        let mut headers = HeaderCollection::with_estimate(8);
        headers.extend(origin_headers);
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_methods_header(requested_method));
        headers.extend(builder.build_allowed_headers(requested_headers));
        headers.extend(builder.build_max_age_header());
        headers.extend(builder.build_private_network_header(request));
        headers.extend(builder.build_preflight_vary());

        CorsDecision::preflight_accepted(
            headers.into_headers(),
            self.policy.preflight_success_status(),
        )
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
