use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::origin::OriginMode;
use crate::policy::Policy;

/// Result of the origin check, carrying the headers it produced.
#[derive(Debug)]
pub(crate) enum OriginOutcome {
    Allow(HeaderCollection),
    Disallow(HeaderCollection),
}

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a Policy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a Policy) -> Self {
        Self { policy }
    }

    /// `Access-Control-Allow-Origin` plus `Vary: Origin` for explicit lists.
    ///
    /// The allowed value is the request's `Origin` byte for byte.
    pub(crate) fn build_origin_headers(&self, origin: &str) -> OriginOutcome {
        match self.policy.origin() {
            OriginMode::Any if origin.is_empty() => OriginOutcome::Disallow(HeaderCollection::new()),
            OriginMode::Any => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
                OriginOutcome::Allow(headers)
            }
            OriginMode::Explicit(_) => {
                let mut headers = HeaderCollection::with_estimate(2);
                if self.policy.allows_origin_value(origin) {
                    headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
                    headers.add_vary(header::ORIGIN);
                    OriginOutcome::Allow(headers)
                } else {
                    headers.add_vary(header::ORIGIN);
                    OriginOutcome::Disallow(headers)
                }
            }
        }
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if self.policy.credentials() {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers
    }

    pub(crate) fn build_methods_header(&self, requested: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.policy.methods().header_value(requested),
        );
        headers
    }

    pub(crate) fn build_allowed_headers(&self, requested: Option<&str>) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(value) = self.policy.allowed_headers().header_value(requested) {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(value) = self.policy.exposed_headers() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(value) = self.policy.max_age_header() {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, value);
        }
        headers
    }

    pub(crate) fn build_private_network_header(
        &self,
        request: &RequestContext<'_>,
    ) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if self.policy.allow_private_network() && request.access_control_request_private_network {
            headers.push(header::ACCESS_CONTROL_ALLOW_PRIVATE_NETWORK, "true");
        }
        headers
    }

    /// Request headers a preflight response depends on, beyond `Origin`.
    pub(crate) fn build_preflight_vary(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
        if self.policy.allow_private_network() {
            headers.add_vary(header::ACCESS_CONTROL_REQUEST_PRIVATE_NETWORK);
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
