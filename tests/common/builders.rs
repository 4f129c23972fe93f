use cors_policy::constants::method;
use cors_policy::{
    AllowedHeaders, AllowedMethods, Cors, CorsDecision, CorsOptions, ExposedHeaders, Origin,
    RequestContext, ValidationError,
};

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.options.origin = origin;
        self
    }

    pub fn origins<I, S>(self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origin(Origin::list(origins))
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.methods = AllowedMethods::list(methods);
        self
    }

    pub fn any_method(mut self) -> Self {
        self.options.methods = AllowedMethods::Any;
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.options.allowed_headers = headers;
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exposed_headers = ExposedHeaders::list(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.credentials = enabled;
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.options.max_age = Some(seconds);
        self
    }

    pub fn private_network(mut self, enabled: bool) -> Self {
        self.options.allow_private_network = enabled;
        self
    }

    pub fn preflight_success_status(mut self, status: u16) -> Self {
        self.options.preflight_success_status = status;
        self
    }

    pub fn options(self) -> CorsOptions {
        self.options
    }

    pub fn try_build(self) -> Result<Cors, ValidationError> {
        Cors::new(self.options)
    }

    pub fn build(self) -> Cors {
        self.try_build().expect("valid CORS configuration")
    }
}

pub struct ActualRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl ActualRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let request = RequestContext::new(&self.method).with_origin(self.origin.as_deref());
        cors.check(&request)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
    private_network: bool,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn private_network(mut self, enabled: bool) -> Self {
        self.private_network = enabled;
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let request = RequestContext::new(method::OPTIONS)
            .with_origin(self.origin.as_deref())
            .with_request_method(self.request_method.as_deref())
            .with_request_headers(self.request_headers.as_deref())
            .with_private_network(self.private_network);
        cors.check(&request)
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn actual_request() -> ActualRequestBuilder {
    ActualRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
