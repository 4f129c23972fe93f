use std::future::Future;
use std::pin::Pin;

use cors_policy::constants::header;
use cors_policy::{CorsDecision, Headers, RequestContext};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::header::{HeaderMap, HeaderName, HeaderValue, VARY};
use hyper::http::StatusCode;
use hyper::service::Service;
use hyper::{Request, Response};
use tracing::debug;

use super::SharedCors;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type CorsBody = Full<Bytes>;

/// Hyper service wrapper following the "Getting Started with a Server
/// Middleware" guide: https://hyper.rs/guides/1/server/middleware/
#[derive(Clone)]
pub struct CorsLayer<S> {
    inner: S,
    cors: SharedCors,
}

impl<S> CorsLayer<S> {
    pub fn new(cors: SharedCors, inner: S) -> Self {
        Self { inner, cors }
    }
}

impl<S> Service<Request<Incoming>> for CorsLayer<S>
where
    S: Service<Request<Incoming>, Response = Response<CorsBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<CorsBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let owned_ctx = OwnedRequestContext::from_request(&req);
        let decision = self.cors.check(&owned_ctx.as_request_context());
        debug!(
            kind = ?decision.kind,
            allowed = decision.allowed,
            end_response = decision.end_response,
            "evaluated CORS request"
        );

        if decision.end_response {
            return Box::pin(async move { Ok(short_circuit(decision)) });
        }

        let inner = self.inner.clone();
        Box::pin(async move {
            let mut response = inner.call(req).await?;
            apply_headers(response.headers_mut(), &decision.headers);
            Ok(response)
        })
    }
}

fn short_circuit(decision: CorsDecision) -> Response<CorsBody> {
    let status = decision
        .status
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::NO_CONTENT);

    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = status;
    apply_headers(response.headers_mut(), &decision.headers);
    response
}

/// Copies decision headers onto a response. `Vary` is appended so cache keys
/// the handler already set survive.
fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers {
        let (Ok(header_name), Ok(header_value)) =
            (HeaderName::try_from(*name), HeaderValue::from_str(value))
        else {
            continue;
        };

        if header_name == VARY {
            map.append(header_name, header_value);
        } else {
            map.insert(header_name, header_value);
        }
    }
}

struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
    access_control_request_private_network: bool,
}

impl OwnedRequestContext {
    fn from_request(request: &Request<Incoming>) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
            access_control_request_private_network: headers
                .get(header::ACCESS_CONTROL_REQUEST_PRIVATE_NETWORK)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|value| value.eq_ignore_ascii_case("true")),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext::new(&self.method)
            .with_origin(self.origin.as_deref())
            .with_request_method(self.access_control_request_method.as_deref())
            .with_request_headers(self.access_control_request_headers.as_deref())
            .with_private_network(self.access_control_request_private_network)
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
