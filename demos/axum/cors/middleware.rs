use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::VARY},
    middleware::Next,
    response::Response,
};
use cors_policy::{CorsDecision, Headers, RequestContext, constants::header};
use tracing::debug;

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);
    let decision = state.cors.check(&owned_ctx.as_request_context());
    debug!(
        kind = ?decision.kind,
        allowed = decision.allowed,
        "evaluated CORS request"
    );

    if decision.end_response {
        return short_circuit(decision);
    }

    let mut response = next.run(request).await;
    apply_headers(response.headers_mut(), &decision.headers);
    response
}

fn short_circuit(decision: CorsDecision) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = decision
        .status
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::NO_CONTENT);

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
    fn from_request(request: &Request) -> Self {
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
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
            access_control_request_private_network: self.access_control_request_private_network,
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
