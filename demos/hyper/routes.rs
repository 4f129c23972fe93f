use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::header::CONTENT_TYPE;
use hyper::http::{Method, StatusCode};
use hyper::service::Service;
use hyper::{Request, Response};

use crate::cors::SharedAppState;
use crate::cors::middleware::CorsBody;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

#[derive(Clone)]
pub struct Router {
    state: SharedAppState,
}

pub fn router(state: SharedAppState) -> Router {
    Router { state }
}

impl Service<Request<Incoming>> for Router {
    type Response = Response<CorsBody>;
    type Error = Infallible;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let state = self.state.clone();

        Box::pin(async move {
            let response = match (req.method(), req.uri().path()) {
                (&Method::GET, "/greet") => greet(&state),
                (&Method::PUT, "/items") => text(StatusCode::OK, "updated"),
                _ => text(StatusCode::NOT_FOUND, "Not Found"),
            };

            Ok(response)
        })
    }
}

fn greet(state: &SharedAppState) -> Response<CorsBody> {
    let mut response = text(
        StatusCode::OK,
        format!(
            "<h1>{}</h1><p>Call this endpoint from an allowed origin to see the CORS headers.</p>",
            state.greeting
        ),
    );
    response.headers_mut().insert(
        CONTENT_TYPE,
        hyper::http::HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response
}

fn text(status: StatusCode, body: impl Into<Bytes>) -> Response<CorsBody> {
    let mut response = Response::new(Full::new(body.into()));
    *response.status_mut() = status;
    response
}
