//! CORS access-control decisions with indexed origin matching.
//!
//! Build a [`Cors`] once from [`CorsOptions`], then call [`Cors::check`] for
//! every request. Origin lookups cost time proportional to the request's host
//! length, not to the number of configured origins.

mod allowed_headers;
mod allowed_methods;
pub mod constants;
mod context;
mod cors;
#[cfg(feature = "serde")]
mod de;
mod exposed_headers;
mod header_builder;
mod headers;
mod options;
mod origin;
mod origin_matcher;
mod origin_pattern;
mod policy;
mod request_origin;
mod result;
mod util;

pub use allowed_headers::{AllowedHeaderSet, AllowedHeaders};
pub use allowed_methods::{AllowedMethodSet, AllowedMethods};
pub use context::{RequestContext, RequestKind};
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use options::{CorsOptions, MAX_AGE_LIMIT, ValidationError};
pub use origin::{Origin, OriginMode};
pub use origin_matcher::OriginMatcher;
pub use origin_pattern::{
    HostSpec, MAX_HOST_LENGTH, OriginPattern, OriginPatternError, PortSpec, Scheme,
};
pub use policy::Policy;
pub use request_origin::{MAX_ORIGIN_LENGTH, RequestOrigin};
pub use result::CorsDecision;
