use crate::options::ValidationError;
use crate::util::{is_http_token, lower_ascii, split_header_list};
use indexmap::IndexSet;
use once_cell::sync::Lazy;

/// Request headers a script may not set, so allowing them is meaningless.
static FORBIDDEN_REQUEST_HEADERS: Lazy<IndexSet<&'static str>> = Lazy::new(|| {
    [
        "accept-charset",
        "accept-encoding",
        "access-control-request-headers",
        "access-control-request-method",
        "access-control-request-private-network",
        "connection",
        "content-length",
        "cookie",
        "cookie2",
        "date",
        "dnt",
        "expect",
        "host",
        "keep-alive",
        "origin",
        "referer",
        "set-cookie",
        "te",
        "trailer",
        "transfer-encoding",
        "upgrade",
        "via",
    ]
    .into_iter()
    .collect()
});

const FORBIDDEN_REQUEST_HEADER_PREFIXES: [&str; 2] = ["proxy-", "sec-"];

/// Configuration for the request headers a preflight may ask for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedHeaders {
    /// No custom request headers.
    #[default]
    None,
    /// An explicit list, compared case-insensitively.
    List(Vec<String>),
    /// Every header; the requested list is echoed back.
    Any,
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub(crate) fn compile(&self) -> Result<AllowedHeaderSet, ValidationError> {
        let values = match self {
            Self::None => return Ok(AllowedHeaderSet::None),
            Self::Any => return Ok(AllowedHeaderSet::Any),
            Self::List(values) if values.is_empty() => {
                return Err(ValidationError::EmptyAllowedHeaders);
            }
            Self::List(values) => values,
        };

        let mut names = IndexSet::with_capacity(values.len());
        for value in values {
            let value = value.as_str();
            if value == "*" {
                return Err(ValidationError::AllowedHeadersListCannotContainWildcard);
            }
            if !is_http_token(value) {
                return Err(ValidationError::InvalidHeaderName(value.to_string()));
            }

            let name = value.to_ascii_lowercase();
            if is_forbidden_request_header(&name) {
                return Err(ValidationError::ForbiddenHeaderName(value.to_string()));
            }
            names.insert(name);
        }

        let header_value = names.iter().map(String::as_str).collect::<Vec<_>>().join(",");
        Ok(AllowedHeaderSet::Names {
            names,
            header_value,
        })
    }
}

fn is_forbidden_request_header(lowercase_name: &str) -> bool {
    FORBIDDEN_REQUEST_HEADERS.contains(lowercase_name)
        || FORBIDDEN_REQUEST_HEADER_PREFIXES
            .iter()
            .any(|prefix| lowercase_name.starts_with(prefix))
}

/// Validated, lowercase form of [`AllowedHeaders`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedHeaderSet {
    None,
    Any,
    Names {
        names: IndexSet<String>,
        header_value: String,
    },
}

impl AllowedHeaderSet {
    /// Checks a comma-separated `Access-Control-Request-Headers` value.
    ///
    /// Whitespace, empty members and repeated names do not change the verdict.
    pub fn allows_headers(&self, requested: &str) -> bool {
        match self {
            Self::Any => true,
            Self::None => split_header_list(requested).next().is_none(),
            Self::Names { names, .. } => split_header_list(requested)
                .all(|name| names.contains(&*lower_ascii(name))),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Value for `Access-Control-Allow-Headers`, given what the preflight asked for.
    pub(crate) fn header_value(&self, requested: Option<&str>) -> Option<String> {
        match self {
            Self::None => None,
            Self::Names { header_value, .. } => Some(header_value.clone()),
            Self::Any => requested
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
