use crate::constants::method;
use crate::options::ValidationError;
use crate::util::is_http_token;
use indexmap::IndexSet;
use std::borrow::Cow;

/// Methods whose case is normalized by the Fetch standard.
const NORMALIZED_METHODS: [&str; 6] = [
    method::DELETE,
    method::GET,
    method::HEAD,
    method::OPTIONS,
    method::POST,
    method::PUT,
];

const FORBIDDEN_METHODS: [&str; 3] = [method::CONNECT, method::TRACE, method::TRACK];

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    /// Any method; the requested method is echoed back.
    Any,
    /// An explicit, non-empty list.
    List(Vec<String>),
}

impl AllowedMethods {
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

    pub(crate) fn compile(&self) -> Result<AllowedMethodSet, ValidationError> {
        let values = match self {
            Self::Any => return Ok(AllowedMethodSet::Any),
            Self::List(values) if values.is_empty() => return Err(ValidationError::EmptyMethods),
            Self::List(values) => values,
        };

        let mut methods = IndexSet::with_capacity(values.len());
        for value in values {
            let value = value.as_str();
            if !is_http_token(value) {
                return Err(ValidationError::InvalidMethod(value.to_string()));
            }
            if FORBIDDEN_METHODS
                .iter()
                .any(|forbidden| forbidden.eq_ignore_ascii_case(value))
            {
                return Err(ValidationError::ForbiddenMethod(value.to_string()));
            }
            methods.insert(normalize_method(value).into_owned());
        }

        let header_value = methods.iter().map(String::as_str).collect::<Vec<_>>().join(",");
        Ok(AllowedMethodSet::Methods {
            methods,
            header_value,
        })
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([method::GET, method::POST, method::HEAD])
    }
}

/// Uppercases the Fetch-normalized methods; other methods keep their case.
///
/// Applied to configured methods only. Requested methods are compared as sent.
pub(crate) fn normalize_method(value: &str) -> Cow<'_, str> {
    NORMALIZED_METHODS
        .iter()
        .find(|known| known.eq_ignore_ascii_case(value))
        .map_or(Cow::Borrowed(value), |known| Cow::Borrowed(*known))
}

/// Validated form of [`AllowedMethods`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedMethodSet {
    Any,
    Methods {
        methods: IndexSet<String>,
        header_value: String,
    },
}

impl AllowedMethodSet {
    pub fn allows_method(&self, requested: &str) -> bool {
        match self {
            Self::Any => is_http_token(requested),
            Self::Methods { methods, .. } => methods.contains(requested),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Value for `Access-Control-Allow-Methods`, given the requested method.
    pub(crate) fn header_value(&self, requested: &str) -> String {
        match self {
            Self::Methods { header_value, .. } => header_value.clone(),
            Self::Any => requested.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
