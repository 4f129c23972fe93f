use crate::options::ValidationError;
use crate::util::is_http_token;
use indexmap::IndexMap;

/// Configuration mirror of the `Access-Control-Expose-Headers` response header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExposedHeaders {
    #[default]
    None,
    List(Vec<String>),
}

impl ExposedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Validates the names and serializes them into a header-ready value.
    ///
    /// Names are deduplicated case-insensitively, keeping the first
    /// spelling. An empty list yields `None`.
    pub(crate) fn compile(&self) -> Result<Option<String>, ValidationError> {
        let values = match self {
            Self::None => return Ok(None),
            Self::List(values) => values,
        };

        let mut names: IndexMap<String, &str> = IndexMap::with_capacity(values.len());
        for value in values {
            let value = value.as_str();
            if value == "*" {
                return Err(ValidationError::ExposedHeadersCannotContainWildcard);
            }
            if !is_http_token(value) {
                return Err(ValidationError::InvalidExposedHeader(value.to_string()));
            }
            names.entry(value.to_ascii_lowercase()).or_insert(value);
        }

        if names.is_empty() {
            return Ok(None);
        }
        Ok(Some(names.values().copied().collect::<Vec<_>>().join(",")))
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
