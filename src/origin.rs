use crate::options::ValidationError;
use crate::origin_matcher::OriginMatcher;
use crate::origin_pattern::OriginPattern;

/// Which origins may access the resource.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Origin {
    /// Every origin. Cannot be combined with credentials.
    #[default]
    Any,
    /// An allow-list of `scheme://host[:port]` entries, where the host may
    /// start with a `*.` wildcard label and the port may be `*`.
    List(Vec<String>),
}

/// Compiled form of [`Origin`].
#[derive(Clone, Debug)]
pub enum OriginMode {
    Any,
    Explicit(OriginMatcher),
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::List(vec![value.into()])
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub(crate) fn compile(&self) -> Result<OriginMode, ValidationError> {
        let values = match self {
            Self::Any => return Ok(OriginMode::Any),
            Self::List(values) if values.is_empty() => return Err(ValidationError::EmptyOrigins),
            Self::List(values) => values,
        };

        let mut matcher = OriginMatcher::new();
        for value in values {
            let value = value.as_str();
            if value == "*" {
                return Err(ValidationError::WildcardInOriginList);
            }

            let pattern =
                OriginPattern::parse(value).map_err(|source| ValidationError::InvalidOrigin {
                    origin: value.to_string(),
                    source,
                })?;
            if !matcher.insert(&pattern) {
                return Err(ValidationError::DuplicateOrigin(pattern.to_string()));
            }
        }

        Ok(OriginMode::Explicit(matcher))
    }
}

impl OriginMode {
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
