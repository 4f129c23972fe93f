//! `Deserialize` support for the configuration enums.
//!
//! Each accepts either the string `"*"` or a list of strings. A single
//! string other than `"*"` is read as a one-element list. A `"*"` inside a
//! list is kept so that validation reports it.

use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::Origin;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use std::fmt;

enum AnyOrList {
    Any,
    List(Vec<String>),
}

struct AnyOrListVisitor;

impl<'de> Visitor<'de> for AnyOrListVisitor {
    type Value = AnyOrList;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("\"*\" or an array of strings")
    }

    fn visit_str<E>(self, value: &str) -> Result<AnyOrList, E>
    where
        E: de::Error,
    {
        if value == "*" {
            Ok(AnyOrList::Any)
        } else {
            Ok(AnyOrList::List(vec![value.to_string()]))
        }
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<AnyOrList, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element::<String>()? {
            values.push(value);
        }
        Ok(AnyOrList::List(values))
    }
}

impl<'de> Deserialize<'de> for AnyOrList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AnyOrListVisitor)
    }
}

impl<'de> Deserialize<'de> for Origin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match AnyOrList::deserialize(deserializer)? {
            AnyOrList::Any => Self::Any,
            AnyOrList::List(values) => Self::List(values),
        })
    }
}

impl<'de> Deserialize<'de> for AllowedHeaders {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match AnyOrList::deserialize(deserializer)? {
            AnyOrList::Any => Self::Any,
            AnyOrList::List(values) => Self::List(values),
        })
    }
}

impl<'de> Deserialize<'de> for AllowedMethods {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match AnyOrList::deserialize(deserializer)? {
            AnyOrList::Any => Self::Any,
            AnyOrList::List(values) => Self::List(values),
        })
    }
}

impl<'de> Deserialize<'de> for ExposedHeaders {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // "*" is not a valid exposed header; keep it for validation to report.
        Ok(match AnyOrList::deserialize(deserializer)? {
            AnyOrList::Any => Self::List(vec!["*".to_string()]),
            AnyOrList::List(values) => Self::List(values),
        })
    }
}

#[cfg(test)]
#[path = "de_test.rs"]
mod de_test;
