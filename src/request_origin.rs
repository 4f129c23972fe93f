use crate::origin_pattern::{MAX_HOST_LENGTH, Scheme};
use crate::util::lower_ascii;
use std::borrow::Cow;

/// Longest `Origin` value that is even looked at.
pub const MAX_ORIGIN_LENGTH: usize = 4_096;

/// A request's `Origin` header split into its tuple components.
///
/// Parsing is lenient about what it does not need and strict about what
/// could cause a false match: anything unexpected yields `None`, which the
/// engine treats as "not allowed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin<'a> {
    scheme: Scheme,
    host: Cow<'a, str>,
    port: Option<u16>,
}

impl<'a> RequestOrigin<'a> {
    pub fn parse(value: &'a str) -> Option<Self> {
        if value.len() > MAX_ORIGIN_LENGTH {
            return None;
        }

        let (scheme, authority) = value.split_once("://")?;
        let scheme = Scheme::parse(scheme)?;
        if authority.contains(['/', '?', '#', '@']) {
            return None;
        }

        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port)) => (host, Some(parse_port(port)?)),
            None => (authority, None),
        };

        if host.is_empty()
            || host.len() > MAX_HOST_LENGTH
            || host.starts_with('.')
            || host.ends_with('.')
            || host.contains("..")
        {
            return None;
        }

        Some(Self {
            scheme,
            host: lower_ascii(host),
            port,
        })
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Lowercase host.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

fn parse_port(value: &str) -> Option<u16> {
    if value.is_empty() || value.len() > 5 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok().filter(|port| *port != 0)
}

#[cfg(test)]
#[path = "request_origin_test.rs"]
mod request_origin_test;
