use std::fmt;
use thiserror::Error;

/// Maximum length of a DNS host name.
pub const MAX_HOST_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;
const SCHEME_SEPARATOR: &str = "://";
const WILDCARD_PREFIX: &str = "*.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("https") {
            Some(Self::Https)
        } else if value.eq_ignore_ascii_case("http") {
            Some(Self::Http)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Port implied when an origin carries none.
    pub fn default_port(self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Http => 0,
            Self::Https => 1,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host part of a configured origin. Hosts are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostSpec {
    /// A fully specified host such as `example.com`.
    Exact(String),
    /// `*.base`: the base domain, without the leading `*.`.
    Wildcard(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortSpec {
    /// The scheme's implicit port.
    Default,
    /// A literal port that differs from the scheme default.
    Explicit(u16),
    /// `:*`, any port including none.
    Any,
}

impl PortSpec {
    /// Concrete port this stands for, or `None` for [`PortSpec::Any`].
    pub fn resolve(self, scheme: Scheme) -> Option<u16> {
        match self {
            Self::Default => Some(scheme.default_port()),
            Self::Explicit(port) => Some(port),
            Self::Any => None,
        }
    }

    pub fn accepts(self, scheme: Scheme, port: Option<u16>) -> bool {
        match self.resolve(scheme) {
            None => true,
            Some(expected) => port.unwrap_or_else(|| scheme.default_port()) == expected,
        }
    }
}

/// Reasons an origin string cannot be turned into an [`OriginPattern`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OriginPatternError {
    #[error("missing \"://\" between scheme and host")]
    MissingSchemeSeparator,
    #[error("unsupported scheme {0:?}; only http and https are allowed")]
    UnsupportedScheme(String),
    #[error("origins must not contain a path, query or fragment")]
    UnexpectedPath,
    #[error("origins must not contain user information")]
    UserInfo,
    #[error("host is empty")]
    EmptyHost,
    #[error("host is {length} characters long; the maximum is {max}")]
    HostTooLong { length: usize, max: usize },
    #[error("invalid host label {0:?}")]
    InvalidLabel(String),
    #[error("a wildcard may only appear as the leftmost label, written \"*.\"")]
    MisplacedWildcard,
    #[error("wildcard base {0:?} must contain at least two labels")]
    WildcardBaseTooShort(String),
    #[error("invalid port {0:?}")]
    InvalidPort(String),
}

/// One normalized entry of an origin allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OriginPattern {
    scheme: Scheme,
    host: HostSpec,
    port: PortSpec,
}

impl OriginPattern {
    /// Parses `scheme://host[:port]` or `scheme://*.base[:port]`, where the
    /// port may be `*`.
    pub fn parse(input: &str) -> Result<Self, OriginPatternError> {
        let (scheme, authority) = input
            .split_once(SCHEME_SEPARATOR)
            .ok_or(OriginPatternError::MissingSchemeSeparator)?;
        let scheme = Scheme::parse(scheme)
            .ok_or_else(|| OriginPatternError::UnsupportedScheme(scheme.to_string()))?;

        if authority.contains(['/', '?', '#']) {
            return Err(OriginPatternError::UnexpectedPath);
        }
        if authority.contains('@') {
            return Err(OriginPatternError::UserInfo);
        }

        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port)) => (host, parse_port_spec(port, scheme)?),
            None => (authority, PortSpec::Default),
        };

        let host = host.to_ascii_lowercase();
        if host.is_empty() {
            return Err(OriginPatternError::EmptyHost);
        }
        if host.len() > MAX_HOST_LENGTH {
            return Err(OriginPatternError::HostTooLong {
                length: host.len(),
                max: MAX_HOST_LENGTH,
            });
        }

        let host = match host.strip_prefix(WILDCARD_PREFIX) {
            Some(base) => {
                validate_host(base)?;
                if !base.contains('.') {
                    return Err(OriginPatternError::WildcardBaseTooShort(base.to_string()));
                }
                HostSpec::Wildcard(base.to_string())
            }
            None => {
                validate_host(&host)?;
                HostSpec::Exact(host)
            }
        };

        Ok(Self { scheme, host, port })
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn host(&self) -> &HostSpec {
        &self.host
    }

    pub fn port(&self) -> PortSpec {
        self.port
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self.host, HostSpec::Wildcard(_))
    }

    /// Direct comparison against one candidate origin.
    ///
    /// `host` must already be lowercase. The indexed matcher produces the
    /// same answers without visiting every pattern.
    pub fn matches(&self, scheme: Scheme, host: &str, port: Option<u16>) -> bool {
        if self.scheme != scheme || !self.port.accepts(scheme, port) {
            return false;
        }

        match &self.host {
            HostSpec::Exact(expected) => expected == host,
            HostSpec::Wildcard(base) => host
                .strip_suffix(base.as_str())
                .and_then(|prefix| prefix.strip_suffix('.'))
                .is_some_and(|prefix| !prefix.is_empty()),
        }
    }
}

impl fmt::Display for OriginPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://", self.scheme)?;
        match &self.host {
            HostSpec::Exact(host) => f.write_str(host)?,
            HostSpec::Wildcard(base) => write!(f, "{WILDCARD_PREFIX}{base}")?,
        }
        match self.port {
            PortSpec::Default => Ok(()),
            PortSpec::Explicit(port) => write!(f, ":{port}"),
            PortSpec::Any => f.write_str(":*"),
        }
    }
}

fn parse_port_spec(value: &str, scheme: Scheme) -> Result<PortSpec, OriginPatternError> {
    if value == "*" {
        return Ok(PortSpec::Any);
    }

    let invalid = || OriginPatternError::InvalidPort(value.to_string());
    if value.is_empty() || value.starts_with('0') || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let port = value.parse::<u16>().map_err(|_| invalid())?;
    if port == scheme.default_port() {
        Ok(PortSpec::Default)
    } else {
        Ok(PortSpec::Explicit(port))
    }
}

/// Checks DNS label syntax for a lowercase host without a wildcard.
pub(crate) fn validate_host(host: &str) -> Result<(), OriginPatternError> {
    if host.is_empty() {
        return Err(OriginPatternError::EmptyHost);
    }
    if host.contains('*') {
        return Err(OriginPatternError::MisplacedWildcard);
    }

    for label in host.split('.') {
        let valid = !label.is_empty()
            && label.len() <= MAX_LABEL_LENGTH
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .bytes()
                .all(|byte| byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'-');
        if !valid {
            return Err(OriginPatternError::InvalidLabel(label.to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "origin_pattern_test.rs"]
mod origin_pattern_test;
