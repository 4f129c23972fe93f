//! Indexed origin allow-list.
//!
//! Patterns are split into two tiers per scheme:
//!
//! * an exact tier, a hash map from host to the ports allowed for it;
//! * a wildcard tier, a trie over the *reversed* labels of each wildcard
//!   base (`*.api.example.com` lives under `com` → `example` → `api`).
//!
//! A lookup costs one hash probe for the exact tier plus at most one probe
//! per label of the candidate host for the wildcard tier, so it is bounded
//! by the host length (253 bytes) rather than by the number of patterns.

use crate::origin_pattern::{HostSpec, OriginPattern, PortSpec, Scheme};
use std::collections::HashMap;

/// Ports accepted for one host (or one wildcard base).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct PortRule {
    any: bool,
    ports: Vec<u16>,
}

impl PortRule {
    fn accepts(&self, port: u16) -> bool {
        self.any || self.ports.contains(&port)
    }

    /// Returns `false` when the port was already present.
    fn insert(&mut self, spec: PortSpec, scheme: Scheme) -> bool {
        match spec.resolve(scheme) {
            None => !std::mem::replace(&mut self.any, true),
            Some(port) if self.ports.contains(&port) => false,
            Some(port) => {
                self.ports.push(port);
                true
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
struct WildcardNode {
    children: HashMap<Box<str>, WildcardNode>,
    rule: Option<PortRule>,
}

impl WildcardNode {
    fn rule_for(&mut self, base: &str) -> &mut PortRule {
        let mut node = self;
        for label in base.rsplit('.') {
            node = node.children.entry(label.into()).or_default();
        }
        node.rule.get_or_insert_with(PortRule::default)
    }

    fn matches(&self, host: &str, port: u16) -> bool {
        let mut node = self;
        let mut remaining = host;

        loop {
            let (rest, label) = match remaining.rsplit_once('.') {
                Some((rest, label)) => (Some(rest), label),
                None => (None, remaining),
            };

            match node.children.get(label) {
                Some(child) => node = child,
                None => return false,
            }

            // A wildcard needs at least one label left of its base.
            let Some(rest) = rest else {
                return false;
            };
            if node.rule.as_ref().is_some_and(|rule| rule.accepts(port)) {
                return true;
            }
            remaining = rest;
        }
    }
}

#[derive(Debug, Clone, Default)]
struct SchemeIndex {
    exact: HashMap<Box<str>, PortRule>,
    wildcard: WildcardNode,
    len: usize,
}

/// Two-tier index answering "is this origin allowed?" in time independent of
/// the number of configured patterns.
#[derive(Debug, Clone, Default)]
pub struct OriginMatcher {
    schemes: [SchemeIndex; 2],
    exact_len: usize,
    wildcard_len: usize,
}

impl OriginMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pattern. Returns `false`, leaving the index unchanged, when the
    /// same scheme, host and port were already present.
    pub fn insert(&mut self, pattern: &OriginPattern) -> bool {
        let scheme = pattern.scheme();
        let index = &mut self.schemes[scheme.index()];

        let inserted = match pattern.host() {
            HostSpec::Exact(host) => index
                .exact
                .entry(host.as_str().into())
                .or_default()
                .insert(pattern.port(), scheme),
            HostSpec::Wildcard(base) => index.wildcard.rule_for(base).insert(pattern.port(), scheme),
        };

        if inserted {
            index.len += 1;
            if pattern.is_wildcard() {
                self.wildcard_len += 1;
            } else {
                self.exact_len += 1;
            }
        }
        inserted
    }

    /// `host` must be lowercase; a missing `port` means the scheme default.
    pub fn matches(&self, scheme: Scheme, host: &str, port: Option<u16>) -> bool {
        let index = &self.schemes[scheme.index()];
        let port = port.unwrap_or_else(|| scheme.default_port());

        if index
            .exact
            .get(host)
            .is_some_and(|rule| rule.accepts(port))
        {
            return true;
        }

        index.wildcard.matches(host, port)
    }

    pub fn len(&self) -> usize {
        self.exact_len + self.wildcard_len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn exact_len(&self) -> usize {
        self.exact_len
    }

    pub fn wildcard_len(&self) -> usize {
        self.wildcard_len
    }

    /// Number of patterns registered for `scheme`.
    pub fn scheme_len(&self, scheme: Scheme) -> usize {
        self.schemes[scheme.index()].len
    }
}

impl<'a> FromIterator<&'a OriginPattern> for OriginMatcher {
    fn from_iter<I: IntoIterator<Item = &'a OriginPattern>>(patterns: I) -> Self {
        let mut matcher = Self::new();
        for pattern in patterns {
            matcher.insert(pattern);
        }
        matcher
    }
}

#[cfg(test)]
#[path = "origin_matcher_test.rs"]
mod origin_matcher_test;
