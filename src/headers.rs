use crate::constants::header;
use indexmap::IndexMap;

/// Response headers in emission order.
pub type Headers = IndexMap<&'static str, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push<S: Into<String>>(&mut self, name: &'static str, value: S) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name, value.into());
        }
    }

    /// Appends to `Vary`, skipping names already listed (case-insensitively).
    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let value = value.into();
        let incoming = value.trim();
        if incoming.is_empty() {
            return;
        }

        match self.headers.get_mut(header::VARY) {
            Some(existing) => {
                let present = existing
                    .split(',')
                    .any(|entry| entry.trim().eq_ignore_ascii_case(incoming));
                if !present {
                    existing.push_str(", ");
                    existing.push_str(incoming);
                }
            }
            None => {
                self.headers.insert(header::VARY, incoming.to_string());
            }
        }
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(name, value);
        }
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
