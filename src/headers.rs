use crate::constants::header;
use indexmap::IndexMap;

/// Response headers produced by the engine, in emission order.
///
/// Lookups are case-insensitive. `Vary` values are merged rather than
/// overwritten.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderSet {
    headers: IndexMap<String, String>,
}

impl HeaderSet {
    pub(crate) fn new() -> Self {
        Self::with_estimate(4)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub(crate) fn push(&mut self, name: &str, value: String) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
            return;
        }

        match self
            .headers
            .keys()
            .position(|key| key.eq_ignore_ascii_case(name))
        {
            Some(index) => {
                if let Some((_, existing)) = self.headers.get_index_mut(index) {
                    *existing = value;
                }
            }
            None => {
                self.headers.insert(name.to_string(), value);
            }
        }
    }

    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let incoming: String = value.into();
        let incoming = incoming.trim();
        if incoming.is_empty() {
            return;
        }

        match self.headers.get_mut(header::VARY) {
            Some(existing) => {
                let present = existing
                    .split(',')
                    .map(str::trim)
                    .any(|entry| entry.eq_ignore_ascii_case(incoming));
                if !present {
                    existing.push_str(", ");
                    existing.push_str(incoming);
                }
            }
            None => {
                self.headers
                    .insert(header::VARY.to_string(), incoming.to_string());
            }
        }
    }

    pub(crate) fn extend(&mut self, other: HeaderSet) {
        for (name, value) in other.headers {
            self.push(&name, value);
        }
    }
}

impl IntoIterator for HeaderSet {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.into_iter()
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
