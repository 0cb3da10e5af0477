use crate::constants::MAX_ORIGIN_LENGTH;
use indexmap::IndexSet;
use indexmap::set::Iter;

/// Ordered, deduplicated set of origins permitted to receive CORS headers.
///
/// Matching is exact string equality. Entries are trimmed and empty entries
/// dropped while building the list; the first occurrence of a duplicate wins.
/// A literal `*` and origins longer than [`MAX_ORIGIN_LENGTH`] are never
/// stored; options validation reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    origins: IndexSet<String>,
    wildcard: bool,
    oversized: Option<usize>,
}

impl AllowList {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = IndexSet::new();
        let mut wildcard = false;
        let mut oversized: Option<usize> = None;
        for origin in origins {
            let origin = origin.into();
            let trimmed = origin.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed == "*" {
                wildcard = true;
                continue;
            }
            if trimmed.len() > MAX_ORIGIN_LENGTH {
                oversized = oversized.max(Some(trimmed.len()));
                continue;
            }
            if trimmed.len() == origin.len() {
                set.insert(origin);
            } else {
                set.insert(trimmed.to_string());
            }
        }

        Self {
            origins: set,
            wildcard,
            oversized,
        }
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.origins.contains(origin)
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String> {
        self.origins.iter()
    }

    pub(crate) fn has_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Length of the longest entry dropped for exceeding the origin limit.
    pub(crate) fn oversized_origin(&self) -> Option<usize> {
        self.oversized
    }
}

impl<S: Into<String>> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a AllowList {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "allow_list_test.rs"]
mod allow_list_test;
