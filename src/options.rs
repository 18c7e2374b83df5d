//! Option sets and substring filtering
//!
//! An `OptionSet` is the ordered, immutable list of candidate strings a widget
//! is built with. Filtering is a plain case-insensitive substring match that
//! keeps the original order.

use std::rc::Rc;

/// Immutable ordered list of candidate strings
///
/// Cloning shares the underlying storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionSet {
    options: Rc<[String]>,
}

impl OptionSet {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.options
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }

    /// Options whose text contains `query`, ignoring case
    ///
    /// An empty query matches everything. No trimming or normalization is
    /// applied to either side.
    pub fn filter(&self, query: &str) -> Vec<&str> {
        if query.is_empty() {
            return self.iter().collect();
        }

        let needle = query.to_lowercase();
        self.iter()
            .filter(|option| option.to_lowercase().contains(&needle))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for OptionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod options_tests;
