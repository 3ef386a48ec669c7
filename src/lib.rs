pub mod errors;
pub mod natural; // reusable digit-run-aware comparison, options-free
pub mod options;
mod compare;
mod pipeline;
mod roman;
mod spell;

use std::cmp::Ordering;

pub use errors::{Result, SpellError};
pub use options::{NumberSort, Options, SortMode};
pub use spell::spell;

/// An `Options` value bound to the pipeline: compute keys, compare, sort.
/// Useful when one configuration is applied to many strings.
pub struct Alphabetizer {
    options: Options,
}

impl Alphabetizer {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// The canonical sort key for `input`. Keys are only comparable to
    /// keys computed under the same options.
    pub fn key(&self, input: &str) -> String {
        pipeline::normalize(&self.options, input)
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        compare::compare_keys(&self.options, &self.key(a), &self.key(b))
    }

    /// Stable decorate-sort-undecorate: each key is computed exactly once.
    pub fn sort<I, S>(&self, items: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut decorated: Vec<(String, String)> = items
            .into_iter()
            .map(|item| {
                let item = item.into();
                let key = self.key(&item);
                (item, key)
            })
            .collect();
        decorated.sort_by(|(_, ka), (_, kb)| compare::compare_keys(&self.options, ka, kb));
        decorated.into_iter().map(|(item, _)| item).collect()
    }
}

/// Convenience: compute the canonical key for one string.
pub fn normalize(options: &Options, input: &str) -> String {
    pipeline::normalize(options, input)
}

/// Convenience: pairwise comparison of two raw strings.
pub fn compare(options: &Options, a: &str, b: &str) -> Ordering {
    Alphabetizer::new(options.clone()).compare(a, b)
}

/// Convenience: sort a batch of strings, preserving input order on ties.
pub fn sort_all<I, S>(options: &Options, items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Alphabetizer::new(options.clone()).sort(items)
}
