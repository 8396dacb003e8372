use crate::params::Params;

/// A successful lookup.
#[derive(Debug)]
pub struct Match<'a, T> {
    pub(super) value: &'a T,
    pub(super) url: &'a str,
    pub(super) pattern: &'a str,
    pub(super) params: Params<'a>,
    pub(super) query: Option<&'a str>,
}

impl<'a, T> Match<'a, T> {
    /// The value associated with the winning pattern.
    pub fn value(&self) -> &'a T {
        self.value
    }

    /// The url passed to the lookup, unchanged.
    pub fn url(&self) -> &'a str {
        self.url
    }

    /// The winning pattern, as it was inserted.
    pub fn pattern(&self) -> &'a str {
        self.pattern
    }

    pub fn params(&self) -> &Params<'a> {
        &self.params
    }

    /// The query string that trailed the matched path, without the leading `?`.
    pub fn query(&self) -> Option<&'a str> {
        self.query
    }

    pub fn into_params(self) -> Params<'a> {
        self.params
    }
}
