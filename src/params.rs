use std::collections::HashMap;
use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Named parameters extracted from a url, in pattern order.
///
/// Derefs to a slice of `(name, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params<'a> {
    buf: SmallVec<[(&'a str, &'a str); 8]>,
}

impl<'a> Params<'a> {
    /// Gets the value bound to `name`.
    ///
    /// If the pattern binds `name` more than once, the rightmost binding wins.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.buf
            .iter()
            .rev()
            .find_map(|&(k, v)| if name == k { Some(v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.buf.iter().any(|&(k, _)| k == name)
    }

    pub fn to_map(&self) -> HashMap<String, String> {
        self.buf
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }
}

impl<'a> Deref for Params<'a> {
    type Target = [(&'a str, &'a str)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl<'a> IntoIterator for Params<'a> {
    type Item = (&'a str, &'a str);
    type IntoIter = smallvec::IntoIter<[(&'a str, &'a str); 8]>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a> Params<'a> {
    pub(crate) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub(crate) fn push(&mut self, name: &'a str, value: &'a str) {
        self.buf.push((name, value))
    }
}
