#![forbid(unsafe_code)]

mod matcher_macro;

use crate::matcher::{Handler, Match, Matcher};
use crate::pattern::CompileError;

use std::collections::HashMap;

pub use http::Method;

/// One [`Matcher`] per request method.
#[derive(Debug, Clone)]
pub struct HttpMatcher<T> {
    method_map: HashMap<Method, Matcher<T>>,
}

impl<T> HttpMatcher<T> {
    pub fn new() -> Self {
        Self {
            method_map: HashMap::new(),
        }
    }

    pub fn find<'s, 'p>(
        &'s self,
        method: &Method,
        url: &'p str,
    ) -> Result<Option<Match<'p, T>>, CompileError>
    where
        's: 'p,
    {
        match self.method_map.get(method) {
            Some(m) => m.find(url),
            None => Ok(None),
        }
    }

    pub fn dispatch<C>(
        &self,
        method: &Method,
        url: &str,
        ctx: C,
    ) -> Result<Option<T::Output>, CompileError>
    where
        T: Handler<C>,
    {
        match self.method_map.get(method) {
            Some(m) => m.dispatch(url, ctx),
            None => Ok(None),
        }
    }

    pub fn insert(&mut self, method: Method, pattern: &str, data: T) -> &mut Self {
        self.access_matcher(method).insert(pattern, data);
        self
    }

    pub fn try_insert(
        &mut self,
        method: Method,
        pattern: &str,
        data: T,
    ) -> Result<&mut Self, CompileError> {
        self.access_matcher(method).try_insert(pattern, data)?;
        Ok(self)
    }

    pub fn compile_all(&self) -> Result<(), CompileError> {
        self.method_map.values().try_for_each(Matcher::compile_all)
    }

    pub fn matcher(&self, method: &Method) -> Option<&Matcher<T>> {
        self.method_map.get(method)
    }
}

impl<T> HttpMatcher<T> {
    fn access_matcher(&mut self, method: Method) -> &mut Matcher<T> {
        self.method_map.entry(method).or_insert_with(Matcher::empty)
    }
}

impl<T> Default for HttpMatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}
