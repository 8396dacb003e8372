use super::handler::Handler;
use super::matched::Match;
use super::{Matcher, Route};

use crate::pattern::{compile, CompileError, CompiledRoute};

use std::collections::HashMap;
use std::iter::FromIterator;

use once_cell::sync::OnceCell;
use tracing::trace;

impl<T> Matcher<T> {
    pub fn new<I, P>(routes: I) -> Self
    where
        I: IntoIterator<Item = (P, T)>,
        P: AsRef<str>,
    {
        let mut matcher = Self::empty();
        matcher.extend(routes);
        matcher
    }

    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn clear(&mut self) {
        self.routes.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Patterns in priority order.
    pub fn patterns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.routes.iter().map(|r| &*r.pattern)
    }

    /// Appends a route without compiling its pattern.
    ///
    /// Inserting a pattern that is already present replaces its value and
    /// keeps its position.
    pub fn insert(&mut self, pattern: &str, data: T) -> &mut Self {
        self.insert_route(pattern, data, None);
        self
    }

    /// Like [`insert`](Self::insert), but compiles the pattern first.
    pub fn try_insert(&mut self, pattern: &str, data: T) -> Result<&mut Self, CompileError> {
        let compiled = compile(pattern)?;
        self.insert_route(pattern, data, Some(compiled));
        Ok(self)
    }

    /// Compiles every pattern that has not been compiled yet.
    ///
    /// Stops at the first pattern that fails.
    pub fn compile_all(&self) -> Result<(), CompileError> {
        for route in &self.routes {
            route.compiled()?;
        }
        Ok(())
    }

    /// Finds the first route whose pattern matches `url`.
    ///
    /// Returns an error if a pattern reached during the scan fails to compile.
    pub fn find<'s, 'p>(&'s self, url: &'p str) -> Result<Option<Match<'p, T>>, CompileError>
    where
        's: 'p,
    {
        for route in &self.routes {
            let compiled = route.compiled()?;
            if let Some((params, query)) = compiled.extract(url) {
                trace!(%url, pattern = %route.pattern, "route matched");
                return Ok(Some(Match {
                    value: &route.data,
                    url,
                    pattern: &route.pattern,
                    params,
                    query,
                }));
            }
        }
        trace!(%url, "no route matched");
        Ok(None)
    }

    /// Finds the first matching route and calls its value with `ctx` and the
    /// extracted params.
    pub fn dispatch<C>(&self, url: &str, ctx: C) -> Result<Option<T::Output>, CompileError>
    where
        T: Handler<C>,
    {
        let matched = match self.find(url)? {
            Some(m) => m,
            None => return Ok(None),
        };
        let handler = matched.value();
        Ok(Some(handler.call(ctx, matched.into_params())))
    }
}

impl<T> Matcher<T> {
    fn insert_route(&mut self, pattern: &str, data: T, compiled: Option<CompiledRoute>) {
        if let Some(&i) = self.index.get(pattern) {
            let route = &mut self.routes[i];
            route.data = data;
            if let Some(c) = compiled {
                route.compiled = OnceCell::with_value(c);
            }
            return;
        }

        let mut route = Route::new(pattern, data);
        if let Some(c) = compiled {
            route.compiled = OnceCell::with_value(c);
        }
        self.index.insert(pattern.into(), self.routes.len());
        self.routes.push(route);
    }
}

impl<T> Default for Matcher<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, P: AsRef<str>> Extend<(P, T)> for Matcher<T> {
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (pattern, data) in iter {
            self.insert(pattern.as_ref(), data);
        }
    }
}

impl<T, P: AsRef<str>> FromIterator<(P, T)> for Matcher<T> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T, P: AsRef<str>> From<Vec<(P, T)>> for Matcher<T> {
    fn from(routes: Vec<(P, T)>) -> Self {
        Self::new(routes)
    }
}
