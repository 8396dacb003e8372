//! Pattern compiler.
//!
//! A pattern is a path with a few dynamic tokens:
//!
//! | token     | matches                                              |
//! |-----------|------------------------------------------------------|
//! | `:name`   | one or more chars except `/` and `?`                 |
//! | `(...)`   | the enclosed pattern, or nothing                     |
//! | `*`       | one or more of any char, bound to `path`             |
//! | otherwise | itself, verbatim                                     |
//!
//! A trailing query string (`?...`) in the matched url is always accepted.

mod error;
mod translate;

pub use self::error::CompileError;

use self::translate::{translate, Translation};
use crate::params::Params;

use std::fmt;

use regex::Regex;
use tracing::trace;

/// The parameter name bound by a wildcard.
pub const WILDCARD_PARAM: &str = translate::WILDCARD_NAME;

/// An anchored matching rule derived from a pattern.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    pattern: Box<str>,
    rule: Regex,
    names: Box<[Box<str>]>,
}

/// Compiles `pattern` into an anchored rule.
///
/// Fails if the parentheses are unbalanced, if the pattern holds more than one
/// wildcard, or if the generated rule is rejected by the regex engine.
pub fn compile(pattern: &str) -> Result<CompiledRoute, CompileError> {
    let Translation { rule, names } = translate(pattern).map_err(|e| {
        trace!(%pattern, error = %e, "failed to compile pattern");
        e
    })?;

    let rule = match Regex::new(&rule) {
        Ok(r) => r,
        Err(source) => {
            trace!(%pattern, %rule, error = %source, "failed to build matching rule");
            return Err(CompileError::Regex {
                pattern: pattern.into(),
                source,
            });
        }
    };

    trace!(%pattern, rule = rule.as_str(), params = names.len(), "compiled pattern");

    Ok(CompiledRoute {
        pattern: pattern.into(),
        rule,
        names: names.into_boxed_slice(),
    })
}

impl CompiledRoute {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The generated regular expression.
    pub fn as_str(&self) -> &str {
        self.rule.as_str()
    }

    /// Parameter names, one per capturing group, in pattern order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(|n| &**n)
    }

    pub fn is_match(&self, url: &str) -> bool {
        self.rule.is_match(url)
    }

    /// Extracts the parameters bound by `url`, or `None` if it does not match.
    pub fn captures<'a>(&'a self, url: &'a str) -> Option<Params<'a>> {
        self.extract(url).map(|(params, _)| params)
    }

    pub(crate) fn extract<'a>(&'a self, url: &'a str) -> Option<(Params<'a>, Option<&'a str>)> {
        let caps = self.rule.captures(url)?;

        let mut params = Params::new();
        for (i, name) in self.names.iter().enumerate() {
            // groups inside an absent optional group do not participate
            if let Some(m) = caps.get(i + 1) {
                if !m.as_str().is_empty() {
                    params.push(name, m.as_str());
                }
            }
        }

        let query = caps.get(self.names.len() + 1).map(|m| m.as_str());

        Some((params, query))
    }
}

impl fmt::Display for CompiledRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule.as_str())
    }
}
