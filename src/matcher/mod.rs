mod handler;
mod imp;
mod matched;

pub use self::handler::Handler;
pub use self::matched::Match;

use crate::pattern::{compile, CompileError, CompiledRoute};

use std::collections::HashMap;

use once_cell::sync::OnceCell;

/// An ordered route table.
///
/// Patterns are tried in insertion order and the first one that matches wins.
/// Each pattern is compiled the first time a lookup reaches it.
#[derive(Debug, Clone)]
pub struct Matcher<T> {
    routes: Vec<Route<T>>,
    index: HashMap<Box<str>, usize>,
}

#[derive(Debug, Clone)]
struct Route<T> {
    pattern: Box<str>,
    data: T,
    compiled: OnceCell<CompiledRoute>,
}

impl<T> Route<T> {
    fn new(pattern: &str, data: T) -> Self {
        Self {
            pattern: pattern.into(),
            data,
            compiled: OnceCell::new(),
        }
    }

    fn compiled(&self) -> Result<&CompiledRoute, CompileError> {
        self.compiled.get_or_try_init(|| compile(&self.pattern))
    }
}
