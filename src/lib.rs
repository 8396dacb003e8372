//! Compiles path patterns such as `/users/:id`, `/:first(/:second)` or
//! `/files/*` into anchored matchers, and dispatches urls to the first
//! matching pattern of an ordered route table.
//!
//! ```
//! use nuclear_matcher::Matcher;
//!
//! let matcher: Matcher<&str> = vec![
//!     ("/users/:id", "user"),
//!     ("/files/*", "file"),
//! ]
//! .into();
//!
//! let m = matcher.find("/users/47").unwrap().unwrap();
//! assert_eq!(*m.value(), "user");
//! assert_eq!(m.params().get("id"), Some("47"));
//!
//! let m = matcher.find("/files/a/b.txt").unwrap().unwrap();
//! assert_eq!(m.params().get("path"), Some("a/b.txt"));
//!
//! assert!(matcher.find("/nowhere").unwrap().is_none());
//! ```

#![deny(unsafe_code)]

mod matcher;
mod params;
pub mod pattern;

pub use crate::matcher::{Handler, Match, Matcher};
pub use crate::params::Params;
pub use crate::pattern::{compile, CompileError, CompiledRoute};

#[cfg(feature = "http-matcher")]
mod http_matcher;

#[cfg(feature = "http-matcher")]
pub use crate::http_matcher::{HttpMatcher, Method};
