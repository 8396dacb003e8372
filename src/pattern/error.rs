#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum CompileError {
    #[error("unbalanced parentheses: pattern = {pattern:?}")]
    UnbalancedGroup { pattern: Box<str> },

    #[error("a pattern can not hold more than one wildcard: pattern = {pattern:?}")]
    MultipleWildcards { pattern: Box<str> },

    #[error("failed to build matching rule: pattern = {pattern:?}")]
    Regex {
        pattern: Box<str>,
        #[source]
        source: regex::Error,
    },
}

impl CompileError {
    /// The pattern that failed to compile.
    pub fn pattern(&self) -> &str {
        match self {
            Self::UnbalancedGroup { pattern }
            | Self::MultipleWildcards { pattern }
            | Self::Regex { pattern, .. } => pattern,
        }
    }
}
