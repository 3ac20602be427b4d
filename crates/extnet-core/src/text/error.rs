use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Placeholder refers past the end of the argument list.
    #[error("placeholder {{{index}}} has no argument ({count} given)")]
    MissingArgument { index: usize, count: usize },

    /// Unescaped `{` or `}` without its partner, at byte `position`.
    #[error("unbalanced brace at byte {position}")]
    UnbalancedBrace { position: usize },

    #[error("cannot read placeholder '{{{placeholder}}}'")]
    BadPlaceholder { placeholder: String },
}

impl FormatError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        FormatError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
