//! Error types produced by the mapper.

use thiserror::Error;

/// Errors that can occur while mapping one object onto another.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MapperError {
    /// A precondition of [`crate::Mapper`] was violated before any copying.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Reasons for rejecting mapper input.
///
/// All variants are raised before the copy loop starts, so a failed call
/// never leaves the target partially populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvalidInput {
    /// `fill` was called before a target was designated with `map`.
    #[error("there is no object to be mapped")]
    MissingTarget,

    /// `try_map` was given no target object.
    #[error("there is no object to be mapped: target must be an object")]
    NullTarget,

    /// `fill_from` was given no source object.
    #[error("data should be an object")]
    NullSource,
}

impl InvalidInput {
    /// Returns `true` when no target had been designated.
    #[must_use]
    pub const fn is_missing_target(self) -> bool {
        matches!(self, Self::MissingTarget)
    }

    /// Returns `true` when the supplied target or source was not an object.
    #[must_use]
    pub const fn is_invalid_source(self) -> bool {
        matches!(self, Self::NullTarget | Self::NullSource)
    }
}

impl MapperError {
    /// Returns the underlying input violation.
    #[must_use]
    pub const fn invalid_input(&self) -> InvalidInput {
        match self {
            Self::InvalidInput(reason) => *reason,
        }
    }
}

/// Convenience alias for results returned by the mapper.
pub type MapperResult<T> = Result<T, MapperError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::missing_target(InvalidInput::MissingTarget, "invalid input: there is no object to be mapped")]
    #[case::null_source(InvalidInput::NullSource, "invalid input: data should be an object")]
    fn messages_carry_the_invalid_input_prefix(
        #[case] reason: InvalidInput,
        #[case] expected: &str,
    ) {
        assert_eq!(MapperError::from(reason).to_string(), expected);
    }

    #[rstest]
    #[case(InvalidInput::MissingTarget, true, false)]
    #[case(InvalidInput::NullTarget, false, true)]
    #[case(InvalidInput::NullSource, false, true)]
    fn reasons_fall_into_two_categories(
        #[case] reason: InvalidInput,
        #[case] missing_target: bool,
        #[case] invalid_source: bool,
    ) {
        assert_eq!(reason.is_missing_target(), missing_target);
        assert_eq!(reason.is_invalid_source(), invalid_source);
        assert_eq!(MapperError::from(reason).invalid_input(), reason);
    }
}
