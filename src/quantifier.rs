// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::ops::RangeInclusive;

use crate::RegexScopeError;

/// A validated quantifier suffix, e.g. `*`, `+?`, `{2,4}`.
///
/// Quantifiers can only be obtained from the associated constants and
/// factory functions, so a malformed suffix cannot be constructed.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Quantifier {
    pub(crate) repetition: Repetition,
    pub(crate) lazy: bool,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) enum Repetition {
    ZeroOrMore,          // *
    OneOrMore,           // +
    Optional,            // ?
    Specified(usize),    // {n}
    AtLeast(usize),      // {n,}
    Range(usize, usize), // {m,n}
}

impl Quantifier {
    /// `*`
    pub const ANY_TIMES: Quantifier = Quantifier::greedy(Repetition::ZeroOrMore);

    /// `*?`
    pub const ANY_TIMES_LAZY: Quantifier = Quantifier::lazy(Repetition::ZeroOrMore);

    /// `+`
    pub const AT_LEAST_ONE: Quantifier = Quantifier::greedy(Repetition::OneOrMore);

    /// `+?`
    pub const AT_LEAST_ONE_LAZY: Quantifier = Quantifier::lazy(Repetition::OneOrMore);

    /// `?`
    pub const AT_MOST_ONE: Quantifier = Quantifier::greedy(Repetition::Optional);

    /// `??`
    pub const AT_MOST_ONE_LAZY: Quantifier = Quantifier::lazy(Repetition::Optional);

    const fn greedy(repetition: Repetition) -> Self {
        Self {
            repetition,
            lazy: false,
        }
    }

    const fn lazy(repetition: Repetition) -> Self {
        Self {
            repetition,
            lazy: true,
        }
    }

    /// `{n}`
    pub const fn exactly(times: usize) -> Self {
        Self::greedy(Repetition::Specified(times))
    }

    /// `{n,}`
    pub const fn at_least(times: usize) -> Self {
        Self::greedy(Repetition::AtLeast(times))
    }

    /// `{n,}?`
    pub const fn at_least_lazy(times: usize) -> Self {
        Self::lazy(Repetition::AtLeast(times))
    }

    /// `{m,n}`, fails when the range is inverted.
    pub fn in_range(range: RangeInclusive<usize>) -> Result<Self, RegexScopeError> {
        let (from, to) = check_range(range)?;
        Ok(Self::greedy(Repetition::Range(from, to)))
    }

    /// `{m,n}?`, fails when the range is inverted.
    pub fn in_range_lazy(range: RangeInclusive<usize>) -> Result<Self, RegexScopeError> {
        let (from, to) = check_range(range)?;
        Ok(Self::lazy(Repetition::Range(from, to)))
    }

    pub fn is_lazy(&self) -> bool {
        self.lazy
    }
}

fn check_range(range: RangeInclusive<usize>) -> Result<(usize, usize), RegexScopeError> {
    let (from, to) = range.into_inner();
    if from > to {
        return Err(RegexScopeError::InvalidQuantifier(format!(
            "The lower bound of the quantifier range must not exceed the upper bound, actual: {{{},{}}}.",
            from, to
        )));
    }

    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::RegexScopeError;

    use super::Quantifier;

    #[test]
    fn test_quantifier_suffix() {
        assert_eq!(Quantifier::ANY_TIMES.to_string(), "*");
        assert_eq!(Quantifier::ANY_TIMES_LAZY.to_string(), "*?");
        assert_eq!(Quantifier::AT_LEAST_ONE.to_string(), "+");
        assert_eq!(Quantifier::AT_LEAST_ONE_LAZY.to_string(), "+?");
        assert_eq!(Quantifier::AT_MOST_ONE.to_string(), "?");
        assert_eq!(Quantifier::AT_MOST_ONE_LAZY.to_string(), "??");
        assert_eq!(Quantifier::exactly(3).to_string(), "{3}");
        assert_eq!(Quantifier::exactly(0).to_string(), "{0}");
        assert_eq!(Quantifier::at_least(2).to_string(), "{2,}");
        assert_eq!(Quantifier::at_least_lazy(2).to_string(), "{2,}?");
        assert_eq!(Quantifier::in_range(2..=4).unwrap().to_string(), "{2,4}");
        assert_eq!(
            Quantifier::in_range_lazy(2..=4).unwrap().to_string(),
            "{2,4}?"
        );
        assert_eq!(Quantifier::in_range(3..=3).unwrap().to_string(), "{3,3}");
    }

    #[test]
    fn test_quantifier_equality() {
        assert_eq!(Quantifier::exactly(2), Quantifier::exactly(2));
        assert_eq!(
            Quantifier::in_range(1..=2).unwrap(),
            Quantifier::in_range(1..=2).unwrap()
        );
        assert_ne!(Quantifier::at_least(2), Quantifier::at_least_lazy(2));
        assert_ne!(Quantifier::exactly(2), Quantifier::exactly(3));
        assert!(Quantifier::AT_LEAST_ONE_LAZY.is_lazy());
        assert!(!Quantifier::AT_LEAST_ONE.is_lazy());
    }

    #[test]
    fn test_quantifier_inverted_range() {
        assert!(matches!(
            Quantifier::in_range(5..=2),
            Err(RegexScopeError::InvalidQuantifier(_))
        ));

        assert!(matches!(
            Quantifier::in_range_lazy(1..=0),
            Err(RegexScopeError::InvalidQuantifier(_))
        ));

        let err = Quantifier::in_range(5..=2).unwrap_err();
        assert!(err.to_string().contains("{5,2}"));
    }
}
