//! Clause outcomes and the no-match sentinel.
//!
//! Every evaluated guard clause produces an [`Outcome`]: either the clause's
//! result value or the dedicated [`Outcome::NoMatch`] sentinel. Keeping the
//! sentinel out of the value domain means a clause whose legitimate result
//! is `false`, `0`, or an empty string is still a match.

use serde::{Deserialize, Serialize};

/// The value produced by evaluating one guard clause, or by a whole guard
/// expression.
///
/// `Match` carries the clause's result. `NoMatch` means the clause did not
/// apply (its condition resolved to the literal boolean `false`) or, at the
/// expression level, that no clause applied.
///
/// The sentinel is a dedicated enum case rather than an overloaded boolean,
/// so a clause whose result happens to be `false` is still a match:
///
/// ```rust
/// use guardset::Outcome;
///
/// let legitimate_false = Outcome::Match(false);
/// assert!(legitimate_false.is_match());
/// assert_ne!(legitimate_false, Outcome::NoMatch);
/// ```
///
/// Outcomes are plain data and serialize with serde; the clauses that
/// produce them hold closures and do not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<T> {
    /// The clause was active and produced this result.
    Match(T),

    /// The clause did not apply.
    NoMatch,
}

impl<T> Outcome<T> {
    /// Check whether this outcome carries a result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use guardset::Outcome;
    ///
    /// assert!(Outcome::Match(0).is_match());
    /// assert!(!Outcome::<i64>::NoMatch.is_match());
    /// ```
    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Match(_))
    }

    /// Check whether this outcome is the no-match sentinel.
    pub fn is_no_match(&self) -> bool {
        matches!(self, Outcome::NoMatch)
    }

    /// Map the carried result, leaving `NoMatch` untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use guardset::Outcome;
    ///
    /// assert_eq!(Outcome::Match(2).map(|n| n * 10), Outcome::Match(20));
    /// assert_eq!(Outcome::<i64>::NoMatch.map(|n| n * 10), Outcome::NoMatch);
    /// ```
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Match(value) => Outcome::Match(f(value)),
            Outcome::NoMatch => Outcome::NoMatch,
        }
    }

    /// Return the carried result, or `default` when nothing matched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use guardset::Outcome;
    ///
    /// assert_eq!(Outcome::Match(7).unwrap_or(0), 7);
    /// assert_eq!(Outcome::NoMatch.unwrap_or(0), 0);
    /// ```
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Match(value) => value,
            Outcome::NoMatch => default,
        }
    }

    /// Return the carried result, or compute a fallback when nothing matched.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Outcome::Match(value) => value,
            Outcome::NoMatch => f(),
        }
    }

    /// Convert into an `Option`, forgetting the guard vocabulary.
    ///
    /// # Example
    ///
    /// ```rust
    /// use guardset::Outcome;
    ///
    /// assert_eq!(Outcome::Match(3).into_option(), Some(3));
    /// assert_eq!(Outcome::<i64>::NoMatch.into_option(), None);
    /// ```
    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Match(value) => Some(value),
            Outcome::NoMatch => None,
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Outcome::Match(value),
            None => Outcome::NoMatch,
        }
    }
}

impl<T> From<Outcome<T>> for Option<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_and_no_match_are_distinct() {
        assert!(Outcome::Match(1).is_match());
        assert!(!Outcome::Match(1).is_no_match());
        assert!(Outcome::<i64>::NoMatch.is_no_match());
        assert!(!Outcome::<i64>::NoMatch.is_match());
    }

    #[test]
    fn false_result_is_still_a_match() {
        let outcome = Outcome::Match(false);

        assert!(outcome.is_match());
        assert_ne!(outcome, Outcome::NoMatch);
        assert_eq!(outcome.into_option(), Some(false));
    }

    #[test]
    fn map_transforms_only_matches() {
        assert_eq!(Outcome::Match(3).map(|n| n + 1), Outcome::Match(4));
        assert_eq!(Outcome::<i64>::NoMatch.map(|n| n + 1), Outcome::NoMatch);
    }

    #[test]
    fn unwrap_or_falls_back_on_no_match() {
        assert_eq!(Outcome::Match(9).unwrap_or(-1), 9);
        assert_eq!(Outcome::NoMatch.unwrap_or(-1), -1);
        assert_eq!(Outcome::Match(9).unwrap_or_else(|| -1), 9);
        assert_eq!(Outcome::NoMatch.unwrap_or_else(|| -1), -1);
    }

    #[test]
    fn converts_to_and_from_option() {
        assert_eq!(Outcome::from(Some(5)), Outcome::Match(5));
        assert_eq!(Outcome::<i64>::from(None), Outcome::NoMatch);
        assert_eq!(Option::from(Outcome::Match(5)), Some(5));
        assert_eq!(Option::<i64>::from(Outcome::NoMatch), None);
    }

    #[test]
    fn outcome_serializes_correctly() {
        let outcome = Outcome::Match(42);
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: Outcome<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);

        let sentinel: Outcome<i64> = Outcome::NoMatch;
        let json = serde_json::to_string(&sentinel).unwrap();
        let deserialized: Outcome<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(sentinel, deserialized);
    }
}
