//! First-match selection over clause outcomes.

use crate::core::outcome::Outcome;

/// Select the first match from an ordered sequence of clause outcomes.
///
/// Declaration order decides: the first [`Outcome::Match`] wins and every
/// later outcome is ignored. When nothing matched, the whole guard
/// expression is [`Outcome::NoMatch`] - including for an empty sequence.
///
/// The sentinel is distinct from any matched value, so a clause that
/// legitimately produces `false`, `0`, or `None` still wins selection.
///
/// # Example
///
/// ```rust
/// use guardset::{guard, GuardClause, GuardError, Outcome};
///
/// fn sign(n: i64) -> Result<Outcome<i64>, GuardError> {
///     Ok(guard([
///         GuardClause::new(-1).when(n < 0).evaluate()?,
///         GuardClause::new(0).when(n == 0).evaluate()?,
///         GuardClause::new(1).evaluate()?,
///     ]))
/// }
///
/// assert_eq!(sign(-7)?, Outcome::Match(-1));
/// assert_eq!(sign(0)?, Outcome::Match(0));
/// assert_eq!(sign(12)?, Outcome::Match(1));
/// # Ok::<(), GuardError>(())
/// ```
pub fn guard<T, I>(outcomes: I) -> Outcome<T>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    outcomes
        .into_iter()
        .find(Outcome::is_match)
        .unwrap_or(Outcome::NoMatch)
}
