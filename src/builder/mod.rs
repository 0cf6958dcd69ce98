//! Builder API for ergonomic guard expression construction.
//!
//! This module provides free constructor functions and the [`guard!`]
//! macro for writing guard expressions with minimal boilerplate while
//! keeping clause shapes explicit.
//!
//! [`guard!`]: crate::guard!

pub mod macros;

use crate::core::GuardClause;

/// Create a clause producing a plain value.
///
/// The returned clause has no condition yet, so it is always active;
/// chain [`when`](GuardClause::when) to gate it.
///
/// # Example
///
/// ```
/// use guardset::{clause, guard, otherwise, GuardError, Outcome};
///
/// let n = -4;
/// let sign = guard([
///     clause(-1).when(n < 0).evaluate()?,
///     clause(0).when(n == 0).evaluate()?,
///     otherwise(1).evaluate()?,
/// ]);
///
/// assert_eq!(sign, Outcome::Match(-1));
/// # Ok::<(), GuardError>(())
/// ```
pub fn clause<T>(value: T) -> GuardClause<T> {
    GuardClause::new(value)
}

/// Create an always-active clause, conventionally placed last.
///
/// Identical to [`clause`] without a `when`; the separate name documents
/// the intent of a catch-all branch.
///
/// # Example
///
/// ```
/// use guardset::{otherwise, Outcome};
///
/// let outcome = otherwise("fallback").evaluate()?;
/// assert_eq!(outcome, Outcome::Match("fallback"));
/// # Ok::<(), guardset::GuardError>(())
/// ```
pub fn otherwise<T>(value: T) -> GuardClause<T> {
    GuardClause::new(value)
}

/// Create a clause whose result is computed only if the clause is
/// selected.
///
/// # Example
///
/// ```
/// use guardset::{deferred, Outcome};
///
/// let outcome = deferred(|| 6 * 7).when(true).evaluate()?;
/// assert_eq!(outcome, Outcome::Match(42));
/// # Ok::<(), guardset::GuardError>(())
/// ```
pub fn deferred<T, F>(f: F) -> GuardClause<T>
where
    F: FnOnce() -> T + Send + 'static,
{
    GuardClause::deferred(f)
}

/// Create a clause whose deferred result consumes an argument tuple.
///
/// Bind the tuple with [`args`](GuardClause::args) before evaluating.
///
/// # Example
///
/// ```
/// use guardset::{deferred_with, Outcome};
///
/// let n = 0;
/// let outcome = deferred_with(|(x,): (i64,)| x + 1)
///     .when(n == 0)
///     .args((n,))
///     .evaluate()?;
///
/// assert_eq!(outcome, Outcome::Match(1));
/// # Ok::<(), guardset::GuardError>(())
/// ```
pub fn deferred_with<T, A, F>(f: F) -> GuardClause<T, A>
where
    F: FnOnce(A) -> T + Send + 'static,
{
    GuardClause::deferred_with(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn clause_pairs_value_with_condition() {
        assert_eq!(
            clause("hit").when(true).evaluate().unwrap(),
            Outcome::Match("hit")
        );
        assert_eq!(
            clause("miss").when(false).evaluate().unwrap(),
            Outcome::NoMatch
        );
    }

    #[test]
    fn otherwise_is_always_active() {
        assert_eq!(otherwise(99).evaluate().unwrap(), Outcome::Match(99));
    }

    #[test]
    fn deferred_body_stays_cold_until_selected() {
        let ran = Arc::new(AtomicBool::new(false));
        let ran_in_body = Arc::clone(&ran);

        let outcome = deferred(move || {
            ran_in_body.store(true, Ordering::SeqCst);
            1
        })
        .when(false)
        .evaluate()
        .unwrap();

        assert_eq!(outcome, Outcome::NoMatch);
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[test]
    fn deferred_with_threads_the_tuple() {
        let outcome = deferred_with(|(a, b): (i64, i64)| a + b)
            .when(true)
            .args((20, 22))
            .evaluate()
            .unwrap();

        assert_eq!(outcome, Outcome::Match(42));
    }
}
