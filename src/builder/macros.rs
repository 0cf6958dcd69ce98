//! Macros for ergonomic guard expression construction.

/// Evaluate guard clauses in declaration order and select the first match.
///
/// Each clause expression is evaluated eagerly, left to right, exactly as
/// written; the first evaluation error short-circuits the expression, so
/// later clauses are not touched. The selected result is
/// `Result<Outcome<T>, GuardError>`. Zero clauses yield `Ok(NoMatch)`.
///
/// # Example
///
/// ```
/// use guardset::{clause, guard, otherwise, GuardError, Outcome};
///
/// fn sign(n: i64) -> Result<Outcome<i64>, GuardError> {
///     guard![
///         clause(-1).when(n < 0),
///         clause(0).when(n == 0),
///         otherwise(1),
///     ]
/// }
///
/// assert_eq!(sign(-7)?, Outcome::Match(-1));
/// assert_eq!(sign(0)?, Outcome::Match(0));
/// assert_eq!(sign(12)?, Outcome::Match(1));
/// # Ok::<(), GuardError>(())
/// ```
#[macro_export]
macro_rules! guard {
    () => {
        ::core::result::Result::<_, $crate::GuardError>::Ok($crate::Outcome::NoMatch)
    };
    ($($clause:expr),+ $(,)?) => {
        (|| {
            ::core::result::Result::<_, $crate::GuardError>::Ok($crate::guard([
                $($clause.evaluate()?),+
            ]))
        })()
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::{clause, deferred, deferred_with, otherwise};
    use crate::core::{GuardError, Outcome};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn sign(n: i64) -> Result<Outcome<i64>, GuardError> {
        guard![
            clause(-1).when(n < 0),
            clause(0).when(n == 0),
            otherwise(1),
        ]
    }

    #[test]
    fn sign_scenario_selects_by_declaration_order() {
        assert_eq!(sign(0).unwrap(), Outcome::Match(0));
        assert_eq!(sign(5).unwrap(), Outcome::Match(1));
        assert_eq!(sign(-3).unwrap(), Outcome::Match(-1));
    }

    #[test]
    fn without_otherwise_unmatched_input_is_no_match() {
        let n = 5;
        let outcome = guard![clause(-1).when(n < 0), clause(0).when(n == 0)].unwrap();
        assert_eq!(outcome, Outcome::NoMatch);
    }

    #[test]
    fn first_error_short_circuits_later_clauses() {
        let touched = Arc::new(AtomicBool::new(false));
        let touched_by_later = Arc::clone(&touched);

        let result: Result<Outcome<i64>, GuardError> = guard![
            deferred_with(|(n,): (i64,)| n).when(true),
            clause(2).when_deferred(move || {
                touched_by_later.store(true, Ordering::SeqCst);
                true
            }),
        ];

        assert_eq!(result, Err(GuardError::MissingBodyArgs));
        assert!(!touched.load(Ordering::SeqCst));
    }

    #[test]
    fn argument_tuples_flow_through_the_macro() {
        let weight = 3;
        let outcome = guard![
            deferred_with(|(w,): (i64,)| w * 2).when(weight < 5).args((weight,)),
            otherwise(100),
        ]
        .unwrap();

        assert_eq!(outcome, Outcome::Match(6));
    }

    #[test]
    fn later_deferred_bodies_still_run_after_a_match() {
        let ran = Arc::new(AtomicBool::new(false));
        let ran_in_later = Arc::clone(&ran);

        let outcome = guard![
            clause(1).when(true),
            deferred(move || {
                ran_in_later.store(true, Ordering::SeqCst);
                2
            }),
        ]
        .unwrap();

        // Selection ignores later clauses, but their bodies already ran:
        // an unconditioned clause is active no matter what matched before
        // it. Only an unsatisfied condition keeps a deferred body cold.
        assert_eq!(outcome, Outcome::Match(1));
        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn gated_recursive_expressions_terminate() {
        fn fib(n: u64) -> u64 {
            guard![
                clause(1).when(n < 2),
                deferred(move || fib(n - 1) + fib(n - 2)).when(n >= 2),
            ]
            .unwrap()
            .unwrap_or(0)
        }

        let series: Vec<u64> = (0..10).map(fib).collect();
        assert_eq!(series, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
    }

    #[test]
    fn trailing_comma_is_tolerated() {
        let outcome = guard![clause(1).when(true),].unwrap();
        assert_eq!(outcome, Outcome::Match(1));
    }

    #[test]
    fn empty_guard_expression_matches_nothing() {
        let outcome: Result<Outcome<i64>, GuardError> = guard![];
        assert_eq!(outcome, Ok(Outcome::NoMatch));
    }
}
