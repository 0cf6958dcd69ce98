//! Guard clauses and their evaluation.
//!
//! A [`GuardClause`] pairs a result producer with a condition. Evaluating it
//! yields an [`Outcome`]: the produced result when the condition holds, the
//! no-match sentinel when it does not. Result producers are resolved lazily,
//! so an inactive clause never runs its body.

use crate::core::condition::Condition;
use crate::core::error::GuardError;
use crate::core::outcome::Outcome;
use crate::core::thunk::Thunk;
use serde_json::Value;

/// One condition/result pair of a guard expression.
///
/// The fields are public: the fluent constructors cover the common shapes,
/// and a struct literal covers the rest. The single argument tuple `args`
/// is shared by the condition and the body; each deferred piece that
/// consumes arguments receives its own copy.
///
/// Clauses hold `FnOnce` closures, so they are evaluated at most once and,
/// unlike the [`Outcome`]s they produce, are not serializable.
///
/// # Example
///
/// ```rust
/// use guardset::{GuardClause, Outcome};
///
/// let n = -4;
///
/// // Active clause: the condition is satisfied, the result comes back.
/// let outcome = GuardClause::new(-1).when(n < 0).evaluate().unwrap();
/// assert_eq!(outcome, Outcome::Match(-1));
///
/// // Inactive clause: the condition resolved to the literal false.
/// let outcome = GuardClause::new(-1).when(n > 0).evaluate().unwrap();
/// assert_eq!(outcome, Outcome::NoMatch);
/// ```
pub struct GuardClause<T, A = ()> {
    /// The result producer, resolved only when the clause is active.
    pub body: Thunk<T, A>,

    /// The activation condition; [`Condition::Otherwise`] when absent.
    pub condition: Condition<A>,

    /// The argument tuple consumed by `DeferredWith` pieces.
    pub args: Option<A>,
}

impl<T> GuardClause<T> {
    /// Create a clause producing a plain value, with no condition.
    ///
    /// Without a condition the clause is always active - the "otherwise"
    /// branch of a guard expression.
    pub fn new(value: T) -> Self {
        GuardClause {
            body: Thunk::Ready(value),
            condition: Condition::Otherwise,
            args: None,
        }
    }

    /// Create a clause whose result is computed only if the clause is
    /// selected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use guardset::{GuardClause, Outcome};
    ///
    /// let outcome = GuardClause::deferred(|| "expensive".to_uppercase())
    ///     .when(true)
    ///     .evaluate()
    ///     .unwrap();
    ///
    /// assert_eq!(outcome, Outcome::Match("EXPENSIVE".to_string()));
    /// ```
    pub fn deferred<F>(f: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        GuardClause {
            body: Thunk::Deferred(Box::new(f)),
            condition: Condition::Otherwise,
            args: None,
        }
    }
}

impl<T, A> GuardClause<T, A> {
    /// Create a clause whose deferred result consumes an argument tuple.
    ///
    /// Bind the tuple with [`args`](GuardClause::args); evaluating an
    /// active clause without one fails with
    /// [`GuardError::MissingBodyArgs`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use guardset::{GuardClause, Outcome};
    ///
    /// let n = 0;
    /// let outcome = GuardClause::deferred_with(|(x,): (i64,)| x + 1)
    ///     .when(n == 0)
    ///     .args((n,))
    ///     .evaluate()
    ///     .unwrap();
    ///
    /// assert_eq!(outcome, Outcome::Match(1));
    /// ```
    pub fn deferred_with<F>(f: F) -> Self
    where
        F: FnOnce(A) -> T + Send + 'static,
    {
        GuardClause {
            body: Thunk::DeferredWith(Box::new(f)),
            condition: Condition::Otherwise,
            args: None,
        }
    }

    /// Set a precomputed condition value.
    ///
    /// Accepts anything convertible into a condition value: `bool`s,
    /// numbers, strings, `()` for null. Only the literal `false`
    /// deactivates the clause; see [`is_satisfied`](crate::is_satisfied).
    pub fn when(mut self, condition: impl Into<Value>) -> Self {
        self.condition = Condition::Value(condition.into());
        self
    }

    /// Set a deferred zero-argument condition.
    pub fn when_deferred<V, F>(mut self, f: F) -> Self
    where
        V: Into<Value>,
        F: FnOnce() -> V + Send + 'static,
    {
        self.condition = Condition::deferred(f);
        self
    }

    /// Set a deferred condition that consumes the argument tuple.
    pub fn when_deferred_with<V, F>(mut self, f: F) -> Self
    where
        V: Into<Value>,
        F: FnOnce(A) -> V + Send + 'static,
    {
        self.condition = Condition::deferred_with(f);
        self
    }

    /// Bind the argument tuple shared by the clause's deferred pieces.
    pub fn args(mut self, args: A) -> Self {
        self.args = Some(args);
        self
    }

    /// Evaluate the clause to its outcome.
    ///
    /// The condition resolves first. An inactive clause yields
    /// [`Outcome::NoMatch`] without touching the body; an active clause
    /// resolves the body and yields [`Outcome::Match`]. A deferred
    /// condition or body that consumes arguments fails with the matching
    /// [`GuardError`] variant when no tuple is bound - the condition is
    /// checked before the body.
    ///
    /// Panics raised inside caller-supplied closures propagate unchanged.
    pub fn evaluate(self) -> Result<Outcome<T>, GuardError>
    where
        A: Clone,
    {
        let GuardClause {
            body,
            condition,
            args,
        } = self;

        if !condition.resolve(args.clone())? {
            return Ok(Outcome::NoMatch);
        }

        Ok(Outcome::Match(body.resolve(args)?))
    }
}
