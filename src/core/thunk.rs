//! Deferred result producers.
//!
//! A [`Thunk`] is the result side of a guard clause. The caller states
//! explicitly whether the result is already computed, deferred with no
//! arguments, or deferred and waiting on the clause's argument tuple;
//! nothing is inferred from the value at runtime.

use crate::core::error::GuardError;

/// A result producer: a plain value or a deferred computation.
///
/// Deferred variants are invoked at most once, and only when the owning
/// clause is active.
pub enum Thunk<T, A = ()> {
    /// An already-computed value, returned as-is.
    Ready(T),

    /// A deferred computation taking no arguments.
    Deferred(Box<dyn FnOnce() -> T + Send>),

    /// A deferred computation that consumes the clause's argument tuple.
    DeferredWith(Box<dyn FnOnce(A) -> T + Send>),
}

impl<T, A> Thunk<T, A> {
    /// Produce the value.
    ///
    /// `Ready` values come back unchanged; deferred computations run here.
    /// A `DeferredWith` computation with no tuple to consume fails with
    /// [`GuardError::MissingBodyArgs`].
    ///
    /// ```rust
    /// use guardset::Thunk;
    ///
    /// let ready: Thunk<i64> = Thunk::Ready(3);
    /// assert_eq!(ready.resolve(None).unwrap(), 3);
    ///
    /// let deferred: Thunk<i64> = Thunk::Deferred(Box::new(|| 2 + 1));
    /// assert_eq!(deferred.resolve(None).unwrap(), 3);
    ///
    /// let with_args: Thunk<i64, (i64,)> = Thunk::DeferredWith(Box::new(|(n,)| n + 1));
    /// assert_eq!(with_args.resolve(Some((2,))).unwrap(), 3);
    /// ```
    pub fn resolve(self, args: Option<A>) -> Result<T, GuardError> {
        match self {
            Thunk::Ready(value) => Ok(value),
            Thunk::Deferred(f) => Ok(f()),
            Thunk::DeferredWith(f) => {
                let args = args.ok_or(GuardError::MissingBodyArgs)?;
                Ok(f(args))
            }
        }
    }

    /// Check whether the value is already computed.
    pub fn is_ready(&self) -> bool {
        matches!(self, Thunk::Ready(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_value_resolves_as_is() {
        let thunk: Thunk<&str> = Thunk::Ready("done");
        assert!(thunk.is_ready());
        assert_eq!(thunk.resolve(None).unwrap(), "done");
    }

    #[test]
    fn deferred_runs_on_resolve() {
        let thunk: Thunk<i64> = Thunk::Deferred(Box::new(|| 6 * 7));
        assert!(!thunk.is_ready());
        assert_eq!(thunk.resolve(None).unwrap(), 42);
    }

    #[test]
    fn deferred_with_consumes_the_argument_tuple() {
        let thunk: Thunk<i64, (i64, i64)> = Thunk::DeferredWith(Box::new(|(a, b)| a + b));
        assert_eq!(thunk.resolve(Some((40, 2))).unwrap(), 42);
    }

    #[test]
    fn deferred_with_requires_a_bound_tuple() {
        let thunk: Thunk<i64, (i64,)> = Thunk::DeferredWith(Box::new(|(n,)| n));
        assert_eq!(thunk.resolve(None), Err(GuardError::MissingBodyArgs));
    }
}
