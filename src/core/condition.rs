//! Clause conditions and the activation policy.
//!
//! A condition decides whether its clause is active. It is either absent
//! (the "otherwise" branch, always active), a precomputed value, or a
//! deferred computation invoked during evaluation. Condition values live in
//! the [`serde_json::Value`] universe, and activation follows one rule:
//! only the literal boolean `false` deactivates a clause.

use crate::core::error::GuardError;
use serde_json::Value;

/// Decide whether a resolved condition value activates its clause.
///
/// Only the literal boolean `false` leaves a clause inactive. Every other
/// value counts as satisfied, including values many languages treat as
/// falsy:
///
/// ```rust
/// use guardset::is_satisfied;
/// use serde_json::json;
///
/// assert!(!is_satisfied(&json!(false)));
///
/// assert!(is_satisfied(&json!(true)));
/// assert!(is_satisfied(&json!(0)));
/// assert!(is_satisfied(&json!("")));
/// assert!(is_satisfied(&json!(null)));
/// assert!(is_satisfied(&json!([])));
/// ```
pub fn is_satisfied(value: &Value) -> bool {
    !matches!(value, Value::Bool(false))
}

/// The condition side of a guard clause.
///
/// The variant is an explicit caller choice; nothing inspects closures at
/// runtime to decide whether or how to invoke them. Deferred variants are
/// invoked at most once, during [`resolve`](Condition::resolve).
///
/// # Example
///
/// ```rust
/// use guardset::Condition;
///
/// // Always active - the "otherwise" branch.
/// let otherwise: Condition = Condition::Otherwise;
/// assert!(otherwise.resolve(None).unwrap());
///
/// // A precomputed value, used as-is.
/// let precomputed: Condition = Condition::value(3 > 5);
/// assert!(!precomputed.resolve(None).unwrap());
///
/// // Deferred until resolution.
/// let deferred: Condition = Condition::deferred(|| 3 < 5);
/// assert!(deferred.resolve(None).unwrap());
/// ```
pub enum Condition<A = ()> {
    /// No condition: the clause is always active. This is the "otherwise"
    /// branch, conventionally placed last in a guard expression.
    Otherwise,

    /// A precomputed condition value.
    Value(Value),

    /// A deferred condition taking no arguments.
    Deferred(Box<dyn FnOnce() -> Value + Send>),

    /// A deferred condition that consumes the clause's argument tuple.
    DeferredWith(Box<dyn FnOnce(A) -> Value + Send>),
}

impl<A> Condition<A> {
    /// Wrap a precomputed condition value.
    ///
    /// Accepts anything convertible into a condition value: `bool`s,
    /// numbers, strings, `()` for null.
    pub fn value(value: impl Into<Value>) -> Self {
        Condition::Value(value.into())
    }

    /// Defer a zero-argument condition computation.
    pub fn deferred<V, F>(f: F) -> Self
    where
        V: Into<Value>,
        F: FnOnce() -> V + Send + 'static,
    {
        Condition::Deferred(Box::new(move || f().into()))
    }

    /// Defer a condition computation that consumes the argument tuple.
    ///
    /// Resolving this variant without a bound tuple fails with
    /// [`GuardError::MissingConditionArgs`].
    pub fn deferred_with<V, F>(f: F) -> Self
    where
        V: Into<Value>,
        F: FnOnce(A) -> V + Send + 'static,
    {
        Condition::DeferredWith(Box::new(move |args| f(args).into()))
    }

    /// Check whether this is the absent "otherwise" condition.
    pub fn is_otherwise(&self) -> bool {
        matches!(self, Condition::Otherwise)
    }

    /// Resolve the condition to its activation decision.
    ///
    /// Deferred conditions are invoked here, exactly once. The result is
    /// normalized through [`is_satisfied`]: only the literal `false`
    /// resolves to inactive.
    pub fn resolve(self, args: Option<A>) -> Result<bool, GuardError> {
        let value = match self {
            Condition::Otherwise => return Ok(true),
            Condition::Value(value) => value,
            Condition::Deferred(f) => f(),
            Condition::DeferredWith(f) => {
                let args = args.ok_or(GuardError::MissingConditionArgs)?;
                f(args)
            }
        };
        Ok(is_satisfied(&value))
    }
}

impl<A> Default for Condition<A> {
    fn default() -> Self {
        Condition::Otherwise
    }
}
