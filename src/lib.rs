//! Guardset: Haskell-style guard expressions as a pure functional library
//!
//! A guard expression sequences condition/result pairs and selects the
//! first pair whose condition is satisfied, the way Haskell's pattern
//! guards do:
//!
//! ```text
//! sign n | n < 0     = -1
//!        | n == 0    = 0
//!        | otherwise = 1
//! ```
//!
//! The core is pure: clauses are plain values, evaluation has no side
//! effects of its own, and deferred results are computed only when their
//! clause is selected.
//!
//! # Core Concepts
//!
//! - **Clause**: one condition/result pair, evaluated independently to an
//!   outcome via [`GuardClause`]
//! - **Selection**: first match wins, in declaration order, via [`guard()`]
//! - **Conditions**: boolean-like values where only the literal `false`
//!   deactivates a clause; see [`is_satisfied`]
//! - **NoMatch**: a dedicated [`Outcome`] sentinel, distinct from every
//!   matched value including `Match(false)`
//!
//! # Example
//!
//! ```rust
//! use guardset::{clause, guard, otherwise, GuardError, Outcome};
//!
//! fn sign(n: i64) -> Result<Outcome<i64>, GuardError> {
//!     guard![
//!         clause(-1).when(n < 0),
//!         clause(0).when(n == 0),
//!         otherwise(1),
//!     ]
//! }
//!
//! assert_eq!(sign(-7)?, Outcome::Match(-1));
//! assert_eq!(sign(0)?, Outcome::Match(0));
//! assert_eq!(sign(42)?, Outcome::Match(1));
//! # Ok::<(), GuardError>(())
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::builder::{clause, deferred, deferred_with, otherwise};
pub use crate::core::{guard, is_satisfied, Condition, GuardClause, GuardError, Outcome, Thunk};
