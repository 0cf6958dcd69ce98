//! Core guard expression types and logic.
//!
//! This module contains the pure functional core of the library:
//! - Clause evaluation via [`GuardClause`]
//! - First-match selection via [`guard()`]
//! - The [`Outcome`] sentinel separating "no clause matched" from any
//!   matched value
//!
//! All logic in this module is pure: evaluation has no side effects of
//! its own, and deferred work runs only when its clause is selected.

mod clause;
mod condition;
mod error;
mod outcome;
mod select;
mod thunk;

pub use clause::GuardClause;
pub use condition::{is_satisfied, Condition};
pub use error::GuardError;
pub use outcome::Outcome;
pub use select::guard;
pub use thunk::Thunk;
