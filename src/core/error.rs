//! Usage errors raised while evaluating a guard clause.

use thiserror::Error;

/// Errors for clauses constructed in a way that cannot be evaluated.
///
/// Both variants are fatal to the calling expression: surfaced immediately,
/// never retried, never swallowed. Failures inside caller-supplied closures
/// are not represented here - panics propagate unchanged, and recoverable
/// domain failures belong in the clause's own result type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuardError {
    /// A deferred condition consumes an argument tuple, but none was bound.
    #[error("Invalid parameters: the deferred condition takes an argument tuple but none is bound. Call .args(tuple) before .evaluate()")]
    MissingConditionArgs,

    /// A deferred body consumes an argument tuple, but none was bound.
    #[error("Invalid parameters: the deferred body takes an argument tuple but none is bound. Call .args(tuple) before .evaluate()")]
    MissingBodyArgs,
}
