//! Number Sign Classification
//!
//! This example demonstrates the basic guard expression: ordered
//! condition/result pairs with a catch-all branch, mirroring Haskell's
//!
//!   sign n | n < 0     = -1
//!          | n == 0    = 0
//!          | otherwise = 1
//!
//! Key concepts:
//! - Clauses evaluate independently to outcomes
//! - First match wins, in declaration order
//! - The otherwise clause catches everything else
//! - Without it, unmatched input reports NoMatch
//!
//! Run with: cargo run --example number_sign

use guardset::{clause, guard, otherwise, GuardError, Outcome};

fn sign(n: i64) -> Result<Outcome<i64>, GuardError> {
    guard![
        clause(-1).when(n < 0),
        clause(0).when(n == 0),
        otherwise(1),
    ]
}

// Same expression without the catch-all branch.
fn partial_sign(n: i64) -> Result<Outcome<i64>, GuardError> {
    guard![clause(-1).when(n < 0), clause(0).when(n == 0)]
}

fn main() {
    println!("=== Number Sign Classification ===\n");

    for n in [-7, 0, 42] {
        println!("sign({}) = {:?}", n, sign(n).unwrap());
    }

    println!("\nWithout the otherwise clause, positive input matches nothing:");
    println!("partial_sign(5) = {:?}", partial_sign(5).unwrap());

    println!("\nKey Takeaways:");
    println!("- Clauses are checked in declaration order");
    println!("- The otherwise clause is just a clause with no condition");
    println!("- NoMatch is a real value, not an error");

    println!("\n=== Example Complete ===");
}
