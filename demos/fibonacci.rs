//! Fibonacci via Guard Recursion
//!
//! This example computes Fibonacci numbers with a recursive guard
//! expression. Clauses evaluate eagerly in declaration order, so the
//! recursive branch needs both of its pieces: the n >= 2 condition keeps
//! it inactive at the base cases, and the deferred body keeps an inactive
//! clause from computing anything. Either piece alone would recurse
//! without bound. Negative input selects a clause whose result is itself
//! an error value.
//!
//! Key concepts:
//! - A condition gates the recursive clause at the base cases
//! - Deferred bodies of inactive clauses never run
//! - Err(..) as a clause result is a legitimate Match, not NoMatch
//!
//! Run with: cargo run --example fibonacci

use guardset::{clause, deferred, guard, GuardError, Outcome};

fn fibo(n: i64) -> Result<Outcome<Result<u64, String>>, GuardError> {
    guard![
        clause(Err("out of range".to_string())).when(n < 0),
        clause(Ok(1)).when(n < 2),
        deferred(move || match (fib_value(n - 1), fib_value(n - 2)) {
            (Ok(a), Ok(b)) => Ok(a + b),
            (Err(e), _) | (_, Err(e)) => Err(e),
        })
        .when(n >= 2),
    ]
}

// Collapse the outcome layers for the recursive calls. The three
// conditions cover every integer, so NoMatch cannot happen.
fn fib_value(n: i64) -> Result<u64, String> {
    fibo(n)
        .unwrap()
        .unwrap_or(Err("no clause matched".to_string()))
}

fn main() {
    println!("=== Fibonacci via Guard Recursion ===\n");

    print!("fibo(0..10):");
    for n in 0..10 {
        match fibo(n).unwrap() {
            Outcome::Match(Ok(value)) => print!(" {}", value),
            other => print!(" {:?}", other),
        }
    }
    println!();

    println!("\nNegative input selects the error-as-value clause:");
    println!("fibo(-1) = {:?}", fibo(-1).unwrap());

    println!("\nKey Takeaways:");
    println!("- The n >= 2 gate keeps the recursive clause inactive at the base cases");
    println!("- Deferral keeps an inactive clause's body from running at all");
    println!("- Either piece alone would recurse without bound");
    println!("- Error values flow through Match like any other result");

    println!("\n=== Example Complete ===");
}
