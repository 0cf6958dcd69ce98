//! Tiered Shipping Rates
//!
//! This example prices a parcel through a guard expression: weight tiers
//! checked in order, with deferred conditions and rate computations that
//! share one argument tuple bound per clause.
//!
//! Key concepts:
//! - deferred_with bodies receive the clause's argument tuple
//! - when_deferred_with conditions receive the same tuple
//! - .args(tuple) binds the tuple before evaluation
//! - NoMatch models "no tier applies" (manual quote needed)
//!
//! Run with: cargo run --example shipping_rates

use guardset::{deferred_with, guard, GuardError, Outcome};

const OVERSIZE_KG: f64 = 50.0;

fn quote(weight_kg: f64) -> Result<Outcome<f64>, GuardError> {
    guard![
        deferred_with(|(w,): (f64,)| 4.99 + 0.50 * w)
            .when_deferred_with(|(w,): (f64,)| w <= 2.0)
            .args((weight_kg,)),
        deferred_with(|(w,): (f64,)| 7.49 + 0.35 * w)
            .when_deferred_with(|(w,): (f64,)| w <= 20.0)
            .args((weight_kg,)),
        deferred_with(|(w,): (f64,)| 12.99 + 0.25 * w)
            .when_deferred_with(|(w,): (f64,)| w <= OVERSIZE_KG)
            .args((weight_kg,)),
    ]
}

fn main() {
    println!("=== Tiered Shipping Rates ===\n");

    for weight in [1.2, 8.0, 34.5, 80.0] {
        match quote(weight).unwrap() {
            Outcome::Match(price) => println!("{:>6.1} kg -> {:.2} EUR", weight, price),
            Outcome::NoMatch => println!("{:>6.1} kg -> manual quote required", weight),
        }
    }

    println!("\nKey Takeaways:");
    println!("- One argument tuple feeds both condition and body");
    println!("- Tiers are checked in declaration order, first match wins");
    println!("- NoMatch is the business answer for oversize parcels");

    println!("\n=== Example Complete ===");
}
