// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with mismatch logging:
//   cargo run --example basic_usage --features logging

use si_quantity::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== SI Quantity Example ===\n");

    let a = 2.0 * METER;
    let b = 3.0 * METER;

    println!("a = {}", a);
    println!("b = {}", b);

    match a.try_ge(&b) {
        Ok(ge) => println!("a >= b: {}", ge),
        Err(e) => println!("a >= b failed: {}", e),
    }

    match a + b {
        Ok(sum) => println!("a + b = {}", sum),
        Err(e) => println!("a + b failed: {}", e),
    }

    println!("a * b = {}", a * b);

    // Conversions through the catalog
    println!("\n=== Conversions ===");
    let speed = 90.0 * KILOMETER_PER_HOUR;
    println!("90 km/h = {}", speed);
    if let Ok(mph) = speed.value_in(&MILE_PER_HOUR) {
        println!("90 km/h = {:.2} mph", mph);
    }
    let travel = (10.0 * KILOMETER) / speed;
    if let Ok(minutes) = travel.value_in(&MINUTE) {
        println!("10 km at 90 km/h takes {:.1} minutes", minutes);
    }

    // Mismatches are reported, not panicked on
    println!("\n=== Dimension Checks ===");
    match a + 3.0 * SECOND {
        Ok(q) => println!("unexpected: {}", q),
        Err(e) => println!("2 m + 3 s: {}", e),
    }
    match a.try_eq(&(2.0 * KILOGRAM)) {
        Ok(eq) => println!("unexpected: {}", eq),
        Err(e) => println!("2 m == 2 kg: {}", e),
    }

    println!("\n=== Catalog ===");
    for entry in family(UnitFamily::Pressure) {
        println!("  1 {:<12} = {}", entry.name, entry.quantity);
    }

    println!("\n=== Example Complete ===");
}
