//! Resource Pool
//!
//! This demo shares one bounded pool across the process and loans its
//! resources out in every supported way.
//!
//! Key concepts:
//! - Explicit, init-once process-wide instance
//! - Fail-fast checkout when the pool is exhausted
//! - Scoped checkout that returns the handle on every exit path
//! - Double returns are rejected instead of corrupting the pool
//!
//! Run with: RUST_LOG=debug cargo run --example resource_pool

use tracing_subscriber::EnvFilter;
use waypoint::observer::Observer;
use waypoint::pool::{global, BoundedResourcePool, PoolConfig, PoolEvent, PoolEventKind, ScopedError};

fn print_status(pool: &BoundedResourcePool) {
    let status = pool.status();
    println!("  Pool status");
    for id in &status.available {
        println!("    Item {id} in pool");
    }
    for id in &status.checked_out {
        println!("    Item {id} handed out");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Resource Pool ===\n");

    let observer = Observer::<PoolEvent>::new().on(PoolEventKind::Exhausted, |_: &PoolEvent| {
        println!("  (observer) pool ran dry");
    });

    let pool = match global::install_with_observer(PoolConfig::default(), observer) {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Could not install pool: {err}");
            return;
        }
    };

    println!("Scoped checkout:");
    let result: Result<(), ScopedError<String>> = pool.scoped_checkout(|handle| {
        println!("  Doing some work with item {}", handle.id());
        print_status(pool);
        Err("work failed halfway".to_string())
    });
    println!("  Work result: {result:?}");
    print_status(pool);

    println!("\nManual checkout until exhausted:");
    let mut held = Vec::new();
    loop {
        match pool.checkout() {
            Ok(handle) => {
                println!("  Handing out item {}", handle.id());
                held.push(handle);
            }
            Err(err) => {
                println!("  {err}");
                break;
            }
        }
    }
    print_status(pool);

    println!("\nReturning items:");
    if let Some(first) = held.first().cloned() {
        for handle in held {
            if let Err(err) = pool.return_item(handle) {
                println!("  {err}");
            }
        }
        if let Err(err) = pool.return_item(first) {
            println!("  Second return refused: {err}");
        }
    }
    print_status(pool);

    let same = global::install(PoolConfig::default()).map(|again| std::ptr::eq(again, pool));
    println!("\nSecond install returns the same pool: {same:?}");

    println!("\n=== Demo Complete ===");
}
