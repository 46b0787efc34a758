//! Submit a few multiply tasks with simulated hard computation and
//! retrieve their results through the handles.
//!
//! Run with: `cargo run --example basic`

use rand::Rng;
use std::thread;
use std::time::Duration;
use taskwell::Pool;

fn simulate_hard_computation() {
    let millis = rand::thread_rng().gen_range(100..=500);
    thread::sleep(Duration::from_millis(millis));
}

fn multiply(a: i64, b: i64) -> i64 {
    simulate_hard_computation();
    a * b
}

fn main() -> taskwell::Result<()> {
    let mut pool = Pool::with_threads(4)?;

    let first = pool.submit(|| multiply(5, 6));
    let second = pool.submit(|| multiply(7, 8));

    println!("5 * 6 = {}", first.join()?);
    println!("7 * 8 = {}", second.join()?);

    pool.shutdown();
    Ok(())
}
