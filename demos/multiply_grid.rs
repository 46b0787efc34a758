//! The 9x9 multiplication grid on a 16-worker pool: 81 independent
//! tasks with jittered delays, drained so every product is observed.
//!
//! Run with: `cargo run --example multiply_grid`

use rand::Rng;
use std::thread;
use std::time::Duration;
use taskwell::Pool;

fn multiply(a: i32, b: i32) -> i32 {
    let millis = rand::thread_rng().gen_range(10..=100);
    thread::sleep(Duration::from_millis(millis));
    a * b
}

fn main() -> taskwell::Result<()> {
    let mut pool = Pool::with_threads(16)?;

    let handles: Vec<_> = (1..=9)
        .flat_map(|i| (1..=9).map(move |j| (i, j)))
        .map(|(i, j)| (i, j, pool.submit(move || multiply(i, j))))
        .collect();

    for (i, j, handle) in handles {
        println!("{} * {} = {}", i, j, handle.join()?);
    }

    println!("executed {} tasks", pool.tasks_executed());
    pool.drain();
    Ok(())
}
