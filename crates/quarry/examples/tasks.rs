//! Prioritised task queue over a 20-unit arena.
//!
//! Run with `cargo run --example tasks`. Walks through the push / peek /
//! pop lifecycle and prints the diagnostic dump after each step so the
//! free-list and heap bookkeeping are visible.

use quarry::prelude::*;

fn main() -> Result<(), QueueError> {
    let mut queue = ManagedPriorityQueue::new(20);

    // Insert tasks with differently sized payload allocations.
    queue.push_sized(2, "Task A", 5)?;
    queue.push_sized(1, "Task B", 3)?;
    queue.push_sized(3, "Task C", 4)?;

    println!("after pushes:\n{}\n", queue.dump());

    if let Some((priority, task)) = queue.peek() {
        println!("peek: ({priority}, {task})\n");
    }

    let (priority, task) = queue.pop()?;
    println!("pop: ({priority}, {task})\n");
    println!("after pop:\n{}\n", queue.dump());

    // The freed extent is immediately reusable.
    queue.push_sized(4, "Task D", 3)?;
    println!("after reusing the freed extent:\n{}\n", queue.dump());

    let metrics = queue.metrics();
    println!(
        "metrics: {} pushes, {} pops, peak {} units across {} entries",
        metrics.pushes, metrics.pops, metrics.peak_used, metrics.peak_entries
    );
    Ok(())
}
