//! # Ringvec Walkthrough
//!
//! This example shows the containers in action: the dual-ended ring
//! buffer growing and wrapping, the doubling array hitting a ceiling, and
//! a linked list sorted through a binary search tree.
//!
//! Run with: `cargo run --example walkthrough`
//! Set `RUST_LOG=debug` to see growth events.

use anyhow::{Context, Result};

use ringvec::{Config, DynArray, LinkedList, RingBuffer, SearchTree};

fn main() -> Result<()> {
    ringvec::init_logging();

    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║           Ringvec Walkthrough                              ║");
    println!("╠════════════════════════════════════════════════════════════╣");
    println!("║ Pushes at both ends of a ring, fills a bounded array,      ║");
    println!("║ then sorts a linked list through a search tree.            ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();

    ring_demo()?;
    array_demo()?;
    tree_demo();

    println!("✅ Walkthrough complete");
    Ok(())
}

fn ring_demo() -> Result<()> {
    println!("🔁 Ring buffer");

    let mut ring = RingBuffer::new(2).context("creating ring buffer")?;
    for value in 1..=3 {
        ring.push_front(value)?;
        println!(
            "   push_front({}) -> {} | capacity {} | start {}",
            value,
            ring,
            ring.capacity(),
            ring.start()
        );
    }

    ring.push_back(0)?;
    println!("   push_back(0)  -> {}", ring);

    let hex = ring.render_with(|f, v| write!(f, "{:#x}", v));
    println!("   as hex:          {}", hex);

    while let Some(value) = ring.pop_front() {
        println!("   pop_front() = {} | {} left", value, ring.len());
    }
    println!();
    Ok(())
}

fn array_demo() -> Result<()> {
    println!("📦 Dynamic array with a ceiling of 4");

    let mut array = DynArray::with_config(&Config::bounded(4).with_initial_capacity(1))?;
    for value in 0..6 {
        match array.push(value * 10) {
            Ok(len) => println!(
                "   push({:>2}) -> len {} | capacity {}",
                value * 10,
                len,
                array.capacity()
            ),
            Err(err) => {
                println!("   ⚠️  {} (value {} handed back)", err, err.value);
                break;
            }
        }
    }

    if let Some(index) = array.find(|v| *v == 20) {
        println!("   find(20) -> index {}", index);
    }
    println!("   final: {}", array);
    println!();
    Ok(())
}

fn tree_demo() {
    println!("🌳 Sorting through a search tree");

    let list: LinkedList<i32> = [42, 7, 19, 7, 3, 88].into_iter().collect();
    println!("   input:  {}", list);

    let tree: SearchTree<i32> = SearchTree::from_list(&list);
    println!("   shape:  {}", tree.as_tree());

    let sorted = tree.into_list();
    println!("   sorted: {}", sorted);
    println!();
}
