//! Pattern 1: Bounded Containers and Cursor Traversal
//! Example: Stacks and arrays behind one traversal contract
//!
//! Run with: cargo run --example p1_bounded_containers

use keysim::{BoundedArray, BoundedStack, Cursor, Traversable, CAPACITY};

/// Works for any container that hands out cursors, no matter how it
/// stores its elements.
fn print_all<T: std::fmt::Display>(label: &str, cursor: &mut dyn Cursor<Item = T>) {
    print!("{}:", label);
    cursor.first();
    while !cursor.is_done() {
        print!(" {}", cursor.current().unwrap());
        cursor.next();
    }
    println!();
}

fn main() {
    println!("=== Bounded Containers ===\n");

    // Append-only array: traversal order is add order
    let mut array = BoundedArray::new();
    for n in [3, 1, 4, 1, 5] {
        array.add(n).unwrap();
    }
    print_all("array (add order)", array.cursor().as_mut());

    // Stack: LIFO removal, traversal bottom-first
    let mut stack = BoundedStack::new();
    for word in ["first", "second", "third"] {
        stack.push(word).unwrap();
    }
    println!("popped: {}", stack.pop().unwrap());
    print_all("stack (bottom first)", stack.cursor().as_mut());

    println!("\n=== The Capacity Bound ===");
    let mut full = BoundedArray::new();
    for n in 0..CAPACITY {
        full.add(n).unwrap();
    }
    match full.add(CAPACITY) {
        Ok(()) => unreachable!(),
        Err(e) => println!("add #{}: {}", CAPACITY + 1, e),
    }

    println!("\n=== Reported Failures ===");
    let mut empty: BoundedStack<i32> = BoundedStack::new();
    println!("pop on empty: {}", empty.pop().unwrap_err());
    println!("get(9) on empty: {}", empty.get(9).unwrap_err());

    let mut done = array.cursor();
    done.first();
    while !done.is_done() {
        done.next();
    }
    println!("current() when done: {}", done.current().unwrap_err());
}
