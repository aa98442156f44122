//! Pattern 2: Cursor Decorators
//! Example: Layering behavior onto a traversal without touching the container
//!
//! Run with: cargo run --example p2_cursor_decorators

use keysim::{BoundedArray, CountingCursor, Cursor, CursorDecorator, SkippingCursor, Traversable};

fn collect(cursor: &mut dyn Cursor<Item = i32>) -> Vec<i32> {
    let mut out = Vec::new();
    cursor.first();
    while !cursor.is_done() {
        out.push(*cursor.current().unwrap());
        cursor.next();
    }
    out
}

fn main() {
    let mut array = BoundedArray::new();
    for n in [10, 20, 30, 40, 50, 60] {
        array.add(n).unwrap();
    }

    println!("=== Transparent Forwarding ===");
    println!("bare cursor:      {:?}", collect(array.cursor().as_mut()));
    let mut decorated = CursorDecorator::new(array.cursor());
    println!("decorated cursor: {:?}", collect(&mut decorated));

    println!("\n=== Counting Accesses ===");
    let mut counting = CountingCursor::new(array.cursor());
    println!("yielded: {:?}", collect(&mut counting));
    println!("current() was called {} times", counting.accesses());

    println!("\n=== Skipping Elements ===");
    let mut every_other = SkippingCursor::new(array.cursor(), 2);
    println!("every 2nd: {:?}", collect(&mut every_other));
    let mut every_third = SkippingCursor::new(array.cursor(), 3);
    println!("every 3rd: {:?}", collect(&mut every_third));

    println!("\n=== Decorators Nest ===");
    // the counting layer owns the skipping layer, which owns the cursor;
    // dropping the outermost releases the whole chain
    let skipping = SkippingCursor::new(array.cursor(), 2);
    let mut counted_skip = CountingCursor::new(Box::new(skipping));
    println!("every 2nd: {:?}", collect(&mut counted_skip));
    println!("accesses through both layers: {}", counted_skip.accesses());
}
