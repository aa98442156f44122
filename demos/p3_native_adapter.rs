//! Pattern 3: Adapting Native Iteration
//! Example: Foreign containers joining the cursor contract
//!
//! Run with: cargo run --example p3_native_adapter

use std::collections::LinkedList;

use keysim::{BoundedArray, Cursor, NativeCursorAdapter, Traversable};

/// One consumer, three storage shapes.
fn sum(cursor: &mut dyn Cursor<Item = i32>) -> i32 {
    let mut total = 0;
    cursor.first();
    while !cursor.is_done() {
        total += *cursor.current().unwrap();
        cursor.next();
    }
    total
}

fn main() {
    println!("=== One Consumer, Any Container ===\n");

    let vec = vec![1, 2, 3, 4];
    let mut from_vec = NativeCursorAdapter::new(&vec);
    println!("Vec<i32>      -> sum = {}", sum(&mut from_vec));

    let mut list = LinkedList::new();
    for n in [10, 20, 30] {
        list.push_back(n);
    }
    let mut from_list = NativeCursorAdapter::new(&list);
    println!("LinkedList    -> sum = {}", sum(&mut from_list));

    let mut array = BoundedArray::new();
    for n in [100, 200] {
        array.add(n).unwrap();
    }
    println!("BoundedArray  -> sum = {}", sum(array.cursor().as_mut()));

    println!("\n=== Restarting the Native Iterator ===");
    let mut cursor = NativeCursorAdapter::new(&vec);
    cursor.first();
    cursor.next();
    println!("after one next(): current = {}", cursor.current().unwrap());
    cursor.first();
    println!("after first():    current = {}", cursor.current().unwrap());
}
