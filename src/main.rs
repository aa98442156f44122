use colored::Colorize;
use rand::thread_rng;

use keysim::{
    use_all, BoundedArray, BoundedStack, ContainerError, CountingCursor, Cursor, Keyboard,
    KeyboardKind, NativeCursorAdapter, SkippingCursor, Traversable,
};

fn main() -> Result<(), ContainerError> {
    let mut rng = thread_rng();

    println!("{}", "=== Keyboard Simulation ===".bold());

    let mut keyboards: BoundedArray<Box<dyn Keyboard>> = BoundedArray::new();
    for _ in 0..10 {
        let kind = KeyboardKind::random(&mut rng);
        keyboards.add(kind.build(&mut rng))?;
    }

    println!("{}", "Using all keyboards:".cyan());
    let mut cursor = keyboards.cursor();
    use_all(cursor.as_mut())?;

    // smell check for every third keyboard, through a decorator
    println!("\n{}", "Smell check (every third keyboard):".cyan());
    let mut sniffer = SkippingCursor::new(keyboards.cursor(), 3);
    sniffer.first();
    while !sniffer.is_done() {
        println!("  {}", sniffer.current()?.smell());
        sniffer.next();
    }

    println!("\n{}", "=== Stack Discipline ===".bold());
    let mut stack = BoundedStack::new();
    for n in [5, 2, 8] {
        stack.push(n)?;
    }
    println!("popped: {}", stack.pop()?.to_string().green());
    print!("remaining (bottom first):");
    let mut stack_cursor = stack.cursor();
    stack_cursor.first();
    while !stack_cursor.is_done() {
        print!(" {}", stack_cursor.current()?);
        stack_cursor.next();
    }
    println!();

    let mut empty: BoundedStack<i32> = BoundedStack::new();
    match empty.pop() {
        Ok(_) => unreachable!(),
        Err(e) => println!("pop on empty stack: {}", e.to_string().red()),
    }

    println!("\n{}", "=== Counting Accesses ===".bold());
    let mut numbers = BoundedArray::new();
    for n in 1..=5 {
        numbers.add(n)?;
    }
    let mut counting = CountingCursor::new(numbers.cursor());
    let mut sum = 0;
    counting.first();
    while !counting.is_done() {
        sum += *counting.current()?;
        counting.next();
    }
    println!("sum of {} accessed elements: {}", counting.accesses(), sum);

    println!("\n{}", "=== Adapting Native Iteration ===".bold());
    let words = vec!["foreign", "container,", "same", "traversal"];
    let mut adapted = NativeCursorAdapter::new(&words);
    adapted.first();
    while !adapted.is_done() {
        print!("{} ", adapted.current()?);
        adapted.next();
    }
    println!();

    Ok(())
}
