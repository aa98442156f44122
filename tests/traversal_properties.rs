// Property-based checks of the cursor contract, across both bounded
// containers and the forwarding decorator.

use proptest::prelude::*;

use keysim::{BoundedArray, BoundedStack, Cursor, CursorDecorator, Traversable, CAPACITY};

fn drain(cursor: &mut dyn Cursor<Item = i32>) -> Vec<i32> {
    let mut out = Vec::new();
    cursor.first();
    while !cursor.is_done() {
        out.push(*cursor.current().expect("cursor not done"));
        cursor.next();
    }
    out
}

proptest! {
    // Traversal after n insertions yields exactly those n elements, in
    // insertion order.
    #[test]
    fn array_yields_all_elements_in_add_order(
        items in proptest::collection::vec(any::<i32>(), 0..=CAPACITY)
    ) {
        let mut array = BoundedArray::new();
        for &item in &items {
            array.add(item).unwrap();
        }
        prop_assert_eq!(drain(array.cursor().as_mut()), items);
    }

    #[test]
    fn stack_yields_all_elements_bottom_first(
        items in proptest::collection::vec(any::<i32>(), 0..=CAPACITY)
    ) {
        let mut stack = BoundedStack::new();
        for &item in &items {
            stack.push(item).unwrap();
        }
        prop_assert_eq!(drain(stack.cursor().as_mut()), items);
    }

    // first() immediately followed by is_done() is false iff the
    // container was non-empty when the cursor was created.
    #[test]
    fn first_then_is_done_reflects_emptiness(
        items in proptest::collection::vec(any::<i32>(), 0..=20)
    ) {
        let mut array = BoundedArray::new();
        for &item in &items {
            array.add(item).unwrap();
        }
        let mut cursor = array.cursor();
        cursor.first();
        prop_assert_eq!(cursor.is_done(), items.is_empty());
    }

    // Calling first() twice is the same as calling it once.
    #[test]
    fn first_is_idempotent(
        items in proptest::collection::vec(any::<i32>(), 0..=20),
        advances in 0usize..25
    ) {
        let mut array = BoundedArray::new();
        for &item in &items {
            array.add(item).unwrap();
        }

        let mut once = array.cursor();
        let mut twice = array.cursor();
        for _ in 0..advances {
            once.next();
            twice.next();
        }
        once.first();
        twice.first();
        twice.first();

        prop_assert_eq!(once.is_done(), twice.is_done());
        prop_assert_eq!(once.current().ok(), twice.current().ok());
    }

    // next() called exactly len times from the initial state reaches
    // done, and a further next() changes nothing.
    #[test]
    fn next_len_times_reaches_done_and_saturates(
        items in proptest::collection::vec(any::<i32>(), 0..=20)
    ) {
        let mut array = BoundedArray::new();
        for &item in &items {
            array.add(item).unwrap();
        }

        let mut cursor = array.cursor();
        cursor.first();
        for _ in 0..items.len() {
            cursor.next();
        }
        prop_assert!(cursor.is_done());

        cursor.next();
        prop_assert!(cursor.is_done());
        prop_assert!(cursor.current().is_err());
    }

    // Wrapping any cursor in an unmodified decorator yields an
    // identical sequence.
    #[test]
    fn unmodified_decorator_is_transparent(
        items in proptest::collection::vec(any::<i32>(), 0..=20)
    ) {
        let mut array = BoundedArray::new();
        for &item in &items {
            array.add(item).unwrap();
        }

        let direct = drain(array.cursor().as_mut());
        let mut decorated = CursorDecorator::new(array.cursor());
        prop_assert_eq!(drain(&mut decorated), direct);
    }
}
