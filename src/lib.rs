//! # keysim
//!
//! A small design-pattern walkthrough: polymorphic cursor traversal
//! over fixed-capacity containers, driving a keyboard simulation.
//!
//! ## Patterns Covered
//!
//! 1. **Cursor traversal over bounded containers**
//!    - The [`Cursor`] contract (`first` / `next` / `is_done` / `current`)
//!    - [`BoundedStack`] (LIFO) and [`BoundedArray`] (append-only),
//!      each handing out cursors via [`Traversable`]
//!
//! 2. **Cursor decorators**
//!    - [`CursorDecorator`] forwards every operation verbatim
//!    - [`CountingCursor`] and [`SkippingCursor`] layer behavior on a
//!      traversal without touching the container
//!
//! 3. **Adapting native iteration**
//!    - [`NativeCursorAdapter`] bridges any `IntoIterator` container
//!      (`Vec`, `LinkedList`, ...) into the [`Cursor`] contract
//!
//! 4. **Strategy and template method**
//!    - [`InputStrategy`] swaps keystroke behavior at runtime
//!    - [`Keyboard`] fixes the use sequence while concrete keyboards
//!      fill in the steps, built through the [`KeyboardKind`] factory
//!
//! Every container holds at most [`CAPACITY`] elements; exceeding the
//! bound, popping an empty stack, indexing past the end, and reading an
//! exhausted cursor are all reported as [`ContainerError`] values.

pub mod adapter;
pub mod array;
pub mod cursor;
pub mod decorator;
pub mod error;
pub mod input;
pub mod keyboard;
pub mod stack;

pub use adapter::NativeCursorAdapter;
pub use array::{ArrayCursor, BoundedArray};
pub use cursor::{Cursor, Traversable};
pub use decorator::{CountingCursor, CursorDecorator, SkippingCursor};
pub use error::ContainerError;
pub use input::{ClickInput, InputMode, InputStrategy, SilentInput, TouchInput};
pub use keyboard::{
    use_all, use_lines, Keyboard, KeyboardCore, KeyboardKind, MechanicalKeyboard,
    MembraneKeyboard, OpticalKeyboard,
};
pub use stack::{BoundedStack, StackCursor, CAPACITY};
