use std::cell::Cell;

use crate::cursor::Cursor;
use crate::error::ContainerError;

/// A cursor wrapping another cursor and forwarding every operation
/// verbatim.
///
/// This is the extension point for layering behavior onto a traversal
/// without modifying the wrapped cursor or the container that produced
/// it; [`CountingCursor`] and [`SkippingCursor`] are the shipped
/// variants. The decorator owns the wrapped cursor: dropping it drops
/// everything it wraps.
pub struct CursorDecorator<'a, T> {
    inner: Box<dyn Cursor<Item = T> + 'a>,
}

impl<'a, T> CursorDecorator<'a, T> {
    pub fn new(inner: Box<dyn Cursor<Item = T> + 'a>) -> Self {
        CursorDecorator { inner }
    }
}

impl<'a, T> Cursor for CursorDecorator<'a, T> {
    type Item = T;

    fn first(&mut self) {
        self.inner.first();
    }

    fn next(&mut self) {
        self.inner.next();
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }

    fn current(&self) -> Result<&T, ContainerError> {
        self.inner.current()
    }
}

/// A transparent decorator that counts `current()` accesses.
pub struct CountingCursor<'a, T> {
    inner: Box<dyn Cursor<Item = T> + 'a>,
    accesses: Cell<usize>,
}

impl<'a, T> CountingCursor<'a, T> {
    pub fn new(inner: Box<dyn Cursor<Item = T> + 'a>) -> Self {
        CountingCursor {
            inner,
            accesses: Cell::new(0),
        }
    }

    /// How many times `current()` has been called so far.
    pub fn accesses(&self) -> usize {
        self.accesses.get()
    }
}

impl<'a, T> Cursor for CountingCursor<'a, T> {
    type Item = T;

    fn first(&mut self) {
        self.inner.first();
    }

    fn next(&mut self) {
        self.inner.next();
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }

    fn current(&self) -> Result<&T, ContainerError> {
        self.accesses.set(self.accesses.get() + 1);
        self.inner.current()
    }
}

/// A decorator that yields every `step`-th element of the wrapped
/// cursor, starting from the first. A step of 0 is treated as 1.
pub struct SkippingCursor<'a, T> {
    inner: Box<dyn Cursor<Item = T> + 'a>,
    step: usize,
}

impl<'a, T> SkippingCursor<'a, T> {
    pub fn new(inner: Box<dyn Cursor<Item = T> + 'a>, step: usize) -> Self {
        SkippingCursor {
            inner,
            step: step.max(1),
        }
    }
}

impl<'a, T> Cursor for SkippingCursor<'a, T> {
    type Item = T;

    fn first(&mut self) {
        self.inner.first();
    }

    fn next(&mut self) {
        // the wrapped cursor saturates at done, so overshooting is safe
        for _ in 0..self.step {
            self.inner.next();
        }
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }

    fn current(&self) -> Result<&T, ContainerError> {
        self.inner.current()
    }
}
