//! Fixed-capacity LIFO stack.
//!
//! The backing `Vec` is created with its full capacity up front and never
//! grows past it; `push` checks the bound before appending, so the vector
//! never reallocates. Capacity is fixed at construction and the stack is
//! owned by its caller rather than living in process-wide state.

use crate::error::{StackError, StackResult};

/// A bounded LIFO stack.
///
/// `push` on a full stack and `pop` on an empty stack are reported, non-fatal
/// conditions: overflow returns [`StackError::Overflow`] and leaves the stack
/// unchanged, while an empty pop is an ordinary `None` (or
/// [`StackError::Underflow`] via [`try_pop`](Self::try_pop)). An empty stack
/// is therefore always distinguishable from one holding zero values.
///
/// # Example
/// ```
/// use cairn_stack::FixedStack;
///
/// let mut stack = FixedStack::new(1024);
/// stack.push(30u64)?;
/// stack.push(38)?;
/// assert_eq!(stack.pop(), Some(38));
/// assert_eq!(stack.pop(), Some(30));
/// assert_eq!(stack.pop(), None);
/// # Ok::<(), cairn_stack::StackError>(())
/// ```
#[derive(Debug)]
pub struct FixedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Clone> Clone for FixedStack<T> {
    // Derived Clone would size the backing vector to the current length;
    // rebuild it at full capacity so the no-reallocation guarantee holds for
    // clones too.
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend(self.items.iter().cloned());
        Self {
            items,
            capacity: self.capacity,
        }
    }
}

impl<T> FixedStack<T> {
    /// Create an empty stack holding at most `capacity` elements.
    ///
    /// Capacity 0 is legal: every push overflows, every pop underflows.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push `value` onto the stack.
    ///
    /// On overflow the stack is unchanged and `value` is dropped; the
    /// condition is reported through the returned error and a `warn`-level
    /// diagnostic.
    pub fn push(&mut self, value: T) -> StackResult<()> {
        if self.items.len() == self.capacity {
            return Err(StackError::overflow(self.capacity));
        }
        self.items.push(value);
        Ok(())
    }

    /// Pop the most recently pushed value, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Pop the most recently pushed value, reporting underflow as an error.
    ///
    /// Same as [`pop`](Self::pop) but the empty case is surfaced as
    /// [`StackError::Underflow`] with a `warn`-level diagnostic.
    pub fn try_pop(&mut self) -> StackResult<T> {
        self.items.pop().ok_or_else(StackError::underflow)
    }

    /// Borrow the most recently pushed value without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of elements currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` if the stack holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `true` if the stack holds exactly `capacity` elements.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Maximum element count, fixed at construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all elements, keeping the capacity.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
