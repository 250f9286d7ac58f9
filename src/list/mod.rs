pub mod array;
pub mod sentinel;

use crate::error::{IndexError, Result};
use crate::types::{Index, NOT_FOUND, Value};

/// Ordered, 0-indexed sequence of integers.
///
/// Both engines honor the same positional semantics:
///
/// ```text
/// insert positions:   0   1   2   3        add(i, v)  needs 0 <= i <= len
///                   [ a | b | c ]
/// element indices:    0   1   2            get/remove need 0 <= i < len
/// ```
///
/// Every mutating call either completes or, on a bad index, reports the
/// error before touching the list.
pub trait IntList {
    /// Forward iterator over the live elements.
    type Iter<'a>: Iterator<Item = Value>
    where
        Self: 'a;

    /// Insert at index 0, shifting everything right.
    fn add_front(&mut self, value: Value);

    /// Append after the last element.
    fn add_back(&mut self, value: Value);

    /// Insert so that `get(index) == value` afterwards.
    fn add(&mut self, index: Index, value: Value) -> Result<()>;

    /// Remove the first element. `None` and no change on an empty list.
    fn remove_front(&mut self) -> Option<Value>;

    /// Remove the last element. `None` and no change on an empty list.
    fn remove_back(&mut self) -> Option<Value>;

    /// Remove and return the element at `index`.
    fn remove(&mut self, index: Index) -> Result<Value>;

    /// Element at `index`.
    fn get(&self, index: Index) -> Result<Value>;

    /// First index holding `value`, or [`NOT_FOUND`].
    fn index_of(&self, value: Value) -> Index;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Drop every element and return to freshly-constructed storage.
    fn clear(&mut self);

    /// Forward pass over the elements present now.
    fn iter(&self) -> Self::Iter<'_>;

    fn contains(&self, value: Value) -> bool {
        self.index_of(value) != NOT_FOUND
    }

    /// `index_of` as an `Option`.
    fn position(&self, value: Value) -> Option<usize> {
        usize::try_from(self.index_of(value)).ok()
    }

    fn to_vec(&self) -> Vec<Value> {
        self.iter().collect()
    }
}

/// Validate an insertion point: `0 <= index <= size`.
pub(crate) fn check_position(index: Index, size: usize) -> Result<usize> {
    let pos = usize::try_from(index).map_err(|_| IndexError::Negative { index })?;
    if pos > size {
        return Err(IndexError::OutOfRange { index, max: size }.into());
    }
    Ok(pos)
}

/// Validate an element index: `0 <= index < size`.
pub(crate) fn check_element(index: Index, size: usize) -> Result<usize> {
    let pos = usize::try_from(index).map_err(|_| IndexError::Negative { index })?;
    if size == 0 {
        return Err(IndexError::Empty { index }.into());
    }
    if pos >= size {
        return Err(IndexError::OutOfRange { index, max: size - 1 }.into());
    }
    Ok(pos)
}
