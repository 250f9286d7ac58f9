use std::fmt;
use std::iter::FusedIterator;

use crate::config::Options;
use crate::error::{Error, Result};
use crate::iterator::Cursor;
use crate::list::{IntList, check_element, check_position};
use crate::types::{Index, NOT_FOUND, Value};

/// Integer list over one contiguous buffer.
///
/// `size` counts the live prefix of `storage`; everything from `size` to the
/// end of the buffer is spare capacity and never read.
///
/// ```text
///  storage: [ 4 | 8 | 15 | 16 | . | . | . ]
///             └── size = 4 ──┘
///             └──────── capacity = 7 ─────┘
/// ```
///
/// Reallocation replaces the whole buffer; the old one is dropped right away.
pub struct ArrayList {
    storage: Box<[Value]>,
    size: usize,
    options: Options,
}

impl ArrayList {
    /// Empty list with the default capacity and linear growth.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        let options = Options {
            initial_capacity: options.initial_capacity.max(1),
            ..options
        };
        ArrayList {
            storage: vec![0; options.initial_capacity].into_boxed_slice(),
            size: 0,
            options,
        }
    }

    /// Allocated slots.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[Value] {
        &self.storage[..self.size]
    }

    /// Make room for one more element.
    fn reserve_one(&mut self) {
        if self.size == self.capacity() {
            let grown = self.options.growth.grown(self.capacity());
            self.reallocate(grown);
        }
    }

    /// Move the live prefix into a fresh buffer of `capacity` slots.
    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.size);
        tracing::debug!(
            old_capacity = self.capacity(),
            new_capacity = capacity,
            size = self.size,
            "reallocating list buffer"
        );
        let mut storage = vec![0; capacity].into_boxed_slice();
        storage[..self.size].copy_from_slice(&self.storage[..self.size]);
        self.storage = storage;
    }

    /// Shift `[pos, size)` right by one and write `value` at `pos`.
    fn insert_at(&mut self, pos: usize, value: Value) {
        self.reserve_one();
        self.storage.copy_within(pos..self.size, pos + 1);
        self.storage[pos] = value;
        self.size += 1;
    }

    /// Shift `[pos + 1, size)` left by one, returning what was at `pos`.
    fn take_at(&mut self, pos: usize) -> Value {
        let value = self.storage[pos];
        self.storage.copy_within(pos + 1..self.size, pos);
        self.size -= 1;
        value
    }
}

impl IntList for ArrayList {
    type Iter<'a> = ArrayIter<'a>;

    fn add_front(&mut self, value: Value) {
        self.insert_at(0, value);
    }

    fn add_back(&mut self, value: Value) {
        self.insert_at(self.size, value);
    }

    fn add(&mut self, index: Index, value: Value) -> Result<()> {
        let pos = check_position(index, self.size)?;
        self.insert_at(pos, value);
        Ok(())
    }

    fn remove_front(&mut self) -> Option<Value> {
        if self.size == 0 {
            return None;
        }
        let value = self.take_at(0);
        let shrunk = self.options.growth.shrunk(
            self.size,
            self.capacity(),
            self.options.initial_capacity,
        );
        if let Some(capacity) = shrunk {
            self.reallocate(capacity);
        }
        Some(value)
    }

    fn remove_back(&mut self) -> Option<Value> {
        if self.size == 0 {
            return None;
        }
        Some(self.take_at(self.size - 1))
    }

    fn remove(&mut self, index: Index) -> Result<Value> {
        let pos = check_element(index, self.size)?;
        Ok(self.take_at(pos))
    }

    fn get(&self, index: Index) -> Result<Value> {
        let pos = check_element(index, self.size)?;
        Ok(self.storage[pos])
    }

    fn index_of(&self, value: Value) -> Index {
        self.as_slice()
            .iter()
            .position(|&v| v == value)
            .map_or(NOT_FOUND, |i| i as Index)
    }

    fn contains(&self, value: Value) -> bool {
        self.as_slice().contains(&value)
    }

    fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn len(&self) -> usize {
        self.size
    }

    fn clear(&mut self) {
        tracing::debug!(size = self.size, "clearing list buffer");
        self.storage = vec![0; self.options.initial_capacity].into_boxed_slice();
        self.size = 0;
    }

    fn iter(&self) -> ArrayIter<'_> {
        ArrayIter {
            live: self.as_slice(),
            index: 0,
        }
    }
}

impl Default for ArrayList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ArrayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl PartialEq for ArrayList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ArrayList {}

impl Extend<Value> for ArrayList {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.add_back(value);
        }
    }
}

impl FromIterator<Value> for ArrayList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut list = ArrayList::new();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a ArrayList {
    type Item = Value;
    type IntoIter = ArrayIter<'a>;

    fn into_iter(self) -> ArrayIter<'a> {
        self.iter()
    }
}

/// Cursor over the live prefix of an [`ArrayList`] as it was when created.
pub struct ArrayIter<'a> {
    live: &'a [Value],
    index: usize,
}

impl Cursor for ArrayIter<'_> {
    fn is_valid(&self) -> bool {
        self.index < self.live.len()
    }

    fn value(&self) -> Result<Value> {
        self.live.get(self.index).copied().ok_or(Error::Exhausted)
    }

    fn advance(&mut self) -> Result<()> {
        if !self.is_valid() {
            return Err(Error::Exhausted);
        }
        self.index += 1;
        Ok(())
    }
}

impl Iterator for ArrayIter<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let value = self.value().ok()?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.live.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ArrayIter<'_> {}

impl FusedIterator for ArrayIter<'_> {}
