use crate::types::DEFAULT_CAPACITY;

/// How the buffer engine grows when an insertion finds it full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Growth {
    /// One extra slot per reallocation. Bulk insertion is quadratic.
    #[default]
    Linear,
    /// Double the storage; shrink by half once a quarter full.
    Doubling,
}

impl Growth {
    /// Capacity to reallocate to when a buffer of `capacity` slots is full.
    pub(crate) fn grown(self, capacity: usize) -> usize {
        match self {
            Growth::Linear => capacity + 1,
            Growth::Doubling => capacity.saturating_mul(2).max(1),
        }
    }

    /// Capacity to shrink to after a front removal left `size` live elements,
    /// or `None` to keep the current storage.
    pub(crate) fn shrunk(self, size: usize, capacity: usize, floor: usize) -> Option<usize> {
        let target = match self {
            Growth::Linear if size >= floor => size,
            Growth::Doubling if size <= capacity / 4 => (capacity / 2).max(floor),
            _ => return None,
        };
        (target < capacity).then_some(target)
    }
}

/// Tuning for [`ArrayList`](crate::ArrayList).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Slots allocated up front and restored by `clear`. Never zero.
    pub initial_capacity: usize,
    /// Reallocation policy.
    pub growth: Growth,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            initial_capacity: DEFAULT_CAPACITY,
            growth: Growth::Linear,
        }
    }
}

impl Options {
    /// Set the initial capacity. Zero is raised to one.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity.max(1);
        self
    }

    /// Set the growth policy.
    pub fn with_growth(mut self, growth: Growth) -> Self {
        self.growth = growth;
        self
    }
}
