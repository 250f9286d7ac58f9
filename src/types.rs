/// Element stored in every list.
pub type Value = i32;

/// Caller-supplied position. Signed so that a negative argument can be
/// reported as such instead of wrapping.
pub type Index = isize;

/// Returned by `index_of` when the value is absent.
pub const NOT_FOUND: Index = -1;

/// Slots allocated by a fresh buffer, and the floor it shrinks back to.
pub const DEFAULT_CAPACITY: usize = 10;
