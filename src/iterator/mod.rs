use crate::error::Result;
use crate::types::Value;

/// Explicit forward cursor shared by both list engines.
///
/// A cursor starts on index 0 and walks toward the end, one element per
/// `advance`. It is single-pass: once invalid it stays invalid, and a new
/// pass needs a fresh cursor from the list's `iter()`.
///
/// Every cursor type also implements `Iterator<Item = Value>`, which is the
/// usual way to consume it; this trait exposes the positioned view.
pub trait Cursor {
    /// Returns true if the cursor is positioned at a live element.
    fn is_valid(&self) -> bool;

    /// Returns the current element, or `Error::Exhausted` past the end.
    fn value(&self) -> Result<Value>;

    /// Moves to the next element. Returns `Error::Exhausted` if the cursor
    /// was already past the last element.
    fn advance(&mut self) -> Result<()>;
}
