//! # Integer list engines
//!
//! One positional contract, [`IntList`], over two storage strategies:
//!
//! - [`ArrayList`] keeps elements in a single contiguous buffer with an
//!   explicit size counter. Capacity is separate from size and grows on
//!   demand, one slot at a time by default or geometrically via
//!   [`Growth::Doubling`].
//! - [`SentinelList`] is a doubly linked chain between two permanent
//!   sentinel nodes. Nodes live in an arena and link by handle, with freed
//!   slots recycled.
//!
//! Both engines report bad positions with the same [`IndexError`] causes:
//! negative, empty list, or out of range.
//!
//! ```
//! use intlist_engine::{ArrayList, IntList, SentinelList};
//!
//! let mut a = ArrayList::new();
//! let mut s = SentinelList::new();
//!
//! a.add_back(1);
//! a.add_back(2);
//! a.add_front(0);
//! s.extend(a.iter());
//!
//! assert_eq!(a.to_vec(), vec![0, 1, 2]);
//! assert_eq!(s.get(1).unwrap(), 1);
//! ```

pub mod config;
pub mod error;
pub mod iterator;
pub mod list;
pub mod types;

// Public re-exports for the top-level API
pub use config::{Growth, Options};
pub use error::{Error, IndexError, Result};
pub use iterator::Cursor;
pub use list::IntList;
pub use list::array::{ArrayIter, ArrayList};
pub use list::sentinel::{SentinelIter, SentinelList};
pub use types::{DEFAULT_CAPACITY, Index, NOT_FOUND, Value};
