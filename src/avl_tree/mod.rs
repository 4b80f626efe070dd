//! Self-balancing binary search tree where the heights of the two child
//! subtrees of any node differ by at most one. Nodes live in a typed arena
//! and carry parent back-links, so cursors can walk to the in-order successor
//! or predecessor without an auxiliary stack.

mod cursor;
mod map;
mod multiset;
mod node;
mod set;
mod tree;

pub use self::cursor::Cursor;
pub use self::map::{AvlMap, AvlMapIntoIter, AvlMapIter};
pub use self::multiset::{AvlMultiset, AvlMultisetIntoIter, AvlMultisetIter, MultisetCursor};
pub use self::set::{AvlSet, AvlSetIntoIter, AvlSetIter};

use std::error;
use std::fmt;
use std::result;

/// The errors surfaced by cursor navigation and keyed lookups.
///
/// Every bad precondition is reported through a `Result`; no operation
/// silently corrupts the container or returns a partial result.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Advanced a cursor already past the last element, or retreated a cursor
    /// at the first element or at the end sentinel.
    OutOfRange,
    /// Dereferenced a cursor that references no node.
    NullDereference,
    /// Looked up a key that does not exist in the map.
    KeyNotFound,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfRange => write!(f, "cursor navigated out of range"),
            Error::NullDereference => write!(f, "cursor references no node"),
            Error::KeyNotFound => write!(f, "key does not exist"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
