//! Ordered associative containers — a set, a map, and a multiset — all backed
//! by a single arena-allocated AVL tree with parent back-links. The parent
//! links make bidirectional in-order cursors possible without auxiliary
//! stacks, and cursors stay valid across structural mutation of other nodes.

#[macro_use]
extern crate serde_derive;

mod entry;
pub mod arena;
pub mod avl_tree;
