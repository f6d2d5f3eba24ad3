//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one. Supports ordered insertion, removal, membership search, and in-order
//! traversal; duplicate values are silently ignored on insert.

extern crate serde;
#[macro_use]
extern crate serde_derive;

mod node;
mod set;
mod tree;

pub use self::set::{AvlSet, AvlSetIntoIter, AvlSetIter};
