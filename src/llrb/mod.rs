// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Left-leaning red-black tree engine.
//!
//! This is the 2-3 variant described by Sedgewick: red links only ever
//! lean left and no node has two red links, so every LLRB tree corresponds
//! to exactly one 2-3 tree. Insertion splits temporary 4-nodes on the way
//! back up; deletion pushes red links down ahead of the search so the node
//! finally removed is never a lone 2-node.

pub(crate) mod check;
pub mod iter;
pub(crate) mod node;

pub use check::Shape;
pub use check::Violation;
pub use iter::Iter;
pub use iter::SortedIter;
