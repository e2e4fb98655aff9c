// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Full structural validation of a tree.
//!
//! Walks every node, so this is O(n). Meant for tests, fuzzing and
//! debugging, never for the hot path.

use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

use crate::item::compare;
use crate::llrb::iter::SortedIter;
use crate::llrb::node::Link;
use crate::llrb::node::is_red;

/// Measurements of a tree that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    /// Number of items.
    pub len: usize,
    /// Nodes on the longest root-to-leaf path.
    pub height: usize,
    /// Black links on every root-to-leaf path, counting the root.
    pub black_height: usize,
}

/// An LLRB invariant that does not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The root hangs from a red link.
    RedRoot,
    /// Some node has a red right child.
    RedRightLink,
    /// A red node has a red left child.
    DoubleRed,
    /// Two sibling subtrees have different black heights.
    BlackImbalance { left: usize, right: usize },
    /// The item at this ascending position is not greater than the one before.
    OutOfOrder { index: usize },
    /// The stored count disagrees with the number of nodes.
    CountMismatch { expected: usize, found: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Violation::RedRoot => write!(f, "root link is red"),
            Violation::RedRightLink => write!(f, "red right link"),
            Violation::DoubleRed => write!(f, "red node with a red left child"),
            Violation::BlackImbalance { left, right } => {
                write!(f, "black height {} on the left but {} on the right", left, right)
            }
            Violation::OutOfOrder { index } => {
                write!(f, "item {} is not greater than its predecessor", index)
            }
            Violation::CountMismatch { expected, found } => {
                write!(f, "count says {} items but the tree holds {}", expected, found)
            }
        };
    }
}

impl Error for Violation {}

/// Check every invariant of the tree rooted at `root` holding `len` items.
pub(crate) fn validate(root: &Link, len: usize) -> Result<Shape, Violation> {
    if is_red(root) {
        return Err(Violation::RedRoot);
    }

    let Measure { black_height, height, count } = measure(root)?;
    if count != len {
        return Err(Violation::CountMismatch { expected: len, found: count });
    }

    let mut previous = None;
    for (index, item) in SortedIter::new(root, count).enumerate() {
        if let Some(previous) = previous {
            if compare(previous, item) != Ordering::Less {
                return Err(Violation::OutOfOrder { index });
            }
        }
        previous = Some(item);
    }

    return Ok(Shape { len, height, black_height });
}

struct Measure {
    black_height: usize,
    height: usize,
    count: usize,
}

fn measure(link: &Link) -> Result<Measure, Violation> {
    let Some(node) = link.as_deref() else {
        return Ok(Measure { black_height: 0, height: 0, count: 0 });
    };

    if is_red(&node.right) {
        return Err(Violation::RedRightLink);
    }
    if node.red && is_red(&node.left) {
        return Err(Violation::DoubleRed);
    }

    let left = measure(&node.left)?;
    let right = measure(&node.right)?;
    if left.black_height != right.black_height {
        return Err(Violation::BlackImbalance {
            left: left.black_height,
            right: right.black_height,
        });
    }

    let black = if node.red { 0 } else { 1 };
    return Ok(Measure {
        black_height: left.black_height + black,
        height: 1 + left.height.max(right.height),
        count: 1 + left.count + right.count,
    });
}
