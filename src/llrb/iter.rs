// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Explicit-stack traversals.
//!
//! Neither walk recurses, so traversal depth never touches the call stack.
//! Both borrow the tree, which rules out mutation while a walk is live, and
//! both can be dropped half way with nothing left behind.

use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::item::Item;
use crate::llrb::node::Link;
use crate::llrb::node::Node;

/// Inline stack capacity. An LLRB is at most twice as tall as a perfect
/// tree, so anything up to 2^32 items never spills.
const STACK_INLINE: usize = 64;

type Stack<'a> = SmallVec<[&'a Node; STACK_INLINE]>;

/// Pre-order traversal: pop a node, push its right child, push its left
/// child, yield the node's item.
///
/// The order is root first, then the left subtree, then the right subtree.
/// Larger items live on the left, so siblings come out larger first. It is
/// *not* sorted; use [`SortedIter`] for ascending order.
pub struct Iter<'a> {
    stack: Stack<'a>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: &'a Link, len: usize) -> Iter<'a> {
        let mut stack = Stack::new();
        if let Some(node) = root.as_deref() {
            stack.push(node);
        }
        return Iter { stack, remaining: len };
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a dyn Item;

    fn next(&mut self) -> Option<&'a dyn Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        self.remaining -= 1;
        return Some(&*node.item);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Reverse in-order traversal yielding items in ascending combined order.
///
/// Smaller items live on the right, so this keeps the right spine of the
/// unvisited part of the tree on the stack: pop a node, yield it, then push
/// the right spine of its left subtree.
pub struct SortedIter<'a> {
    stack: Stack<'a>,
    remaining: usize,
}

impl<'a> SortedIter<'a> {
    pub(crate) fn new(root: &'a Link, len: usize) -> SortedIter<'a> {
        let mut iter = SortedIter {
            stack: Stack::new(),
            remaining: len,
        };
        iter.push_right_spine(root);
        return iter;
    }

    fn push_right_spine(&mut self, mut link: &'a Link) {
        while let Some(node) = link.as_deref() {
            self.stack.push(node);
            link = &node.right;
        }
    }
}

impl<'a> Iterator for SortedIter<'a> {
    type Item = &'a dyn Item;

    fn next(&mut self) -> Option<&'a dyn Item> {
        let node = self.stack.pop()?;
        self.push_right_spine(&node.left);
        self.remaining -= 1;
        return Some(&*node.item);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl ExactSizeIterator for SortedIter<'_> {}

impl FusedIterator for SortedIter<'_> {}
