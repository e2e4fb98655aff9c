// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Nodes and the recursive LLRB algorithms.
//!
//! Every mutating function consumes an owned subtree and returns the new
//! root of that subtree; the caller rebinds its link. There are no parent
//! pointers, so nothing can go stale during a rotation.
//!
//! Colours live on nodes but describe links: `red` is the colour of the link
//! from the parent down to this node. A missing child counts as black.
//!
//! The tree descends left when the node orders before the item, so larger
//! items hang to the left and the left-most node holds the largest item.
//! Pre-order walks and probe counts depend on this orientation.

use std::cmp::Ordering;

use crate::item::Item;
use crate::item::compare;
use crate::profiling;

/// An owning link to a subtree, absent for an empty subtree.
pub(crate) type Link = Option<Box<Node>>;

pub(crate) struct Node {
    pub(crate) item: Box<dyn Item>,
    pub(crate) left: Link,
    pub(crate) right: Link,
    pub(crate) red: bool,
}

impl Node {
    /// New nodes always hang from a red link.
    pub(crate) fn new(item: Box<dyn Item>) -> Box<Node> {
        return Box::new(Node {
            item,
            left: None,
            right: None,
            red: true,
        });
    }
}

#[inline]
pub(crate) fn is_red(link: &Link) -> bool {
    return matches!(link, Some(node) if node.red);
}

/// Whether the left child of `link` is red.
#[inline]
fn is_left_red(link: &Link) -> bool {
    return match link {
        Some(node) => is_red(&node.left),
        None => false,
    };
}

fn flip_colours(node: &mut Node) {
    node.red = !node.red;
    if let Some(left) = node.left.as_mut() {
        left.red = !left.red;
    }
    if let Some(right) = node.right.as_mut() {
        right.red = !right.red;
    }
    profiling::flip();
}

fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let mut pivot = node.right.take().expect("rotate_left needs a right child");
    node.right = pivot.left.take();
    pivot.red = node.red;
    node.red = true;
    pivot.left = Some(node);
    profiling::rotation();
    return pivot;
}

fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let mut pivot = node.left.take().expect("rotate_right needs a left child");
    node.left = pivot.right.take();
    pivot.red = node.red;
    node.red = true;
    pivot.right = Some(node);
    profiling::rotation();
    return pivot;
}

/// Local repair applied on the way back up. Order matters.
fn fix_up(mut node: Box<Node>) -> Box<Node> {
    if is_red(&node.right) && !is_red(&node.left) {
        node = rotate_left(node);
    }
    if is_red(&node.left) && is_left_red(&node.left) {
        node = rotate_right(node);
    }
    if is_red(&node.left) && is_red(&node.right) {
        flip_colours(&mut node);
    }
    return node;
}

/// Make the left child or one of its children red before descending left.
fn move_red_left(mut node: Box<Node>) -> Box<Node> {
    flip_colours(&mut node);
    if is_left_red(&node.right) {
        node.right = node.right.take().map(rotate_right);
        node = rotate_left(node);
        flip_colours(&mut node);
    }
    return node;
}

/// Make the right child or one of its children red before descending right.
fn move_red_right(mut node: Box<Node>) -> Box<Node> {
    flip_colours(&mut node);
    if is_left_red(&node.left) {
        node = rotate_right(node);
        flip_colours(&mut node);
    }
    return node;
}

/// Where `item` sits relative to `node`: `Less` descends left, `Greater`
/// descends right.
#[inline]
fn direction(node: &Node, item: &dyn Item) -> Ordering {
    return compare(&*node.item, item);
}

/// Walk down from `link` looking for `item`.
/// Returns the matching node, if any, and the number of nodes probed.
pub(crate) fn find<'a>(mut link: &'a Link, item: &dyn Item) -> (Option<&'a Node>, usize) {
    let mut probes = 0;
    while let Some(node) = link.as_deref() {
        probes += 1;
        match direction(node, item) {
            Ordering::Less => link = &node.left,
            Ordering::Greater => link = &node.right,
            Ordering::Equal => return (Some(node), probes),
        }
    }
    return (None, probes);
}

/// The largest item's node.
pub(crate) fn leftmost(link: &Link) -> Option<&Node> {
    let mut node = link.as_deref()?;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    return Some(node);
}

/// The smallest item's node.
pub(crate) fn rightmost(link: &Link) -> Option<&Node> {
    let mut node = link.as_deref()?;
    while let Some(right) = node.right.as_deref() {
        node = right;
    }
    return Some(node);
}

/// Insert `item` below `link`. Equal items are left in place and the new
/// one is dropped. Returns the new subtree root and whether `item` went in.
pub(crate) fn insert(link: Link, item: Box<dyn Item>) -> (Box<Node>, bool) {
    let mut node = match link {
        Some(node) => node,
        None => return (Node::new(item), true),
    };

    let inserted = match direction(&node, &*item) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), item);
            node.left = Some(left);
            inserted
        }
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), item);
            node.right = Some(right);
            inserted
        }
        Ordering::Equal => false,
    };

    return (fix_up(node), inserted);
}

/// Remove the left-most node of the subtree rooted at `node`.
/// Returns the new subtree root and the item that was removed.
pub(crate) fn delete_leftmost(mut node: Box<Node>) -> (Link, Box<dyn Item>) {
    if node.left.is_none() {
        // A node with no left child has no right child either.
        let Node { item, right, .. } = *node;
        return (right, item);
    }

    if !is_red(&node.left) && !is_left_red(&node.left) {
        node = move_red_left(node);
    }

    let left = node.left.take().expect("move_red_left keeps a left child");
    let (left, leftmost) = delete_leftmost(left);
    node.left = left;

    return (Some(fix_up(node)), leftmost);
}

/// Remove the right-most node of the subtree rooted at `node`.
/// Returns the new subtree root and the item that was removed.
pub(crate) fn delete_rightmost(mut node: Box<Node>) -> (Link, Box<dyn Item>) {
    if is_red(&node.left) {
        node = rotate_right(node);
    }

    if node.right.is_none() {
        // No right child and a black-balanced tree means no left child.
        let Node { item, left, .. } = *node;
        debug_assert!(left.is_none());
        return (left, item);
    }

    if !is_red(&node.right) && !is_left_red(&node.right) {
        node = move_red_right(node);
    }

    let right = node.right.take().expect("move_red_right keeps a right child");
    let (right, rightmost) = delete_rightmost(right);
    node.right = right;

    return (Some(fix_up(node)), rightmost);
}

/// Remove the item equal to `item` from the subtree rooted at `node`.
/// Returns the new subtree root and the removed item, if it was found.
pub(crate) fn delete(mut node: Box<Node>, item: &dyn Item) -> (Link, Option<Box<dyn Item>>) {
    let removed;

    if direction(&node, item) == Ordering::Less {
        if node.left.is_none() {
            return (Some(fix_up(node)), None);
        }
        if !is_red(&node.left) && !is_left_red(&node.left) {
            node = move_red_left(node);
        }
        let left = node.left.take().expect("move_red_left keeps a left child");
        let (left, taken) = delete(left, item);
        node.left = left;
        removed = taken;
    } else {
        if is_red(&node.left) {
            node = rotate_right(node);
        }

        if direction(&node, item) == Ordering::Equal && node.right.is_none() {
            // No right child and a black-balanced tree means no left child.
            let Node { item, left, .. } = *node;
            debug_assert!(left.is_none());
            return (left, Some(item));
        }

        if node.right.is_some() && !is_red(&node.right) && !is_left_red(&node.right) {
            node = move_red_right(node);
        }

        if direction(&node, item) == Ordering::Equal {
            let right = node.right.take().expect("matched node keeps its right child");
            let (right, next) = delete_leftmost(right);
            node.right = right;
            removed = Some(std::mem::replace(&mut node.item, next));
        } else {
            removed = match node.right.take() {
                Some(right) => {
                    let (right, taken) = delete(right, item);
                    node.right = right;
                    taken
                }
                None => None,
            };
        }
    }

    return (Some(fix_up(node)), removed);
}
