// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! The set handle.

use std::fmt;

use log::debug;
use log::trace;

use crate::item::Item;
use crate::llrb::Iter;
use crate::llrb::Shape;
use crate::llrb::SortedIter;
use crate::llrb::Violation;
use crate::llrb::check;
use crate::llrb::node;
use crate::llrb::node::Link;
use crate::profiling;

/// An ordered set of heterogeneous items.
///
/// Items of different types coexist; they are ordered first by [`Kind`]
/// and then, within a kind, by [`Item::compare`]. Inserting an item equal
/// to one already present leaves the set unchanged.
///
/// The set is single-writer: every mutating method takes `&mut self`, and
/// traversals borrow the set, so no walk can overlap a mutation.
///
/// [`Kind`]: crate::item::Kind
#[derive(Default)]
pub struct HeteroSet {
    root: Link,
    len: usize,
}

impl HeteroSet {
    /// Create a new empty set.
    pub fn new() -> HeteroSet {
        return HeteroSet { root: None, len: 0 };
    }

    /// Number of distinct items. O(1).
    pub fn len(&self) -> usize {
        return self.len;
    }

    /// Whether the set holds no items.
    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Look for an item equal to `item`.
    /// Returns whether it was found and how many nodes were probed.
    pub fn contains(&self, item: &dyn Item) -> (bool, usize) {
        let (node, probes) = node::find(&self.root, item);
        profiling::probe(probes);
        return (node.is_some(), probes);
    }

    /// The stored item equal to `item`, if any.
    pub fn get(&self, item: &dyn Item) -> Option<&dyn Item> {
        let (node, probes) = node::find(&self.root, item);
        profiling::probe(probes);
        return node.map(|node| &*node.item);
    }

    /// Smallest item in the combined order.
    pub fn first(&self) -> Option<&dyn Item> {
        return node::rightmost(&self.root).map(|node| &*node.item);
    }

    /// Largest item in the combined order.
    pub fn last(&self) -> Option<&dyn Item> {
        return node::leftmost(&self.root).map(|node| &*node.item);
    }

    /// Add `item`. Returns false, dropping `item`, if an equal item is
    /// already present; the stored one is not replaced.
    pub fn insert<T: Item>(&mut self, item: T) -> bool {
        return self.insert_boxed(Box::new(item));
    }

    /// Add an already boxed item. See [`HeteroSet::insert`].
    pub fn insert_boxed(&mut self, item: Box<dyn Item>) -> bool {
        let kind = item.kind();
        let (mut root, inserted) = node::insert(self.root.take(), item);
        root.red = false;
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        trace!("insert {}: inserted={} len={}", kind.name(), inserted, self.len);
        return inserted;
    }

    /// Remove the item equal to `item`. Returns false if there is none.
    pub fn delete(&mut self, item: &dyn Item) -> bool {
        return self.take(item).is_some();
    }

    /// Remove and return the stored item equal to `item`.
    ///
    /// An absent item leaves the tree untouched: the search runs first and
    /// the restructuring descent only starts once a match is known to exist.
    /// That search is not counted in [`profiling::PROBES`].
    pub fn take(&mut self, item: &dyn Item) -> Option<Box<dyn Item>> {
        if node::find(&self.root, item).0.is_none() {
            trace!("delete {}: absent len={}", item.kind().name(), self.len);
            return None;
        }
        let root = self.root.take()?;

        let (mut root, removed) = node::delete(root, item);
        if let Some(root) = root.as_mut() {
            root.red = false;
        }
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        trace!("delete {}: removed={} len={}", item.kind().name(), removed.is_some(), self.len);
        return removed;
    }

    /// Remove and return the smallest item.
    pub fn pop_first(&mut self) -> Option<Box<dyn Item>> {
        let root = self.root.take()?;
        let (mut root, first) = node::delete_rightmost(root);
        if let Some(root) = root.as_mut() {
            root.red = false;
        }
        self.root = root;
        self.len -= 1;
        trace!("pop_first {}: len={}", first.kind().name(), self.len);
        return Some(first);
    }

    /// Drop every item.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Walk the tree in pre-order: each node before its left subtree, the
    /// left subtree before the right one. Larger items sit to the left.
    ///
    /// This is the tree's native traversal and is *not* sorted. Each call
    /// starts a fresh walk from the current root.
    pub fn iter(&self) -> Iter<'_> {
        return Iter::new(&self.root, self.len);
    }

    /// Walk the items in ascending combined order.
    pub fn iter_sorted(&self) -> SortedIter<'_> {
        return SortedIter::new(&self.root, self.len);
    }

    /// Nodes on the longest root-to-leaf path; 0 for an empty set.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&node::Node> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
                .flatten()
                .collect();
        }
        return height;
    }

    /// Check every structural invariant. O(n).
    pub fn validate(&self) -> Result<Shape, Violation> {
        let result = check::validate(&self.root, self.len);
        if let Err(violation) = &result {
            debug!("validate failed: {}", violation);
        }
        return result;
    }
}

impl<'a> IntoIterator for &'a HeteroSet {
    type Item = &'a dyn Item;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        return self.iter();
    }
}

impl fmt::Debug for HeteroSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_set().entries(self.iter_sorted()).finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(set: &HeteroSet) -> Vec<i64> {
        return set
            .iter_sorted()
            .map(|item| *item.downcast_ref::<i64>().unwrap())
            .collect();
    }

    #[test]
    fn new_set_is_empty() {
        let set = HeteroSet::new();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert_eq!(set.contains(&1i64), (false, 0));
        assert_eq!(set.height(), 0);
        assert!(set.first().is_none());
        set.validate().unwrap();
    }

    #[test]
    fn insert_then_contains() {
        let mut set = HeteroSet::new();
        assert!(set.insert(5i64));
        assert!(set.insert(3i64));
        assert!(!set.insert(5i64));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&3i64).0);
        assert!(!set.contains(&4i64).0);
        set.validate().unwrap();
    }

    #[test]
    fn root_is_black_after_every_insert() {
        let mut set = HeteroSet::new();
        for i in 0..64i64 {
            set.insert(i);
            assert!(!set.root.as_ref().unwrap().red);
        }
    }

    #[test]
    fn take_returns_the_stored_item() {
        let mut set = HeteroSet::new();
        set.insert(String::from("kept"));
        let taken = set.take(&String::from("kept")).unwrap();
        assert_eq!(taken.downcast_ref::<String>().unwrap(), "kept");
        assert!(set.is_empty());
        assert!(set.take(&String::from("kept")).is_none());
    }

    #[test]
    fn delete_on_empty_set_is_a_no_op() {
        let mut set = HeteroSet::new();
        assert!(!set.delete(&1i64));
        assert_eq!(set.len(), 0);
        set.validate().unwrap();
    }

    #[test]
    fn delete_absent_leaves_shape_alone() {
        let mut set = HeteroSet::new();
        for i in [5i64, 3, 8, 1, 4, 7, 9] {
            set.insert(i);
        }
        let before: Vec<i64> = set.iter().map(|item| *item.downcast_ref::<i64>().unwrap()).collect();
        assert!(!set.delete(&6i64));
        let after: Vec<i64> = set.iter().map(|item| *item.downcast_ref::<i64>().unwrap()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn pop_first_drains_in_order() {
        let mut set = HeteroSet::new();
        for i in [4i64, 1, 3, 5, 2] {
            set.insert(i);
        }
        let mut drained = vec![];
        while let Some(item) = set.pop_first() {
            drained.push(*item.downcast_ref::<i64>().unwrap());
            set.validate().unwrap();
        }
        assert_eq!(drained, vec![1, 2, 3, 4, 5]);
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn first_and_last() {
        let mut set = HeteroSet::new();
        for i in [4i64, 1, 9, 5] {
            set.insert(i);
        }
        assert_eq!(set.first().unwrap().downcast_ref::<i64>(), Some(&1));
        assert_eq!(set.last().unwrap().downcast_ref::<i64>(), Some(&9));
    }

    #[test]
    fn clear_drops_everything() {
        let mut set = HeteroSet::new();
        for i in 0..10i64 {
            set.insert(i);
        }
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
        assert!(set.insert(3i64));
    }

    #[test]
    fn height_stays_logarithmic() {
        let mut set = HeteroSet::new();
        for i in 0..1024i64 {
            set.insert(i);
        }
        // LLRB height is at most 2 lg n.
        assert!(set.height() <= 20);
        assert_eq!(set.validate().unwrap().height, set.height());
    }

    #[test]
    fn sorted_iteration_after_deletes() {
        let mut set = HeteroSet::new();
        for i in 0..20i64 {
            set.insert(i);
        }
        for i in (0..20i64).filter(|i| i % 3 == 0) {
            assert!(set.delete(&i));
            set.validate().unwrap();
        }
        let expected: Vec<i64> = (0..20).filter(|i| i % 3 != 0).collect();
        assert_eq!(sorted(&set), expected);
    }

    #[test]
    fn larger_items_walk_first() {
        let mut set = HeteroSet::new();
        for i in [1i64, 2, 3] {
            set.insert(i);
        }
        let walked: Vec<i64> = set.iter().map(|item| *item.downcast_ref::<i64>().unwrap()).collect();
        assert_eq!(walked, vec![2, 3, 1]);
        assert_eq!(sorted(&set), vec![1, 2, 3]);
    }

    #[test]
    fn debug_lists_kinds_in_order() {
        let mut set = HeteroSet::new();
        set.insert(2u8);
        set.insert(1i64);
        assert_eq!(format!("{:?}", set), "{Item<i64>, Item<u8>}");
    }
}
