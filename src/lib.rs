// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Heteroset - ordered sets of heterogeneous items.
//!
//! A [`HeteroSet`] stores values of any number of concrete types in one
//! left-leaning red-black tree. Items are ordered by their [`Kind`] first and
//! by their own [`Item::compare`] second, so the set is a total order over the
//! disjoint union of every kind it holds.
//!
//! # Quick Start
//!
//! ```
//! use heteroset::HeteroSet;
//!
//! let mut set = HeteroSet::new();
//! for n in [5i64, 3, 8, 1, 4, 7, 9] {
//!     set.insert(n);
//! }
//! set.insert("five");
//!
//! assert_eq!(set.len(), 8);
//! assert!(set.contains(&4i64).0);
//! assert!(!set.contains(&6i64).0);
//!
//! assert!(set.delete(&3i64));
//! assert!(!set.delete(&3i64));
//! assert_eq!(set.len(), 7);
//!
//! // `iter` walks the tree in pre-order; `iter_sorted` ascends.
//! let sorted: Vec<i64> = set
//!     .iter_sorted()
//!     .filter_map(|item| item.downcast_ref::<i64>().copied())
//!     .collect();
//! assert_eq!(sorted, vec![1, 4, 5, 7, 8, 9]);
//! ```

pub mod item;
pub mod llrb;
pub mod profiling;
pub mod set;

pub use item::Item;
pub use item::Kind;
pub use item::compare;
pub use llrb::Shape;
pub use llrb::Violation;
pub use set::HeteroSet;
