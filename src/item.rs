// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! The item capability and the heterogeneous total order.
//!
//! A set holds values of many concrete types at once. Every stored value
//! implements [`Item`], which gives a three-way comparison against any other
//! item. The set never trusts that comparison across types though: items are
//! first partitioned by their [`Kind`], kinds are ordered by name, and only
//! items of the same kind are handed to [`Item::compare`].
//!
//! ```
//! use std::cmp::Ordering;
//! use heteroset::item::{compare, Item};
//!
//! // Same kind: the item's own order.
//! assert_eq!(compare(&1i64, &2i64), Ordering::Less);
//!
//! // Different kinds: kind names decide, whatever the values are.
//! assert_eq!(compare(&100i64, &1u8), Ordering::Less); // "i64" < "u8"
//! ```

use std::any::Any;
use std::any::TypeId;
use std::any::type_name;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

/// A value that can live in a [`HeteroSet`](crate::HeteroSet).
///
/// Implementations must be antisymmetric:
/// - `a.compare(b) == Less` implies `b.compare(a) == Greater`
/// - `a.compare(b) == Equal` implies `b.compare(a) == Equal`
///
/// and transitive within their own kind. The set only calls `compare` on two
/// items of the same [`Kind`], so most implementations downcast `other` and
/// fall back to [`compare`] when the downcast fails:
///
/// ```
/// use std::cmp::Ordering;
/// use heteroset::item::{compare, Item};
///
/// struct Version(u32, u32);
///
/// impl Item for Version {
///     fn compare(&self, other: &dyn Item) -> Ordering {
///         return match other.downcast_ref::<Version>() {
///             Some(other) => (self.0, self.1).cmp(&(other.0, other.1)),
///             None => compare(self, other),
///         };
///     }
/// }
/// ```
// The explicit `'static` makes `&dyn Item` default to `dyn Item + 'static`,
// which the downcasting helpers below are defined on.
pub trait Item: Any + 'static {
    /// Three-way comparison against another item.
    fn compare(&self, other: &dyn Item) -> Ordering;

    /// The kind this item is partitioned under.
    ///
    /// The default is the implementing type. Overriding it merges or splits
    /// kinds; every item of one kind must then be comparable with the others.
    fn kind(&self) -> Kind {
        return Kind::of::<Self>();
    }
}

impl dyn Item {
    /// Recover the concrete type of an item.
    pub fn downcast_ref<T: Item>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        return any.downcast_ref::<T>();
    }

    /// Whether this item is a `T`.
    pub fn is<T: Item>(&self) -> bool {
        let any: &dyn Any = self;
        return any.is::<T>();
    }
}

impl fmt::Debug for dyn Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "Item<{}>", self.kind().name());
    }
}

/// The identity used to keep different item types apart.
///
/// Kinds order by their type name, byte by byte, with a shorter name first
/// when one is a prefix of the other. Two distinct types may print the same
/// name (two versions of one crate, say); the `TypeId` breaks that tie, so
/// the order is total within one build.
#[derive(Clone, Copy)]
pub struct Kind {
    name: &'static str,
    id: TypeId,
}

impl Kind {
    /// The kind of `T`.
    pub fn of<T: ?Sized + 'static>() -> Kind {
        return Kind {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        };
    }

    /// Fully qualified type name.
    pub fn name(&self) -> &'static str {
        return self.name;
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        return self.id == other.id;
    }
}

impl Eq for Kind {}

impl Hash for Kind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Kind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return Some(self.cmp(other));
    }
}

impl Ord for Kind {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.id == other.id {
            return Ordering::Equal;
        }
        return self.name.as_bytes()
            .cmp(other.name.as_bytes())
            .then_with(|| self.id.cmp(&other.id));
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_tuple("Kind").field(&self.name).finish();
    }
}

/// The combined order every set operation is built on.
///
/// Kind first, then the item's own [`Item::compare`] for items of the same
/// kind. Pure: no state is read or written besides the two items.
pub fn compare(a: &dyn Item, b: &dyn Item) -> Ordering {
    return match a.kind().cmp(&b.kind()) {
        Ordering::Equal => a.compare(b),
        unequal => unequal,
    };
}

macro_rules! ord_item {
    ($($ty:ty),* $(,)?) => {$(
        impl Item for $ty {
            fn compare(&self, other: &dyn Item) -> Ordering {
                return match other.downcast_ref::<$ty>() {
                    Some(other) => Ord::cmp(self, other),
                    None => self.kind().cmp(&other.kind()),
                };
            }
        }
    )*};
}

ord_item!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    bool, char, (), String, &'static str,
);

// Floats order by `total_cmp`: -0.0 < 0.0 and NaNs sort to the ends.
macro_rules! float_item {
    ($($ty:ty),* $(,)?) => {$(
        impl Item for $ty {
            fn compare(&self, other: &dyn Item) -> Ordering {
                return match other.downcast_ref::<$ty>() {
                    Some(other) => self.total_cmp(other),
                    None => self.kind().cmp(&other.kind()),
                };
            }
        }
    )*};
}

float_item!(f32, f64);
