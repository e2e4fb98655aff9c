//! AFL fuzz harness for HeteroSet
//!
//! Replays byte-coded operations against a `BTreeSet` model and checks:
//! 1. Agreement: every insert/delete/pop reports what the model reports
//! 2. Balance: the tree passes full validation after every operation
//! 3. Completeness: traversals yield exactly the model's items
//!
//! Items come in three kinds so the kind tiebreak is exercised throughout.

use std::collections::BTreeSet;

use afl::fuzz;
use heteroset::HeteroSet;
use heteroset::Item;

/// Variants in kind-name order ("char" < "i16" < "u8"), so the derived `Ord`
/// agrees with the set's combined order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Value {
    Char(char),
    Short(i16),
    Byte(u8),
}

impl Value {
    fn from_bytes(kind: u8, a: u8, b: u8) -> Value {
        return match kind % 3 {
            0 => Value::Char((b'a' + a % 26) as char),
            1 => Value::Short(i16::from_le_bytes([a, b % 4])),
            _ => Value::Byte(a),
        };
    }

    fn from_item(item: &dyn Item) -> Value {
        if let Some(c) = item.downcast_ref::<char>() {
            return Value::Char(*c);
        }
        if let Some(n) = item.downcast_ref::<i16>() {
            return Value::Short(*n);
        }
        return Value::Byte(*item.downcast_ref::<u8>().expect("unknown kind"));
    }

    fn insert_into(self, set: &mut HeteroSet) -> bool {
        return match self {
            Value::Char(c) => set.insert(c),
            Value::Short(n) => set.insert(n),
            Value::Byte(b) => set.insert(b),
        };
    }

    fn delete_from(self, set: &mut HeteroSet) -> bool {
        return match self {
            Value::Char(c) => set.delete(&c),
            Value::Short(n) => set.delete(&n),
            Value::Byte(b) => set.delete(&b),
        };
    }
}

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Insert(Value),
    Delete(Value),
    PopFirst,
    Clear,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 16;
        let rest = &bytes[1..];

        match op_type {
            // Inserts dominate so trees actually grow.
            0..=8 if rest.len() >= 3 => {
                let value = Value::from_bytes(rest[0], rest[1], rest[2]);
                Some((FuzzOp::Insert(value), &rest[3..]))
            }
            9..=13 if rest.len() >= 3 => {
                let value = Value::from_bytes(rest[0], rest[1], rest[2]);
                Some((FuzzOp::Delete(value), &rest[3..]))
            }
            14 => Some((FuzzOp::PopFirst, rest)),
            15 => Some((FuzzOp::Clear, rest)),
            _ => None,
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        let mut set = HeteroSet::new();
        let mut model = BTreeSet::new();
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;
            match op {
                FuzzOp::Insert(value) => {
                    assert_eq!(value.insert_into(&mut set), model.insert(value));
                }
                FuzzOp::Delete(value) => {
                    assert_eq!(value.delete_from(&mut set), model.remove(&value));
                }
                FuzzOp::PopFirst => {
                    let popped = set.pop_first().map(|item| Value::from_item(&*item));
                    assert_eq!(popped, model.pop_first());
                }
                FuzzOp::Clear => {
                    set.clear();
                    model.clear();
                }
            }

            if let Err(violation) = set.validate() {
                panic!("invariant broken after {:?}: {}", op, violation);
            }
            assert_eq!(set.len(), model.len());
        }

        let sorted: Vec<Value> = set.iter_sorted().map(Value::from_item).collect();
        assert_eq!(sorted, model.iter().copied().collect::<Vec<_>>());

        let mut walked: Vec<Value> = set.iter().map(Value::from_item).collect();
        walked.sort();
        assert_eq!(walked, sorted);
    });
}
