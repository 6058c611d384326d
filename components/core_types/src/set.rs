//! Set storage and its equivalence strategy.
//!
//! A [`ValueSet`] holds a [`SetRules`] strategy bound to one element type.
//! The strategy decides which members are duplicates; the set itself only
//! buckets members by the strategy's hash.

use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::{Repr, Type, Value};

/// Equivalence strategy for set members of one element type.
///
/// `equivalent(a, b)` must imply `hash(a) == hash(b)`.
pub trait SetRules: fmt::Debug + Send + Sync {
    /// Element type this strategy is bound to.
    fn element_type(&self) -> &Type;

    /// Hash of a member.
    fn hash(&self, value: &Value) -> u64;

    /// Whether two members are duplicates of each other.
    fn equivalent(&self, a: &Value, b: &Value) -> bool;
}

/// Default strategy: structural hashing and raw structural equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralRules {
    element_type: Type,
}

impl StructuralRules {
    /// Bind the strategy to `element_type`.
    pub fn new(element_type: Type) -> Self {
        StructuralRules { element_type }
    }
}

impl SetRules for StructuralRules {
    fn element_type(&self) -> &Type {
        &self.element_type
    }

    fn hash(&self, value: &Value) -> u64 {
        structural_hash(value)
    }

    fn equivalent(&self, a: &Value, b: &Value) -> bool {
        a == b
    }
}

fn structural_hash(value: &Value) -> u64 {
    let mut state = DefaultHasher::new();
    hash_into(value, &mut state);
    state.finish()
}

fn hash_into<H: Hasher>(value: &Value, state: &mut H) {
    match value.repr() {
        Repr::Unknown => 0u8.hash(state),
        Repr::Null => 1u8.hash(state),
        Repr::Bool(b) => {
            2u8.hash(state);
            b.hash(state);
        }
        Repr::Number(n) => {
            3u8.hash(state);
            n.hash(state);
        }
        Repr::String(s) => {
            4u8.hash(state);
            s.hash(state);
        }
        Repr::List(vals) | Repr::Tuple(vals) => {
            5u8.hash(state);
            vals.len().hash(state);
            for v in vals {
                hash_into(v, state);
            }
        }
        Repr::Map(entries) => {
            6u8.hash(state);
            for (k, v) in entries {
                k.hash(state);
                hash_into(v, state);
            }
        }
        Repr::Set(set) => {
            // order-free
            7u8.hash(state);
            set.iter()
                .map(structural_hash)
                .fold(0u64, u64::wrapping_add)
                .hash(state);
        }
        Repr::Object(attrs) => {
            8u8.hash(state);
            let mut names: Vec<&String> = attrs.keys().collect();
            names.sort();
            for name in names {
                name.hash(state);
                if let Some(v) = attrs.get(name.as_str()) {
                    hash_into(v, state);
                }
            }
        }
    }
}

/// Members of a set value, deduplicated by a bound [`SetRules`].
///
/// Iteration order follows hash buckets and carries no meaning.
#[derive(Debug, Clone)]
pub struct ValueSet {
    rules: Arc<dyn SetRules>,
    buckets: BTreeMap<u64, Vec<Value>>,
    len: usize,
}

impl ValueSet {
    /// Empty set governed by `rules`.
    pub fn new(rules: Arc<dyn SetRules>) -> Self {
        ValueSet {
            rules,
            buckets: BTreeMap::new(),
            len: 0,
        }
    }

    pub(crate) fn from_values(rules: Arc<dyn SetRules>, values: Vec<Value>) -> Self {
        let mut set = Self::new(rules);
        for v in values {
            set.insert(v);
        }
        set
    }

    /// Adds `value` unless an equivalent member exists. Only used while a
    /// set value is being constructed.
    fn insert(&mut self, value: Value) -> bool {
        let hash = self.rules.hash(&value);
        let bucket = self.buckets.entry(hash).or_default();
        if bucket.iter().any(|m| self.rules.equivalent(m, &value)) {
            return false;
        }
        bucket.push(value);
        self.len += 1;
        true
    }

    /// Strategy this set was built with.
    pub fn rules(&self) -> &dyn SetRules {
        self.rules.as_ref()
    }

    /// Whether an equivalent member exists.
    pub fn contains(&self, value: &Value) -> bool {
        self.buckets
            .get(&self.rules.hash(value))
            .map_or(false, |bucket| bucket.iter().any(|m| self.rules.equivalent(m, value)))
    }

    /// Number of distinct members.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Members in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.buckets.values().flatten()
    }
}

/// Sets are equal when they have the same members, whatever the order.
impl PartialEq for ValueSet {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|v| other.contains(v))
    }
}
