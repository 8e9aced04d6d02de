//! Unordered clause containers used to compare boolean queries
//!
//! `Multiset` keeps a count per element, so adding the same query twice is
//! different from adding it once. `UniqueSet` collapses duplicates. Both
//! ignore insertion order and hash order-independently.

use std::collections::{HashMap, HashSet};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiset<T: Hash + Eq> {
    counts: HashMap<T, usize>,
    len: usize,
}


impl<T: Hash + Eq> Multiset<T> {
    pub fn new() -> Multiset<T> {
        Multiset {
            counts: HashMap::new(),
            len: 0,
        }
    }

    pub fn insert(&mut self, item: T) {
        *self.counts.entry(item).or_insert(0) += 1;
        self.len += 1;
    }

    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).cloned().unwrap_or(0)
    }

    /// Total number of elements, duplicates included
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item=(&T, usize)> {
        self.counts.iter().map(|(item, count)| (item, *count))
    }
}


impl<T: Hash + Eq> Default for Multiset<T> {
    fn default() -> Multiset<T> {
        Multiset::new()
    }
}


impl<T: Hash + Eq> Hash for Multiset<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut combined = 0u64;
        for (item, count) in self.counts.iter() {
            let mut hasher = DefaultHasher::new();
            item.hash(&mut hasher);
            count.hash(&mut hasher);
            combined = combined.wrapping_add(hasher.finish());
        }

        self.len.hash(state);
        combined.hash(state);
    }
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueSet<T: Hash + Eq> {
    items: HashSet<T>,
}


impl<T: Hash + Eq> UniqueSet<T> {
    pub fn new() -> UniqueSet<T> {
        UniqueSet {
            items: HashSet::new(),
        }
    }

    /// Returns false if the item was already present
    pub fn insert(&mut self, item: T) -> bool {
        self.items.insert(item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item=&T> {
        self.items.iter()
    }
}


impl<T: Hash + Eq> Default for UniqueSet<T> {
    fn default() -> UniqueSet<T> {
        UniqueSet::new()
    }
}


impl<T: Hash + Eq> Hash for UniqueSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut combined = 0u64;
        for item in self.items.iter() {
            let mut hasher = DefaultHasher::new();
            item.hash(&mut hasher);
            combined = combined.wrapping_add(hasher.finish());
        }

        self.items.len().hash(state);
        combined.hash(state);
    }
}
