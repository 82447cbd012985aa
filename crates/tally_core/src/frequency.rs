use std::fmt;
use std::hash::{Hash, Hasher};

/// A counted item paired with its number of occurrences.
///
/// Identity lives in the item alone: two records with the same item but
/// different counts compare equal and hash identically. The unique-items
/// tally in the report relies on this, deduplicating records by item rather
/// than trusting the list length.
#[derive(Debug, Clone)]
pub struct Frequency<T> {
    item: T,
    count: usize,
}

impl<T> Frequency<T> {
    pub fn new(item: T, count: usize) -> Self {
        Self { item, count }
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl<T: PartialEq> PartialEq for Frequency<T> {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
    }
}

impl<T: Eq> Eq for Frequency<T> {}

impl<T: Hash> Hash for Frequency<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.item.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Frequency<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.item, self.count)
    }
}
