//! Bounded example collection
//!
//! Every analyzer reports a full count of matching records but only keeps a
//! handful of them as illustrative examples. `BoundedSample` does both.

/// Keeps the first `capacity` offered items and counts every offer
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedSample<T> {
    capacity: usize,
    items: Vec<T>,
    offered: usize,
}

impl<T> BoundedSample<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity.min(16)),
            offered: 0,
        }
    }

    /// Offer an item; returns whether it was kept
    pub fn offer(&mut self, item: T) -> bool {
        self.offer_with(|| item)
    }

    /// Offer an item built lazily, only when there is room for it
    pub fn offer_with(&mut self, make: impl FnOnce() -> T) -> bool {
        self.offered += 1;
        if self.is_full() {
            return false;
        }
        self.items.push(make());
        true
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Number of items offered so far, kept or not
    pub fn offered(&self) -> usize {
        self.offered
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
