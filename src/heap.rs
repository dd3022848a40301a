//! The array-backed city heap engine
//!
//! One engine covers both polarities and all strategy combinations: the
//! backing array, index bookkeeping, and the build/insert/remove drivers
//! live here, and every ordering decision is delegated to
//! [`Polarity::dominates`]. The heap is built once from a raw batch of
//! cities, with capacity fixed to the batch size, and keeps the heap-order
//! invariant re-established before any mutating call returns.
//!
//! # Example
//!
//! ```rust
//! use city_rank_heap::{BuildPolicy, BuildStrategy, City, CityHeap, Polarity, SiftStrategy};
//!
//! let batch = vec![
//!     City::new("a", 5),
//!     City::new("b", 3),
//!     City::new("c", 8),
//! ];
//! let policy = BuildPolicy::new(SiftStrategy::Iterative, BuildStrategy::Floyd);
//!
//! let mut heap = CityHeap::build(Polarity::Min, policy, batch);
//! assert_eq!(heap.remove_root().unwrap().population, 3);
//! assert_eq!(heap.remove_root().unwrap().population, 5);
//! assert_eq!(heap.remove_root().unwrap().population, 8);
//! assert!(heap.remove_root().is_err());
//! ```

use smallvec::SmallVec;

use crate::city::City;
use crate::error::HeapError;
use crate::index;
use crate::policy::{BuildPolicy, BuildStrategy, Polarity, SiftStrategy};

/// Backing-store slots kept inline before spilling to the heap allocator;
/// small ranking batches avoid an allocation entirely.
const INLINE_CITIES: usize = 8;

/// An array-backed binary heap of [`City`] records
///
/// The backing array is interpreted as a complete binary tree (see
/// [`crate::index`]). For every occupied non-root index, the parent
/// dominates the child under the configured [`Polarity`]; all indices
/// `[0, len)` are occupied with no gaps; `len` never exceeds the capacity
/// fixed at build time.
#[derive(Debug, Clone)]
pub struct CityHeap {
    /// The heap records in array order
    storage: SmallVec<[City; INLINE_CITIES]>,
    /// Record count of the batch the heap was built from; the hard bound on
    /// `len`
    capacity: usize,
    polarity: Polarity,
    policy: BuildPolicy,
}

impl CityHeap {
    /// Builds a heap from a raw, unordered batch of cities
    ///
    /// Capacity is fixed to the batch length. Depending on
    /// [`BuildStrategy`] the batch is either inserted record by record with
    /// a sift-up after each append, or moved in wholesale and heapified by
    /// one Floyd bottom-up pass.
    pub fn build(polarity: Polarity, policy: BuildPolicy, raw: Vec<City>) -> Self {
        let capacity = raw.len();
        let mut heap = Self {
            storage: SmallVec::with_capacity(capacity),
            capacity,
            polarity,
            policy,
        };

        match policy.build {
            BuildStrategy::Floyd => {
                heap.storage.extend(raw);
                let count = heap.storage.len();
                heap.floyd_build(0, count);
            }
            BuildStrategy::Incremental => {
                for city in raw {
                    heap.append_and_sift(city);
                }
            }
        }

        heap
    }

    /// Returns the number of records currently in the heap
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the heap holds no records
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns true if the heap has reached its fixed capacity
    pub fn is_full(&self) -> bool {
        self.storage.len() == self.capacity
    }

    /// Returns the capacity fixed at build time
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the heap's polarity
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Returns the sift/build configuration
    pub fn policy(&self) -> BuildPolicy {
        self.policy
    }

    /// Inserts a single city, restoring the invariant by sifting it up
    ///
    /// # Errors
    /// [`HeapError::CapacityExceeded`] if the heap is already full; the
    /// heap is left unchanged.
    pub fn insert(&mut self, city: City) -> Result<(), HeapError> {
        if self.is_full() {
            return Err(HeapError::CapacityExceeded);
        }
        self.append_and_sift(city);
        Ok(())
    }

    /// Returns the dominant record without removing it
    ///
    /// # Errors
    /// [`HeapError::EmptyHeap`] if the heap holds no records.
    pub fn peek_root(&self) -> Result<&City, HeapError> {
        self.storage.first().ok_or(HeapError::EmptyHeap)
    }

    /// Removes and returns the dominant record
    ///
    /// Repeated calls drain the heap in polarity order (heapsort).
    ///
    /// # Errors
    /// [`HeapError::EmptyHeap`] if the heap holds no records.
    pub fn remove_root(&mut self) -> Result<City, HeapError> {
        self.remove_at(0)
    }

    /// Removes and returns the record at an arbitrary heap index
    ///
    /// The last record takes the vacated slot and is then sifted in
    /// whichever direction restores the invariant: up when it dominates its
    /// new parent, down otherwise.
    ///
    /// # Errors
    /// [`HeapError::EmptyHeap`] on an empty heap;
    /// [`HeapError::NotFound`] when `heap_index >= len()`.
    pub fn remove_at(&mut self, heap_index: usize) -> Result<City, HeapError> {
        if self.is_empty() {
            return Err(HeapError::EmptyHeap);
        }
        if heap_index >= self.len() {
            return Err(HeapError::NotFound);
        }

        let last = self.len() - 1;
        self.storage.swap(heap_index, last);
        let removed = self.storage.pop().ok_or(HeapError::EmptyHeap)?;

        // The slot past the new end was removed; anything still inside the
        // occupied range needs its invariant repaired.
        if heap_index < self.len() {
            self.restore_at(heap_index);
        }
        Ok(removed)
    }

    /// Removes a specific city by value
    ///
    /// # Errors
    /// [`HeapError::NotFound`] if no record equal to `city` is present;
    /// [`HeapError::EmptyHeap`] on an empty heap.
    pub fn remove_city(&mut self, city: &City) -> Result<City, HeapError> {
        let heap_index = self.index_of(city)?;
        self.remove_at(heap_index)
    }

    /// Returns the current heap index of a record, by linear scan
    ///
    /// # Errors
    /// [`HeapError::NotFound`] if no record equal to `city` is present.
    pub fn index_of(&self, city: &City) -> Result<usize, HeapError> {
        self.storage
            .iter()
            .position(|candidate| candidate == city)
            .ok_or(HeapError::NotFound)
    }

    /// Returns the backing store in array order
    ///
    /// The slice is heap-ordered, not sorted; it satisfies the heap-order
    /// invariant but is not a ranking. References into it are invalidated
    /// by any subsequent mutation.
    pub fn snapshot(&self) -> &[City] {
        &self.storage
    }

    /// Drains the heap into a vector sorted in polarity order
    ///
    /// Descending population for a max-heap, ascending for a min-heap.
    pub fn into_sorted_vec(mut self) -> Vec<City> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(city) = self.remove_root() {
            sorted.push(city);
        }
        sorted
    }

    /// Appends a record and sifts it up; caller guarantees spare capacity
    fn append_and_sift(&mut self, city: City) {
        self.storage.push(city);
        self.sift_up(self.storage.len() - 1);
    }

    /// Population of the record at `heap_index`
    #[inline]
    fn population(&self, heap_index: usize) -> u64 {
        self.storage[heap_index].population
    }

    #[inline]
    fn has_parent(&self, heap_index: usize) -> bool {
        heap_index > 0
    }

    #[inline]
    fn has_left_child(&self, heap_index: usize) -> bool {
        index::left_child(heap_index) < self.len()
    }

    #[inline]
    fn has_right_child(&self, heap_index: usize) -> bool {
        index::right_child(heap_index) < self.len()
    }

    /// The child an out-of-order parent must swap with: the right child if
    /// it exists and dominates the left, otherwise the left. Caller
    /// guarantees a left child exists.
    fn winning_child(&self, heap_index: usize) -> usize {
        let left = index::left_child(heap_index);
        if self.has_right_child(heap_index) {
            let right = index::right_child(heap_index);
            if self.polarity.dominates(self.population(right), self.population(left)) {
                return right;
            }
        }
        left
    }

    /// Sifts toward the root with the configured strategy
    fn sift_up(&mut self, heap_index: usize) {
        match self.policy.sift {
            SiftStrategy::Iterative => self.sift_up_iterative(heap_index),
            SiftStrategy::Recursive => self.sift_up_recursive(heap_index),
        }
    }

    /// Sifts toward the leaves with the configured strategy
    fn sift_down(&mut self, heap_index: usize) {
        match self.policy.sift {
            SiftStrategy::Iterative => self.sift_down_iterative(heap_index),
            SiftStrategy::Recursive => self.sift_down_recursive(heap_index),
        }
    }

    /// Move the record at `heap_index` up until its parent dominates it
    fn sift_up_iterative(&mut self, mut heap_index: usize) {
        while self.has_parent(heap_index) {
            let parent = index::parent(heap_index);
            if self
                .polarity
                .dominates(self.population(heap_index), self.population(parent))
            {
                self.storage.swap(heap_index, parent);
                heap_index = parent;
            } else {
                return;
            }
        }
    }

    /// Same policy as [`Self::sift_up_iterative`], one swap per call
    fn sift_up_recursive(&mut self, heap_index: usize) {
        if !self.has_parent(heap_index) {
            return;
        }
        let parent = index::parent(heap_index);
        if self
            .polarity
            .dominates(self.population(heap_index), self.population(parent))
        {
            self.storage.swap(heap_index, parent);
            self.sift_up_recursive(parent);
        }
    }

    /// Move the record at `heap_index` down until it dominates its winning
    /// child
    fn sift_down_iterative(&mut self, mut heap_index: usize) {
        while self.has_left_child(heap_index) {
            let child = self.winning_child(heap_index);
            if self
                .polarity
                .dominates(self.population(child), self.population(heap_index))
            {
                self.storage.swap(heap_index, child);
                heap_index = child;
            } else {
                return;
            }
        }
    }

    /// Same policy as [`Self::sift_down_iterative`], one swap per call
    fn sift_down_recursive(&mut self, heap_index: usize) {
        if !self.has_left_child(heap_index) {
            return;
        }
        let child = self.winning_child(heap_index);
        if self
            .polarity
            .dominates(self.population(child), self.population(heap_index))
        {
            self.storage.swap(heap_index, child);
            self.sift_down_recursive(child);
        }
    }

    /// Floyd's bottom-up construction over `storage[start..count]`
    ///
    /// Walks `i` from `count` down to `start + 1` and sifts down the parent
    /// of each `i`, covering every internal node from the deepest parent up
    /// to the root. Parents already in order exit their sift immediately.
    fn floyd_build(&mut self, start: usize, count: usize) {
        for i in (start + 1..=count).rev() {
            self.sift_down(index::parent(i));
        }
    }

    /// Repairs the invariant at a slot whose record was replaced during
    /// removal; the replacement may violate either side.
    fn restore_at(&mut self, heap_index: usize) {
        if self.has_parent(heap_index)
            && self.polarity.dominates(
                self.population(heap_index),
                self.population(index::parent(heap_index)),
            )
        {
            self.sift_up(heap_index);
        } else {
            self.sift_down(heap_index);
        }
    }
}
