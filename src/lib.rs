//! Array-backed binary heaps for ranking cities by population
//!
//! This crate provides a single binary heap engine over [`City`] records,
//! configurable along three axes that are fixed at construction time:
//!
//! - **Polarity**: max-heap (largest population at the root) or min-heap
//!   (smallest population at the root)
//! - **Sift strategy**: iterative or recursive invariant restoration
//! - **Build strategy**: per-record insertion with sift-up (O(n log n)) or
//!   Floyd's bottom-up bulk construction (O(n))
//!
//! The heap owns a capacity-bounded backing array laid out as a complete
//! binary tree. Capacity equals the size of the batch the heap was built
//! from and never grows; insertion past it fails with
//! [`HeapError::CapacityExceeded`].
//!
//! # Time Complexity
//!
//! | Operation           | Complexity |
//! |---------------------|------------|
//! | `build` (Floyd)     | O(n)       |
//! | `build` (insertion) | O(n log n) |
//! | `insert`            | O(log n)   |
//! | `peek_root`         | O(1)       |
//! | `remove_root`       | O(log n)   |
//! | `index_of`          | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use city_rank_heap::{BuildPolicy, City, CityHeap, Polarity};
//!
//! let cities = vec![
//!     City::new("Hamburg", 1_841_000),
//!     City::new("Tokyo", 37_400_000),
//!     City::new("Lagos", 14_862_000),
//! ];
//!
//! let mut heap = CityHeap::build(Polarity::Max, BuildPolicy::default(), cities);
//! assert_eq!(heap.peek_root().unwrap().name, "Tokyo");
//!
//! let largest = heap.remove_root().unwrap();
//! assert_eq!(largest.population, 37_400_000);
//! assert_eq!(heap.peek_root().unwrap().name, "Lagos");
//! ```

pub mod city;
pub mod error;
pub mod heap;
pub mod index;
pub mod policy;

// Re-export the public surface for convenience
pub use city::City;
pub use error::HeapError;
pub use heap::CityHeap;
pub use policy::{BuildPolicy, BuildStrategy, Polarity, SiftStrategy};
