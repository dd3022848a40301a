//! Construction-time heap configuration
//!
//! A heap is configured along three axes, all fixed for its lifetime:
//! which polarity orders the heap ([`Polarity`]), whether invariant
//! restoration walks the tree iteratively or by self-recursion
//! ([`SiftStrategy`]), and whether the initial batch is built by repeated
//! insertion or by Floyd's bottom-up pass ([`BuildStrategy`]).
//!
//! Max and min heaps are two values of the same engine rather than two
//! types: every ordering decision goes through [`Polarity::dominates`].

/// Whether the heap keeps the largest or the smallest population at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Largest population at the root; parents outrank children downward
    Max,
    /// Smallest population at the root
    Min,
}

impl Polarity {
    /// Returns true if a record with population `a` outranks one with
    /// population `b` under this polarity
    ///
    /// Strict comparison: equal populations never dominate each other, so
    /// sift loops terminate without swapping ties.
    #[inline]
    pub fn dominates(self, a: u64, b: u64) -> bool {
        match self {
            Polarity::Max => a > b,
            Polarity::Min => a < b,
        }
    }
}

/// How the sift routines traverse the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiftStrategy {
    /// Loop-based traversal
    #[default]
    Iterative,
    /// Self-recursive traversal; one swap per call, then recurse
    Recursive,
}

/// How the initial batch is turned into a heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildStrategy {
    /// Insert records one at a time, sifting each up: O(n log n)
    #[default]
    Incremental,
    /// Floyd's bottom-up construction, one sift-down pass over the internal
    /// nodes: O(n)
    Floyd,
}

/// The sift and build strategies bundled as one immutable configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildPolicy {
    pub sift: SiftStrategy,
    pub build: BuildStrategy,
}

impl BuildPolicy {
    /// Creates a policy from its two axes
    pub fn new(sift: SiftStrategy, build: BuildStrategy) -> Self {
        Self { sift, build }
    }

    /// All four strategy combinations, for exhaustive testing and
    /// benchmarking
    pub fn all() -> [BuildPolicy; 4] {
        [
            BuildPolicy::new(SiftStrategy::Iterative, BuildStrategy::Incremental),
            BuildPolicy::new(SiftStrategy::Iterative, BuildStrategy::Floyd),
            BuildPolicy::new(SiftStrategy::Recursive, BuildStrategy::Incremental),
            BuildPolicy::new(SiftStrategy::Recursive, BuildStrategy::Floyd),
        ]
    }
}
