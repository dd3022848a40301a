//! Ranks a batch of cities by population
//!
//! Builds a max-heap with Floyd's algorithm and drains it into a ranking.
//!
//! ```bash
//! cargo run --example rank_cities
//! ```

use city_rank_heap::{BuildPolicy, BuildStrategy, City, CityHeap, Polarity, SiftStrategy};

fn main() {
    let cities = vec![
        City::new("Tokyo", 37_400_000),
        City::new("Lagos", 14_862_000),
        City::new("Hamburg", 1_841_000),
        City::new("Reykjavik", 131_000),
        City::new("Delhi", 31_181_000),
        City::new("Wellington", 212_000),
    ];

    let policy = BuildPolicy::new(SiftStrategy::Iterative, BuildStrategy::Floyd);
    let heap = CityHeap::build(Polarity::Max, policy, cities);

    println!("Cities by population:");
    for (rank, city) in heap.into_sorted_vec().iter().enumerate() {
        println!("{:>2}. {city}", rank + 1);
    }
}
