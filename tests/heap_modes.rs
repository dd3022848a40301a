//! Scenario tests run across every mode combination
//!
//! The engine has eight configurations (two polarities, two sift
//! strategies, two build strategies). Each helper takes the configuration
//! as parameters and every scenario is driven through all of them, since a
//! correct heap must behave identically — up to array layout — in each.

use city_rank_heap::{BuildPolicy, City, CityHeap, HeapError, Polarity};

fn batch(populations: &[u64]) -> Vec<City> {
    populations
        .iter()
        .enumerate()
        .map(|(i, &p)| City::new(format!("city-{i}"), p))
        .collect()
}

fn drain(heap: CityHeap) -> Vec<u64> {
    heap.into_sorted_vec()
        .into_iter()
        .map(|c| c.population)
        .collect()
}

/// Asserts the heap-order invariant over the raw array
fn assert_heap_ordered(heap: &CityHeap) {
    let store = heap.snapshot();
    for i in 1..store.len() {
        let parent = (i - 1) / 2;
        assert!(
            !heap
                .polarity()
                .dominates(store[i].population, store[parent].population),
            "child at {i} outranks its parent under {:?}: {:?}",
            heap.polarity(),
            store
        );
    }
}

fn for_all_modes(mut scenario: impl FnMut(Polarity, BuildPolicy)) {
    for polarity in [Polarity::Max, Polarity::Min] {
        for policy in BuildPolicy::all() {
            scenario(polarity, policy);
        }
    }
}

#[test]
fn heapsort_fixture_drains_in_polarity_order() {
    for_all_modes(|polarity, policy| {
        let heap = CityHeap::build(polarity, policy, batch(&[5, 3, 8, 1, 9, 2]));
        let expected = match polarity {
            Polarity::Max => vec![9, 8, 5, 3, 2, 1],
            Polarity::Min => vec![1, 2, 3, 5, 8, 9],
        };
        assert_eq!(drain(heap), expected, "{polarity:?} {policy:?}");
    });
}

#[test]
fn heapsort_fixture_is_permutation_independent() {
    // Every permutation of a 4-record batch drains identically.
    let perms: &[[u64; 4]] = &[
        [4, 7, 2, 9],
        [9, 7, 4, 2],
        [2, 4, 7, 9],
        [7, 9, 2, 4],
        [9, 2, 7, 4],
        [4, 2, 9, 7],
    ];
    for_all_modes(|polarity, policy| {
        for perm in perms {
            let heap = CityHeap::build(polarity, policy, batch(perm));
            let expected = match polarity {
                Polarity::Max => vec![9, 7, 4, 2],
                Polarity::Min => vec![2, 4, 7, 9],
            };
            assert_eq!(drain(heap), expected, "{polarity:?} {policy:?} {perm:?}");
        }
    });
}

#[test]
fn build_satisfies_invariant() {
    for_all_modes(|polarity, policy| {
        let heap = CityHeap::build(polarity, policy, batch(&[12, 4, 4, 30, 1, 0, 99, 7]));
        assert_eq!(heap.len(), 8);
        assert_eq!(heap.capacity(), 8);
        assert!(heap.is_full());
        assert_heap_ordered(&heap);
    });
}

#[test]
fn empty_batch_yields_empty_heap() {
    for_all_modes(|polarity, policy| {
        let mut heap = CityHeap::build(polarity, policy, Vec::new());
        assert_eq!(heap.len(), 0);
        assert!(heap.is_empty());
        assert_eq!(heap.peek_root(), Err(HeapError::EmptyHeap));
        assert_eq!(heap.remove_root(), Err(HeapError::EmptyHeap));
        assert_eq!(heap.remove_at(0), Err(HeapError::EmptyHeap));
    });
}

#[test]
fn insert_at_capacity_leaves_heap_untouched() {
    for_all_modes(|polarity, policy| {
        let mut heap = CityHeap::build(polarity, policy, batch(&[5, 3, 8]));
        let before: Vec<City> = heap.snapshot().to_vec();

        assert_eq!(
            heap.insert(City::new("overflow", 42)),
            Err(HeapError::CapacityExceeded)
        );
        assert_eq!(heap.snapshot(), &before[..]);
        assert_eq!(heap.len(), 3);
    });
}

#[test]
fn size_tracks_inserts_and_removals() {
    for_all_modes(|polarity, policy| {
        let mut heap = CityHeap::build(polarity, policy, batch(&[6, 2, 9, 14, 3]));
        assert_eq!(heap.len(), 5);

        heap.remove_root().unwrap();
        assert_eq!(heap.len(), 4);
        heap.remove_root().unwrap();
        assert_eq!(heap.len(), 3);

        heap.insert(City::new("back", 11)).unwrap();
        assert_eq!(heap.len(), 4);
        assert_heap_ordered(&heap);

        heap.insert(City::new("forth", 1)).unwrap();
        assert_eq!(heap.len(), 5);
        assert!(heap.is_full());
        assert_heap_ordered(&heap);
    });
}

#[test]
fn invariant_holds_after_every_mutation() {
    for_all_modes(|polarity, policy| {
        let mut heap = CityHeap::build(polarity, policy, batch(&[20, 5, 17, 5, 42, 0, 8, 31]));
        assert_heap_ordered(&heap);

        while heap.len() > 1 {
            // Alternate between root and mid-array removal.
            let target = heap.len() / 2;
            heap.remove_at(target).unwrap();
            assert_heap_ordered(&heap);
            if heap.is_empty() {
                break;
            }
            heap.remove_root().unwrap();
            assert_heap_ordered(&heap);
        }
    });
}

#[test]
fn arbitrary_index_removal_returns_that_record() {
    for_all_modes(|polarity, policy| {
        let mut heap = CityHeap::build(polarity, policy, batch(&[10, 1, 9, 0, 2, 8, 7]));

        let victim = heap.snapshot()[3].clone();
        let removed = heap.remove_at(3).unwrap();
        assert_eq!(removed, victim);
        assert_eq!(heap.len(), 6);
        assert_heap_ordered(&heap);
        assert_eq!(heap.index_of(&victim), Err(HeapError::NotFound));
    });
}

#[test]
fn removal_by_value_finds_and_removes() {
    for_all_modes(|polarity, policy| {
        let cities = batch(&[5, 3, 8, 1, 9, 2]);
        let target = cities[4].clone();
        let mut heap = CityHeap::build(polarity, policy, cities);

        assert_eq!(heap.remove_city(&target), Ok(target.clone()));
        assert_eq!(heap.len(), 5);
        assert_heap_ordered(&heap);
        assert_eq!(heap.remove_city(&target), Err(HeapError::NotFound));

        let absent = City::new("atlantis", 0);
        assert_eq!(heap.index_of(&absent), Err(HeapError::NotFound));
        assert_eq!(heap.remove_city(&absent), Err(HeapError::NotFound));
    });
}

#[test]
fn ties_drain_completely() {
    for_all_modes(|polarity, policy| {
        let heap = CityHeap::build(polarity, policy, batch(&[4, 4, 4, 4, 4]));
        assert_eq!(drain(heap), vec![4, 4, 4, 4, 4]);
    });
}

#[test]
fn single_record_heap() {
    for_all_modes(|polarity, policy| {
        let mut heap = CityHeap::build(polarity, policy, batch(&[77]));
        assert_eq!(heap.peek_root().map(|c| c.population), Ok(77));
        assert_eq!(heap.remove_root().map(|c| c.population), Ok(77));
        assert!(heap.is_empty());
        assert_eq!(heap.remove_root(), Err(HeapError::EmptyHeap));
    });
}

#[test]
fn presorted_and_reversed_batches() {
    let ascending: Vec<u64> = (0..64).collect();
    let descending: Vec<u64> = (0..64).rev().collect();

    for_all_modes(|polarity, policy| {
        for input in [&ascending, &descending] {
            let heap = CityHeap::build(polarity, policy, batch(input));
            assert_heap_ordered(&heap);

            let drained = drain(heap);
            let expected: Vec<u64> = match polarity {
                Polarity::Max => (0..64).rev().collect(),
                Polarity::Min => (0..64).collect(),
            };
            assert_eq!(drained, expected, "{polarity:?} {policy:?}");
        }
    });
}
