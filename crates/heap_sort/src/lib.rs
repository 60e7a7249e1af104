//! In-place heap sort.
//!
//! The sort builds a max-heap over the slice, then repeatedly swaps the maximum into the sorted
//! tail. It runs in `O(n log n)` time with no allocation, and is not stable.

mod heap;
mod one_based;

use std::cmp::Ordering;

pub use one_based::{sort_one_based, sort_one_based_by};

/// Sorts `data` in non-descending order.
///
/// ```
/// let mut v = [5, 3, 8, 1];
/// heap_sort::heap_sort(&mut v);
/// assert_eq!(v, [1, 3, 5, 8]);
/// ```
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    heap::sort(data, &mut T::lt);
}

/// Sorts `data` with a caller-supplied comparison.
///
/// If `compare` is not a total order the resulting order is unspecified, but `data` is still a
/// permutation of its input.
pub fn heap_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heap::sort(data, &mut |a, b| compare(a, b) == Ordering::Less);
}

pub fn heap_sort_by_key<T, K, F>(data: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    heap::sort(data, &mut |a, b| key(a) < key(b));
}

/// Rearranges `data` into a max-heap: `data[(i - 1) / 2] >= data[i]` for every `i > 0`.
pub fn build_max_heap<T: Ord>(data: &mut [T]) {
    heap::heapify(data, &mut T::lt);
}

pub fn build_max_heap_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heap::heapify(data, &mut |a, b| compare(a, b) == Ordering::Less);
}

pub fn is_max_heap<T: Ord>(data: &[T]) -> bool {
    heap::is_heap(data, &mut T::lt)
}

pub fn is_max_heap_by<T, F>(data: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    heap::is_heap(data, &mut |a, b| compare(a, b) == Ordering::Less)
}
