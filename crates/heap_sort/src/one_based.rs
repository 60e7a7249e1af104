use std::cmp::Ordering;

use crate::heap;

/// Sorts `seq[1..]` in non-descending order, leaving the placeholder at `seq[0]` untouched.
///
/// `seq[0]` is never compared or moved. An empty `seq` has no placeholder and is left as is.
///
/// ```
/// let mut seq = [0, 5, 3, 8, 1];
/// heap_sort::sort_one_based(&mut seq);
/// assert_eq!(seq, [0, 1, 3, 5, 8]);
/// ```
pub fn sort_one_based<T: Ord>(seq: &mut [T]) {
    if let Some((_, heap)) = seq.split_first_mut() {
        heap::sort(heap, &mut T::lt);
    }
}

pub fn sort_one_based_by<T, F>(seq: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if let Some((_, heap)) = seq.split_first_mut() {
        heap::sort(heap, &mut |a, b| compare(a, b) == Ordering::Less);
    }
}
