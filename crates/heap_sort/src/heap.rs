//! Implicit max-heap over a slice.
//!
//! Positions are logical and 1-based: position `k` is stored at `heap[k - 1]`, its children are
//! `2k` and `2k + 1`, and its parent is `k / 2`. Callers with a reserved slot 0 pass `&mut seq[1..]`.

/// Restores the max-heap property for the subtree rooted at `k`, looking only at positions `1..=n`.
///
/// Both child subtrees of `k` must already be heaps. On equal children the left one is taken.
#[inline]
pub(crate) fn sink<T, F>(heap: &mut [T], mut k: usize, n: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(n <= heap.len());
    debug_assert!(k >= 1);

    while 2 * k <= n {
        let mut j = 2 * k;
        if j < n && is_less(&heap[j - 1], &heap[j]) {
            j += 1;
        }
        if !is_less(&heap[k - 1], &heap[j - 1]) {
            break;
        }
        heap.swap(k - 1, j - 1);
        k = j;
    }
}

/// Heapify phase: sinks every non-leaf position, deepest first.
pub(crate) fn heapify<T, F>(heap: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let n = heap.len();
    for k in (1..=n / 2).rev() {
        sink(heap, k, n, is_less);
    }
}

/// Extraction phase: `heap` must already be a max-heap.
pub(crate) fn extract_all<T, F>(heap: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut n = heap.len();
    while n > 1 {
        heap.swap(0, n - 1);
        n -= 1;
        sink(heap, 1, n, is_less);
    }
}

pub(crate) fn sort<T, F>(heap: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if heap.len() < 2 {
        return;
    }
    heapify(heap, is_less);
    extract_all(heap, is_less);
}

pub(crate) fn is_heap<T, F>(heap: &[T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    (2..=heap.len()).all(|k| !is_less(&heap[k / 2 - 1], &heap[k - 1]))
}
