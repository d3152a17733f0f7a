//! Utility functions for sorting operations

/// Rearrange `items` so that slot `i` ends up holding the element that was
/// at `order[i]`.
///
/// Works by walking each permutation cycle and swapping, so elements are
/// moved rather than cloned.
pub fn reorder_by_indices<T>(items: &mut [T], order: &[usize]) {
    debug_assert_eq!(
        items.len(),
        order.len(),
        "Indices length must match items length"
    );

    let mut placed = vec![false; items.len()];
    for start in 0..items.len() {
        let mut current = start;
        while !placed[current] {
            placed[current] = true;
            let source = order[current];
            if source == start {
                break;
            }
            items.swap(current, source);
            current = source;
        }
    }
}
