//! Stable top-down merge sort driven by a caller-supplied ordering predicate.
//!
//! [`merge_sort`] is the engine behind [`Sequence::sort`](super::Sequence::sort)
//! and its variants. It only ever asks `less(a, b)` ("does `a` strictly
//! precede `b`?"), so any strict weak ordering can be used, including ones
//! that consider distinct elements equal.
//!
//! # Algorithm
//!
//! ```text
//! [5, 4, 3, 2, 1]
//!   split at n / 2     -> [5, 4] | [3, 2, 1]
//!   sort both halves   -> [4, 5] | [1, 2, 3]
//!   merge              -> [1, 2, 3, 4, 5]
//! ```
//!
//! During the merge the right head is taken only when it is strictly less
//! than the left head. Elements that compare equal therefore leave the merge
//! in the order they entered it, which makes the sort stable.
//!
//! # Complexity
//!
//! | Resource    | Cost         |
//! |-------------|--------------|
//! | comparisons | O(n log n)   |
//! | allocation  | O(n) per level, O(n log n) in total |
//! | recursion   | O(log n)     |

/// Sorts `elements` with `less` and returns the sorted vector.
///
/// The sort is stable: if neither `less(a, b)` nor `less(b, a)` holds, `a`
/// and `b` keep their original relative order.
///
/// An inconsistent `less` (one that is not a strict weak ordering) still
/// terminates and yields a permutation of the input; the order of that
/// permutation is unspecified.
///
/// # Examples
///
/// ```rust
/// use fluentseq::stream::merge_sort;
///
/// let sorted = merge_sort(vec![5, 4, 3, 2, 1], &mut |a: &i32, b: &i32| a < b);
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
///
/// // Equal keys keep their original order.
/// let pairs = vec![("b", 1), ("a", 1), ("c", 0)];
/// let sorted = merge_sort(pairs, &mut |a: &(&str, i32), b: &(&str, i32)| a.1 < b.1);
/// assert_eq!(sorted, vec![("c", 0), ("b", 1), ("a", 1)]);
/// ```
pub fn merge_sort<T, F>(elements: Vec<T>, less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if elements.len() < 2 {
        return elements;
    }

    let middle = elements.len() / 2;
    let mut left = elements;
    let right = left.split_off(middle);

    let left = merge_sort(left, less);
    let right = merge_sort(right, less);
    merge(left, right, less)
}

/// Merges two sorted runs, preferring `left` on ties.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(left_head), Some(right_head)) = (left.peek(), right.peek()) {
        let next = if less(right_head, left_head) {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }

    // At most one of the runs still has elements.
    merged.extend(left);
    merged.extend(right);
    merged
}
