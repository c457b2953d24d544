//! Dense ordering helpers.
//!
//! Sibling positions under one parent are always `0..n`. The database layer
//! applies these rules inside a transaction.

use std::collections::HashSet;
use std::hash::Hash;

/// Position for an append: one past the current maximum, 0 for an empty parent.
pub fn next_position(current_max: Option<i64>) -> i64 {
    current_max.map_or(0, |max| max + 1)
}

/// Resolve a requested insert position against `sibling_count` existing rows.
/// `None` appends; explicit values are clamped to `[0, sibling_count]`.
pub fn clamp_insert_position(requested: Option<i64>, sibling_count: i64) -> i64 {
    match requested {
        None => sibling_count,
        Some(p) => p.clamp(0, sibling_count),
    }
}

/// True when the positions are exactly `{0..n-1}` in any order.
pub fn is_dense(positions: &[i64]) -> bool {
    let mut sorted = positions.to_vec();
    sorted.sort_unstable();
    sorted
        .iter()
        .enumerate()
        .all(|(index, position)| *position == index as i64)
}

/// Recompute dense positions for `rows` (`(id, position)` pairs).
///
/// Rows are ordered by current position; on a tie, ids in `placed` come first
/// and the remaining ties keep their input order. Only rows whose position
/// changes are returned.
pub fn densify<T>(rows: &[(T, i64)], placed: &HashSet<T>) -> Vec<(T, i64)>
where
    T: Copy + Eq + Hash,
{
    let mut ordered: Vec<(usize, T, i64)> = rows
        .iter()
        .enumerate()
        .map(|(index, (id, position))| (index, *id, *position))
        .collect();
    ordered.sort_by_key(|(index, id, position)| (*position, !placed.contains(id), *index));

    ordered
        .into_iter()
        .enumerate()
        .filter_map(|(target, (_, id, current))| {
            let target = target as i64;
            (target != current).then_some((id, target))
        })
        .collect()
}
