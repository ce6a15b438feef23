// ============================================================================
// spark-hydrate - Myers Edit Script
// Shortest insert/remove script between two sequences
// ============================================================================
//
// Emission contract (what DOM patchers rely on):
//
// 1. All removes first, in descending index order. A remove's index is its
//    position at removal time, which for descending removal is its original
//    position.
// 2. Then all inserts, in ascending index order. An insert's index is its
//    position in the final sequence.
//
// Applying the script in order with `Vec::remove` / `Vec::insert` turns the
// old sequence into the new one.
// ============================================================================

use tracing::trace;

use crate::core::types::Edit;

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Compute the shortest edit script turning `old` into `new`.
///
/// Elements are compared by value only. Duplicates have no identity, so a
/// duplicate that shifted position may show up as a remove plus an insert.
///
/// # Example
///
/// ```
/// use spark_hydrate::{diff, Edit};
///
/// let edits = diff(&["a", "b", "c"], &["a", "b", "c", "d"]);
/// assert_eq!(edits, vec![Edit::insert(3, "d")]);
///
/// let edits = diff(&["a", "b", "c"], &["b", "c"]);
/// assert_eq!(edits, vec![Edit::remove(0, "a")]);
/// ```
pub fn diff<T: PartialEq + Clone>(old: &[T], new: &[T]) -> Vec<Edit<T>> {
    if let Some(edits) = fast_path(old, new) {
        return edits;
    }
    let edits = shortest_edit_script(old, new);
    trace!(old = old.len(), new = new.len(), edits = edits.len(), "myers diff");
    edits
}

// =============================================================================
// FAST PATHS
// =============================================================================

fn fast_path<T: PartialEq + Clone>(old: &[T], new: &[T]) -> Option<Vec<Edit<T>>> {
    let (n, m) = (old.len(), new.len());

    if old == new {
        return Some(Vec::new());
    }

    if n == 0 {
        trace!(inserts = m, "diff fast path: empty old");
        return Some(inserts(new, 0..m));
    }

    if m == 0 {
        trace!(removes = n, "diff fast path: empty new");
        return Some(removes(old, 0..n));
    }

    if n < m {
        if new[..n] == *old {
            trace!(inserts = m - n, "diff fast path: append");
            return Some(inserts(new, n..m));
        }
        if new[m - n..] == *old {
            trace!(inserts = m - n, "diff fast path: prepend");
            return Some(inserts(new, 0..m - n));
        }
    }

    if m < n && old[..m] == *new {
        trace!(removes = n - m, "diff fast path: truncate");
        return Some(removes(old, m..n));
    }

    None
}

/// Inserts for `new[range]`, ascending.
fn inserts<T: Clone>(new: &[T], range: std::ops::Range<usize>) -> Vec<Edit<T>> {
    range.map(|i| Edit::insert(i, new[i].clone())).collect()
}

/// Removes for `old[range]`, descending.
fn removes<T: Clone>(old: &[T], range: std::ops::Range<usize>) -> Vec<Edit<T>> {
    range.rev().map(|i| Edit::remove(i, old[i].clone())).collect()
}

// =============================================================================
// GENERAL SEARCH
// =============================================================================

/// Forward greedy search over the edit graph, recording the furthest-reaching
/// x for every diagonal k at every distance d, then backtracking from (n, m).
fn shortest_edit_script<T: PartialEq + Clone>(old: &[T], new: &[T]) -> Vec<Edit<T>> {
    let n = old.len() as isize;
    let m = new.len() as isize;
    let max = (n + m) as usize;
    let offset = max as isize;

    // v[k + offset] = furthest x on diagonal k
    let mut v = vec![0isize; 2 * max + 2];
    let mut trace: Vec<Vec<isize>> = Vec::new();

    'search: for d in 0..=max as isize {
        trace.push(v.clone());
        let mut k = -d;
        while k <= d {
            let idx = (k + offset) as usize;
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;
            while x < n && y < m && old[x as usize] == new[y as usize] {
                x += 1;
                y += 1;
            }
            v[idx] = x;
            if x >= n && y >= m {
                break 'search;
            }
            k += 2;
        }
    }

    backtrack(old, new, &trace, offset)
}

fn backtrack<T: Clone>(old: &[T], new: &[T], trace: &[Vec<isize>], offset: isize) -> Vec<Edit<T>> {
    let mut x = old.len() as isize;
    let mut y = new.len() as isize;

    // Walking backwards yields removes by descending old index and inserts
    // by descending new index.
    let mut removed: Vec<Edit<T>> = Vec::new();
    let mut inserted: Vec<Edit<T>> = Vec::new();

    for (d, v) in trace.iter().enumerate().rev() {
        let d = d as isize;
        let k = x - y;
        let at = |k: isize| v[(k + offset) as usize];

        let prev_k = if k == -d || (k != d && at(k - 1) < at(k + 1)) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = at(prev_k);
        let prev_y = prev_x - prev_k;

        // Snake: matched elements
        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
        }

        if d > 0 {
            if x == prev_x {
                let i = prev_y as usize;
                inserted.push(Edit::insert(i, new[i].clone()));
            } else {
                let i = prev_x as usize;
                removed.push(Edit::remove(i, old[i].clone()));
            }
        }

        x = prev_x;
        y = prev_y;
    }

    inserted.reverse();
    removed.extend(inserted);
    removed
}

// =============================================================================
// TESTS
// =============================================================================
