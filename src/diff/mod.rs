// ============================================================================
// spark-hydrate - Diff Module
// Minimal insert/remove edit scripts for list mutations
// ============================================================================

mod myers;

pub use myers::diff;

use crate::core::types::{Edit, EditOp};

/// Apply an edit script to `seq`, in emission order.
///
/// This is the reference consumer of [`diff`] scripts and of the edits a
/// [`List`](crate::List) sends to its edit subscribers.
///
/// # Panics
///
/// Panics if an edit addresses an index outside the evolving sequence,
/// which means the script was not produced for `seq`.
///
/// # Example
///
/// ```
/// use spark_hydrate::{apply_edits, diff};
///
/// let mut seq = vec![1, 2, 3];
/// let target = vec![0, 2, 3, 4];
/// let edits = diff(&seq, &target);
/// apply_edits(&mut seq, &edits);
/// assert_eq!(seq, target);
/// ```
pub fn apply_edits<T: Clone>(seq: &mut Vec<T>, edits: &[Edit<T>]) {
    for edit in edits {
        match edit.op {
            EditOp::Insert => seq.insert(edit.index, edit.value.clone()),
            EditOp::Remove => {
                seq.remove(edit.index);
            }
        }
    }
}
