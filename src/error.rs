//! Errors reported when a tree's structural invariants do not hold.

use thiserror::Error;

/// A violated invariant found by [`Tree::validate`](crate::Tree::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// The inorder key sequence is not strictly ascending. `position` is the inorder index of
    /// the first key that is not greater than its predecessor.
    #[error("inorder keys are not strictly ascending at position {position}")]
    OutOfOrder {
        /// Inorder index of the offending key.
        position: usize,
    },
    /// The cached node count disagrees with the number of nodes reachable from the root.
    #[error("tree records {recorded} nodes but {counted} are reachable")]
    LenMismatch {
        /// The count the tree keeps up to date on insert and delete.
        recorded: usize,
        /// The count found by walking the tree.
        counted: usize,
    },
}
