use thiserror::Error;

/// First structural invariant found broken by [`crate::util::assert_avl_tree`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// The in-order sequence is not strictly ascending at `index`.
    #[error("node order violated at in-order position {index}")]
    Unordered { index: usize },
    #[error("height mismatch: expected {expected}, got {actual}")]
    HeightMismatch { expected: i32, actual: i32 },
    #[error("AVL balance violated: balance factor {balance_factor}")]
    Unbalanced { balance_factor: i32 },
}
