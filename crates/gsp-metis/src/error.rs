//! Call-level failure taxonomy for the partitioning service.

use gsp_core::{GraphError, Idx};
use thiserror::Error;

/// Errors a partitioning call can end with.
///
/// Every variant is terminal for the call. A failed call never returns a
/// partial assignment and is never retried internally; local validation
/// runs before the solver is invoked, so malformed input never reaches it.
#[derive(Debug, Error)]
pub enum PartitionError {
    /// The graph handle cannot yield a single symmetric CSR view.
    #[error("unsupported graph shape: {0}")]
    UnsupportedGraph(#[from] GraphError),

    /// The backend was built with a different index width than this
    /// workspace. This is a build/configuration defect, not a data error.
    #[error(
        "graph ids are {graph} bytes wide but the {backend:?} partitioner \
         was built with {width}-byte indices"
    )]
    IndexWidthMismatch {
        graph: usize,
        backend: String,
        width: usize,
    },

    /// The vertex weight buffer length is not a multiple of the vertex
    /// count, so no constraint count can be inferred from it.
    #[error(
        "vertex weight buffer has {len} entries, which is not a multiple of \
         {num_vertices} vertices"
    )]
    MalformedWeights { len: usize, num_vertices: usize },

    /// The requested part count is below one.
    #[error("invalid part count {0}, at least one part is required")]
    InvalidPartCount(Idx),

    /// The backend rejected its input even though local validation passed;
    /// indicates a defect in this adaptation layer.
    #[error("partitioner rejected its input")]
    RejectedInput,

    /// The backend could not allocate working memory for this graph and
    /// part count. Reduce the part count or the graph before retrying.
    #[error("partitioner ran out of working memory")]
    OutOfMemory,

    /// Any other non-success backend status, preserved raw for diagnosis.
    #[error("partitioner failed with status {status}")]
    BackendFailure { status: i32 },
}

/// Convenience type alias for Results using PartitionError.
pub type PartitionResult<T> = Result<T, PartitionError>;
