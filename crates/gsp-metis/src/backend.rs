//! Backend trait for k-way partitioning solvers.
//!
//! The pipeline in [`crate::partition`] depends only on this trait, so the
//! native METIS backend and in-test stand-ins are interchangeable. A backend
//! is an opaque black box: one blocking call in, a terminal status out.

use gsp_core::{CsrView, Idx};
use thiserror::Error;

use crate::options::MetisOptions;

/// Terminal statuses a partitioning backend can report.
///
/// Mirrors the native solver's return codes; anything that is neither a
/// success nor one of the two named failures keeps its raw status for
/// diagnosis.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BackendError {
    /// The solver judged its input invalid.
    #[error("invalid input")]
    Input,
    /// The solver could not allocate working memory.
    #[error("out of memory")]
    Memory,
    /// Any other non-success status.
    #[error("status {0}")]
    Other(i32),
}

/// Raw output of one k-way call, adopted by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KwayPartition {
    /// One part id per vertex, index-aligned to vertex id.
    pub assignments: Vec<Idx>,
    /// The achieved objective (edge cut, under default options).
    pub edge_cut: Idx,
}

/// A k-way multi-constraint graph partitioning solver.
///
/// Implementations must treat every borrowed buffer as read-only and return
/// exactly `csr.num_vertices()` assignments, each in `[0, nparts)`. The call
/// blocks until the solver finishes; there is no progress reporting and no
/// cancellation.
pub trait KwayBackend: Send + Sync {
    /// Short identifier (e.g. "metis"), used in logs and error messages.
    fn id(&self) -> &str;

    /// Byte width of the backend's native index type. The pipeline refuses
    /// to call a backend whose width differs from [`Idx`]'s.
    fn index_width(&self) -> usize;

    /// One blocking k-way call.
    ///
    /// `ncon` is the number of balancing constraints; `vwgt` is the
    /// row-major `num_vertices * ncon` weight buffer, or `None` for
    /// uniform weights.
    fn part_kway(
        &self,
        csr: CsrView<'_>,
        ncon: Idx,
        vwgt: Option<&[Idx]>,
        nparts: Idx,
        options: &MetisOptions,
    ) -> Result<KwayPartition, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The trait must stay object-safe; the pipeline accepts `&dyn` too.
    #[test]
    fn test_backend_is_object_safe() {
        fn _accepts_backend(_b: &dyn KwayBackend) {}
    }

    #[test]
    fn test_backend_error_display() {
        assert_eq!(BackendError::Input.to_string(), "invalid input");
        assert_eq!(BackendError::Other(-4).to_string(), "status -4");
    }
}
