//! The partitioning pipeline: extract, normalize, solve, marshal.
//!
//! One call is a pure function of (graph snapshot, part count, weights,
//! options): validate locally, extract the CSR view, infer the constraint
//! count, make a single blocking solver call, and either hand the caller a
//! freshly allocated [`Partitioning`] or fail the whole call. Nothing is
//! retried and nothing is cached across calls.

use gsp_core::{CsrGraph, Idx, RelationSelector};
use serde::{Deserialize, Serialize};

use crate::backend::{BackendError, KwayBackend};
use crate::error::{PartitionError, PartitionResult};
use crate::options::MetisOptions;
use crate::weights;

/// A completed k-way partitioning.
///
/// Owns one part id per vertex, index-aligned to vertex id, each in
/// `[0, num_parts)`. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partitioning {
    assignments: Vec<Idx>,
    edge_cut: Idx,
    num_parts: Idx,
}

impl Partitioning {
    /// Part id per vertex.
    pub fn assignments(&self) -> &[Idx] {
        &self.assignments
    }

    /// Consume into the raw assignment vector.
    pub fn into_assignments(self) -> Vec<Idx> {
        self.assignments
    }

    /// Part id of one vertex.
    pub fn part_of(&self, vertex: usize) -> Idx {
        self.assignments[vertex]
    }

    /// The achieved edge-cut objective.
    pub fn edge_cut(&self) -> Idx {
        self.edge_cut
    }

    /// The part count the call was made with.
    pub fn num_parts(&self) -> Idx {
        self.num_parts
    }

    /// Vertices per part.
    pub fn part_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.num_parts as usize];
        for &part in &self.assignments {
            sizes[part as usize] += 1;
        }
        sizes
    }
}

/// Partition `graph` into `num_parts` parts with an explicit backend,
/// relation selector, and options.
///
/// `vertex_weights` is a flat row-major buffer whose length must be zero
/// (unweighted) or a multiple of the vertex count; the multiple is the
/// number of balancing constraints. See the crate docs for the full
/// contract.
///
/// # Errors
///
/// Fails without invoking the backend on an invalid part count, an index
/// width mismatch, a handle that cannot yield a single symmetric CSR, or a
/// malformed weight buffer; fails with the backend's terminal status mapped
/// onto [`PartitionError`] otherwise. Never returns a partial assignment.
pub fn partition_with<G, B>(
    backend: &B,
    graph: &G,
    relation: RelationSelector<'_>,
    num_parts: Idx,
    vertex_weights: &[Idx],
    options: &MetisOptions,
) -> PartitionResult<Partitioning>
where
    G: CsrGraph + ?Sized,
    B: KwayBackend + ?Sized,
{
    if num_parts < 1 {
        return Err(PartitionError::InvalidPartCount(num_parts));
    }

    let graph_width = std::mem::size_of::<Idx>();
    if backend.index_width() != graph_width {
        return Err(PartitionError::IndexWidthMismatch {
            graph: graph_width,
            backend: backend.id().to_string(),
            width: backend.index_width(),
        });
    }

    let csr = graph.csr_view(relation)?;
    let num_vertices = csr.num_vertices();
    let weights = weights::normalize(num_vertices, vertex_weights)?;

    if num_vertices == 0 {
        // Nothing to assign; the solver's behavior on empty input is
        // unspecified, so resolve the degenerate case locally.
        return Ok(Partitioning {
            assignments: Vec::new(),
            edge_cut: 0,
            num_parts,
        });
    }

    let raw = backend
        .part_kway(csr, weights.ncon(), weights.vwgt(), num_parts, options)
        .map_err(|status| match status {
            BackendError::Input => PartitionError::RejectedInput,
            BackendError::Memory => PartitionError::OutOfMemory,
            BackendError::Other(status) => PartitionError::BackendFailure { status },
        })?;
    debug_assert_eq!(raw.assignments.len(), num_vertices);

    tracing::info!(
        "partitioned graph with {} vertices and {} edges into {} parts ({} edge cuts)",
        num_vertices,
        csr.num_edges(),
        num_parts,
        raw.edge_cut
    );

    Ok(Partitioning {
        assignments: raw.assignments,
        edge_cut: raw.edge_cut,
        num_parts,
    })
}

/// Partition `graph` with the native METIS backend, the handle's sole
/// relation, and default options.
#[cfg(feature = "native")]
pub fn partition<G>(
    graph: &G,
    num_parts: Idx,
    vertex_weights: &[Idx],
) -> PartitionResult<Partitioning>
where
    G: CsrGraph + ?Sized,
{
    partition_with(
        &crate::native::MetisBackend,
        graph,
        RelationSelector::Sole,
        num_parts,
        vertex_weights,
        &MetisOptions::default(),
    )
}
