//! Vertex weight normalization and construction.
//!
//! The partitioning call takes a flat weight buffer and infers the number of
//! balancing constraints from its length: a buffer of `n * c` entries means
//! `c` constraints, row-major by vertex. The shape is the entire contract,
//! so it is validated here before anything reaches the solver; a malformed
//! length would silently change constraint semantics, not crash.

use gsp_core::{CsrGraph, Idx, RelationSelector};

use crate::error::{PartitionError, PartitionResult};

/// Weight layout for one k-way call, inferred from the buffer shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedWeights<'a> {
    ncon: Idx,
    vwgt: Option<&'a [Idx]>,
}

impl<'a> NormalizedWeights<'a> {
    /// Number of balancing constraints (at least 1).
    pub fn ncon(&self) -> Idx {
        self.ncon
    }

    /// The weight buffer, or `None` for uniform single-constraint weights.
    pub fn vwgt(&self) -> Option<&'a [Idx]> {
        self.vwgt
    }
}

/// Determine the constraint count implied by `weights`.
///
/// An empty buffer selects unweighted partitioning: one constraint, no
/// explicit weights. Any other length must be an exact multiple of
/// `num_vertices`.
pub fn normalize(num_vertices: usize, weights: &[Idx]) -> PartitionResult<NormalizedWeights<'_>> {
    if weights.is_empty() {
        return Ok(NormalizedWeights {
            ncon: 1,
            vwgt: None,
        });
    }
    if num_vertices == 0 || weights.len() % num_vertices != 0 {
        return Err(PartitionError::MalformedWeights {
            len: weights.len(),
            num_vertices,
        });
    }
    Ok(NormalizedWeights {
        ncon: (weights.len() / num_vertices) as Idx,
        vwgt: Some(weights),
    })
}

/// What a built weight buffer should balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceSpec<'a> {
    /// Per-vertex class labels; each distinct class becomes one balancing
    /// constraint, so every part receives a fair share of every class.
    pub vertex_classes: Option<&'a [Idx]>,
    /// Add a degree constraint so parts also even out incident edges.
    pub balance_edges: bool,
}

/// Build a flat multi-constraint weight buffer for `graph`.
///
/// One column per distinct class label (one-hot membership), plus one degree
/// column when `balance_edges` is set, interleaved row-major by vertex. An
/// empty spec yields an empty buffer, i.e. unweighted partitioning.
pub fn balance_weights<G>(graph: &G, spec: &BalanceSpec<'_>) -> PartitionResult<Vec<Idx>>
where
    G: CsrGraph + ?Sized,
{
    let num_vertices = graph.num_vertices();
    let mut columns: Vec<Vec<Idx>> = Vec::new();

    if let Some(classes) = spec.vertex_classes {
        if classes.len() != num_vertices {
            return Err(PartitionError::MalformedWeights {
                len: classes.len(),
                num_vertices,
            });
        }
        let mut distinct = classes.to_vec();
        distinct.sort_unstable();
        distinct.dedup();
        for class in distinct {
            columns.push(classes.iter().map(|&c| Idx::from(c == class)).collect());
        }
    }

    if spec.balance_edges {
        let csr = graph.csr_view(RelationSelector::Sole)?;
        columns.push(
            (0..num_vertices)
                .map(|v| csr.indptr[v + 1] - csr.indptr[v])
                .collect(),
        );
    }

    if columns.is_empty() {
        return Ok(Vec::new());
    }

    let mut flat = Vec::with_capacity(num_vertices * columns.len());
    for v in 0..num_vertices {
        for column in &columns {
            flat.push(column[v]);
        }
    }
    Ok(flat)
}
