//! Graph handles that can expose a CSR view for partitioning.
//!
//! Two storage representations can be partitioned: the homogeneous
//! [`Graph`] defined here and the relation-keyed
//! [`RelationGraph`](crate::hetero::RelationGraph). Both implement
//! [`CsrGraph`], the capability interface the partitioning pipeline depends
//! on, so the pipeline itself is representation-agnostic.

use crate::csr::{CsrStorage, CsrView, Idx};
use crate::error::{GraphError, GraphResult};

/// Identifies which edge relation to extract from a handle.
///
/// Handles with a single implicit relation accept [`RelationSelector::Sole`];
/// relation-keyed handles additionally accept the relation's name. A handle
/// exposing more than one relation is rejected outright, whatever the
/// selector says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelationSelector<'a> {
    /// The handle's only relation, whatever it is called.
    #[default]
    Sole,
    /// A relation by name; must match the handle's single relation.
    Named(&'a str),
}

/// Capability interface for graph handles that can yield a CSR adjacency.
///
/// Extraction is read-only and idempotent: the handle is never mutated, and
/// repeated calls on an unmodified handle return bit-identical arrays.
pub trait CsrGraph {
    fn num_vertices(&self) -> usize;

    /// Total directed adjacency entries across all relations.
    fn num_edges(&self) -> usize;

    /// Extract the CSR view of the selected relation.
    ///
    /// Fails with a [`GraphError`] when the handle cannot produce a single
    /// symmetric CSR: more than one relation, an unknown relation name, or
    /// no relation at all.
    fn csr_view(&self, relation: RelationSelector<'_>) -> GraphResult<CsrView<'_>>;
}

/// Homogeneous immutable graph, stored directly as symmetric CSR.
///
/// Construction asserts the adjacency is simple and symmetric, so extraction
/// never re-validates and never copies. In-neighbors and out-neighbors of a
/// symmetric graph coincide, which is exactly what the partitioner assumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    csr: CsrStorage,
}

impl Graph {
    /// Wrap an existing CSR adjacency, checking that it is simple and
    /// symmetric.
    pub fn from_csr(csr: CsrStorage) -> GraphResult<Self> {
        csr.check_simple()?;
        csr.check_symmetric()?;
        Ok(Self { csr })
    }

    /// Build from an undirected edge list, adding reverse edges and dropping
    /// self loops and duplicates. See [`CsrStorage::from_edges`].
    pub fn from_edges(num_vertices: usize, edges: &[(Idx, Idx)]) -> GraphResult<Self> {
        // from_edges output is simple and symmetric by construction.
        Ok(Self {
            csr: CsrStorage::from_edges(num_vertices, edges)?,
        })
    }

    pub fn csr(&self) -> &CsrStorage {
        &self.csr
    }
}

impl CsrGraph for Graph {
    fn num_vertices(&self) -> usize {
        self.csr.num_vertices()
    }

    fn num_edges(&self) -> usize {
        self.csr.num_edges()
    }

    fn csr_view(&self, relation: RelationSelector<'_>) -> GraphResult<CsrView<'_>> {
        match relation {
            RelationSelector::Sole => {
                tracing::debug!(
                    "extracted csr view: {} vertices, {} edges",
                    self.csr.num_vertices(),
                    self.csr.num_edges()
                );
                Ok(self.csr.view())
            }
            RelationSelector::Named(name) => Err(GraphError::UnknownRelation(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring4() -> Graph {
        Graph::from_csr(
            CsrStorage::new(vec![0, 2, 4, 6, 8], vec![1, 3, 0, 2, 1, 3, 2, 0]).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_from_csr_requires_symmetry() {
        let directed = CsrStorage::new(vec![0, 1, 1], vec![1]).unwrap();
        assert!(matches!(
            Graph::from_csr(directed),
            Err(GraphError::NotSymmetric { .. })
        ));
    }

    #[test]
    fn test_from_csr_requires_simple() {
        let loops = CsrStorage::new(vec![0, 1], vec![0]).unwrap();
        assert!(matches!(
            Graph::from_csr(loops),
            Err(GraphError::SelfLoop { .. })
        ));
    }

    #[test]
    fn test_counts() {
        let g = ring4();
        assert_eq!(g.num_vertices(), 4);
        assert_eq!(g.num_edges(), 8);
    }

    #[test]
    fn test_sole_extraction() {
        let g = ring4();
        let view = g.csr_view(RelationSelector::Sole).unwrap();
        assert_eq!(view.indptr, &[0, 2, 4, 6, 8]);
        assert_eq!(view.indices, &[1, 3, 0, 2, 1, 3, 2, 0]);
    }

    #[test]
    fn test_named_selector_rejected() {
        let g = ring4();
        assert!(matches!(
            g.csr_view(RelationSelector::Named("follows")),
            Err(GraphError::UnknownRelation(name)) if name == "follows"
        ));
    }

    /// Extracting twice from the same unmodified handle yields bit-identical
    /// arrays.
    #[test]
    fn test_extraction_is_idempotent() {
        let g = ring4();
        let a = g.csr_view(RelationSelector::Sole).unwrap();
        let b = g.csr_view(RelationSelector::Sole).unwrap();
        assert_eq!(a.indptr, b.indptr);
        assert_eq!(a.indices, b.indices);
        assert!(std::ptr::eq(a.indptr.as_ptr(), b.indptr.as_ptr()));
    }

    #[test]
    fn test_from_edges_matches_from_csr() {
        let from_edges = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        assert_eq!(&from_edges, &ring4());
    }
}
