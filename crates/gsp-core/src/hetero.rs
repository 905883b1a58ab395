//! Relation-keyed graph handles.
//!
//! The second storage representation: a vertex set shared by any number of
//! named edge relations, each stored as its own CSR. Partitioning only
//! supports handles that have collapsed to exactly one relation; everything
//! else is rejected before extraction.

use crate::csr::{CsrStorage, CsrView};
use crate::error::{GraphError, GraphResult};
use crate::graph::{CsrGraph, RelationSelector};

#[derive(Debug, Clone)]
struct Relation {
    name: String,
    csr: CsrStorage,
}

/// A graph whose edges are grouped into named relations.
#[derive(Debug, Clone)]
pub struct RelationGraph {
    num_vertices: usize,
    relations: Vec<Relation>,
}

impl RelationGraph {
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            relations: Vec::new(),
        }
    }

    /// Register a relation. The adjacency must span the graph's vertex set
    /// and, like the homogeneous handle, be simple and symmetric.
    pub fn add_relation(&mut self, name: impl Into<String>, csr: CsrStorage) -> GraphResult<()> {
        let name = name.into();
        if self.relations.iter().any(|r| r.name == name) {
            return Err(GraphError::DuplicateRelation(name));
        }
        if csr.num_vertices() != self.num_vertices {
            return Err(GraphError::VertexCountMismatch {
                name,
                relation_vertices: csr.num_vertices(),
                graph_vertices: self.num_vertices,
            });
        }
        csr.check_simple()?;
        csr.check_symmetric()?;
        self.relations.push(Relation { name, csr });
        Ok(())
    }

    pub fn num_relations(&self) -> usize {
        self.relations.len()
    }

    pub fn relation_names(&self) -> impl Iterator<Item = &str> {
        self.relations.iter().map(|r| r.name.as_str())
    }

    pub fn relation(&self, name: &str) -> Option<&CsrStorage> {
        self.relations
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.csr)
    }
}

impl CsrGraph for RelationGraph {
    fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    fn num_edges(&self) -> usize {
        self.relations.iter().map(|r| r.csr.num_edges()).sum()
    }

    fn csr_view(&self, relation: RelationSelector<'_>) -> GraphResult<CsrView<'_>> {
        // A handle still carrying several relations cannot be partitioned,
        // no matter which one the selector asks for.
        let [sole] = self.relations.as_slice() else {
            return Err(GraphError::RelationCount(self.relations.len()));
        };
        match relation {
            RelationSelector::Sole => {}
            RelationSelector::Named(name) if name == sole.name => {}
            RelationSelector::Named(name) => {
                return Err(GraphError::UnknownRelation(name.to_string()));
            }
        }
        tracing::debug!(
            "extracted csr view of relation {:?}: {} vertices, {} edges",
            sole.name,
            self.num_vertices,
            sole.csr.num_edges()
        );
        Ok(sole.csr.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path3() -> CsrStorage {
        // 0 - 1 - 2
        CsrStorage::new(vec![0, 1, 3, 4], vec![1, 0, 2, 1]).unwrap()
    }

    fn pair3() -> CsrStorage {
        // single edge 0 - 2
        CsrStorage::new(vec![0, 1, 1, 2], vec![2, 0]).unwrap()
    }

    #[test]
    fn test_single_relation_extraction() {
        let mut g = RelationGraph::new(3);
        g.add_relation("links", path3()).unwrap();
        assert_eq!(g.num_relations(), 1);
        assert_eq!(g.num_edges(), 4);

        let view = g.csr_view(RelationSelector::Sole).unwrap();
        assert_eq!(view.num_vertices(), 3);

        let named = g.csr_view(RelationSelector::Named("links")).unwrap();
        assert_eq!(view, named);
    }

    #[test]
    fn test_unknown_relation_name() {
        let mut g = RelationGraph::new(3);
        g.add_relation("links", path3()).unwrap();
        assert!(matches!(
            g.csr_view(RelationSelector::Named("follows")),
            Err(GraphError::UnknownRelation(_))
        ));
    }

    #[test]
    fn test_multiple_relations_always_rejected() {
        let mut g = RelationGraph::new(3);
        g.add_relation("links", path3()).unwrap();
        g.add_relation("cites", pair3()).unwrap();

        for selector in [RelationSelector::Sole, RelationSelector::Named("links")] {
            assert!(matches!(
                g.csr_view(selector),
                Err(GraphError::RelationCount(2))
            ));
        }
    }

    #[test]
    fn test_zero_relations_rejected() {
        let g = RelationGraph::new(3);
        assert!(matches!(
            g.csr_view(RelationSelector::Sole),
            Err(GraphError::RelationCount(0))
        ));
    }

    #[test]
    fn test_add_relation_validates() {
        let mut g = RelationGraph::new(4);
        assert!(matches!(
            g.add_relation("links", path3()),
            Err(GraphError::VertexCountMismatch { .. })
        ));

        let mut g = RelationGraph::new(3);
        g.add_relation("links", path3()).unwrap();
        assert!(matches!(
            g.add_relation("links", path3()),
            Err(GraphError::DuplicateRelation(_))
        ));

        let directed = CsrStorage::new(vec![0, 1, 1, 1], vec![1]).unwrap();
        assert!(matches!(
            g.add_relation("oneway", directed),
            Err(GraphError::NotSymmetric { .. })
        ));
    }
}
