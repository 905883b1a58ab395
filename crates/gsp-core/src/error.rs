//! Structural error types for the graph model.

use crate::csr::Idx;
use thiserror::Error;

/// Errors raised while validating or extracting adjacency structure.
///
/// Every variant describes a shape the partitioning pipeline cannot work
/// with; none of them is recoverable within a call.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The indptr array is empty (it must hold at least the leading zero).
    #[error("indptr array is empty; expected at least one offset")]
    EmptyIndptr,

    /// The first indptr offset is not zero.
    #[error("indptr must start at 0, found {0}")]
    IndptrStart(Idx),

    /// An indptr offset is smaller than its predecessor.
    #[error("indptr decreases at position {position}")]
    IndptrDecreasing { position: usize },

    /// The final indptr offset disagrees with the indices length.
    #[error("indptr declares {declared} edges but {actual} indices were supplied")]
    EdgeCountMismatch { declared: Idx, actual: usize },

    /// A neighbor id lies outside `[0, num_vertices)`.
    #[error("vertex id {index} out of range for a graph with {num_vertices} vertices")]
    VertexOutOfRange { index: Idx, num_vertices: usize },

    /// A vertex is its own neighbor.
    #[error("vertex {vertex} has a self loop")]
    SelfLoop { vertex: Idx },

    /// The same neighbor appears twice in one adjacency row.
    #[error("duplicate edge between {vertex} and {neighbor}")]
    DuplicateEdge { vertex: Idx, neighbor: Idx },

    /// Edge `(vertex, neighbor)` has no reverse entry.
    #[error("edge ({vertex}, {neighbor}) has no reverse edge; adjacency must be symmetric")]
    NotSymmetric { vertex: Idx, neighbor: Idx },

    /// The handle exposes a number of relations other than one.
    #[error("graph exposes {0} edge relations, partitioning requires exactly one")]
    RelationCount(usize),

    /// The selector named a relation the handle does not have.
    #[error("unknown relation {0:?}")]
    UnknownRelation(String),

    /// A relation's vertex set disagrees with the handle's vertex set.
    #[error("relation {name:?} spans {relation_vertices} vertices, graph has {graph_vertices}")]
    VertexCountMismatch {
        name: String,
        relation_vertices: usize,
        graph_vertices: usize,
    },

    /// A relation name was registered twice.
    #[error("relation {0:?} already registered")]
    DuplicateRelation(String),
}

/// Convenience type alias for Results using GraphError.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphError::RelationCount(3);
        assert!(err.to_string().contains("3 edge relations"));

        let err = GraphError::NotSymmetric {
            vertex: 4,
            neighbor: 7,
        };
        assert!(err.to_string().contains("(4, 7)"));
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> GraphResult<()> {
            Err(GraphError::EmptyIndptr)
        }

        fn outer() -> GraphResult<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
