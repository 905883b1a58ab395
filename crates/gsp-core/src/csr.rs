//! Compressed sparse row adjacency storage.
//!
//! Graphs are stored in the one contiguous-array convention the native
//! partitioner consumes directly: an offsets array `indptr` of length
//! `num_vertices + 1` and a neighbor array `indices` of length `num_edges`.
//! Row `v` spans `indices[indptr[v]..indptr[v + 1]]`. An undirected edge is
//! stored as two directed entries, so a symmetric graph with `e` undirected
//! edges reports `2 * e` edges here.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Vertex/edge id type. All adjacency offsets, neighbor ids, vertex weights,
/// and partition ids share this width, and the native partitioner must be
/// built with a matching index width.
pub type Idx = i64;

/// Owned, validated CSR adjacency.
///
/// Construction checks the structural invariants once; afterwards the arrays
/// are immutable and can be viewed without copying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsrStorage {
    indptr: Vec<Idx>,
    indices: Vec<Idx>,
}

/// Borrowed, zero-copy view of a CSR adjacency.
///
/// This is what the partitioning pipeline extracts from a graph handle and
/// hands to the solver. Two views over the same unmodified storage are
/// bit-identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsrView<'a> {
    /// Row offsets, length = `num_vertices + 1`.
    pub indptr: &'a [Idx],
    /// Neighbor ids, length = `num_edges`.
    pub indices: &'a [Idx],
}

impl CsrView<'_> {
    pub fn num_vertices(&self) -> usize {
        self.indptr.len() - 1
    }

    pub fn num_edges(&self) -> usize {
        self.indices.len()
    }
}

impl CsrStorage {
    /// Build a CSR storage from raw arrays, validating the invariants:
    /// `indptr[0] == 0`, offsets non-decreasing, the final offset equal to
    /// `indices.len()`, and every neighbor id in `[0, num_vertices)`.
    pub fn new(indptr: Vec<Idx>, indices: Vec<Idx>) -> GraphResult<Self> {
        let Some(&first) = indptr.first() else {
            return Err(GraphError::EmptyIndptr);
        };
        if first != 0 {
            return Err(GraphError::IndptrStart(first));
        }
        let mut prev = 0;
        for (position, &offset) in indptr.iter().enumerate().skip(1) {
            if offset < prev {
                return Err(GraphError::IndptrDecreasing { position });
            }
            prev = offset;
        }
        if prev as usize != indices.len() {
            return Err(GraphError::EdgeCountMismatch {
                declared: prev,
                actual: indices.len(),
            });
        }
        let num_vertices = indptr.len() - 1;
        for &neighbor in &indices {
            if neighbor < 0 || neighbor as usize >= num_vertices {
                return Err(GraphError::VertexOutOfRange {
                    index: neighbor,
                    num_vertices,
                });
            }
        }
        Ok(Self { indptr, indices })
    }

    /// A graph with no vertices and no edges.
    pub fn empty() -> Self {
        Self {
            indptr: vec![0],
            indices: Vec::new(),
        }
    }

    /// Build a symmetric, simple CSR from an undirected edge list.
    ///
    /// Each input pair contributes both directed entries, rows come out
    /// sorted, duplicate edges collapse to one, and self loops are dropped.
    /// This is the bidirection step callers need before partitioning a graph
    /// that was recorded one-directional.
    pub fn from_edges(num_vertices: usize, edges: &[(Idx, Idx)]) -> GraphResult<Self> {
        let mut pairs = Vec::with_capacity(edges.len() * 2);
        for &(u, v) in edges {
            for id in [u, v] {
                if id < 0 || id as usize >= num_vertices {
                    return Err(GraphError::VertexOutOfRange {
                        index: id,
                        num_vertices,
                    });
                }
            }
            if u == v {
                continue;
            }
            pairs.push((u, v));
            pairs.push((v, u));
        }
        pairs.sort_unstable();
        pairs.dedup();

        let mut indptr = Vec::with_capacity(num_vertices + 1);
        let mut indices = Vec::with_capacity(pairs.len());
        indptr.push(0);
        let mut pos = 0;
        for u in 0..num_vertices {
            while pos < pairs.len() && pairs[pos].0 == u as Idx {
                indices.push(pairs[pos].1);
                pos += 1;
            }
            indptr.push(indices.len() as Idx);
        }
        Ok(Self { indptr, indices })
    }

    pub fn num_vertices(&self) -> usize {
        self.indptr.len() - 1
    }

    pub fn num_edges(&self) -> usize {
        self.indices.len()
    }

    /// Zero-copy view over the stored arrays.
    pub fn view(&self) -> CsrView<'_> {
        CsrView {
            indptr: &self.indptr,
            indices: &self.indices,
        }
    }

    /// Neighbor ids of vertex `v`.
    pub fn neighbors(&self, v: usize) -> &[Idx] {
        let start = self.indptr[v] as usize;
        let end = self.indptr[v + 1] as usize;
        &self.indices[start..end]
    }

    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    /// Reject self loops and parallel edges.
    pub fn check_simple(&self) -> GraphResult<()> {
        for u in 0..self.num_vertices() {
            let mut row = self.neighbors(u).to_vec();
            row.sort_unstable();
            for pair in row.windows(2) {
                if pair[0] == pair[1] {
                    return Err(GraphError::DuplicateEdge {
                        vertex: u as Idx,
                        neighbor: pair[0],
                    });
                }
            }
            if row.binary_search(&(u as Idx)).is_ok() {
                return Err(GraphError::SelfLoop { vertex: u as Idx });
            }
        }
        Ok(())
    }

    /// Require every directed entry `(u, v)` to have its reverse `(v, u)`.
    ///
    /// The partitioner treats in-neighbors and out-neighbors as identical,
    /// so only symmetric adjacency is meaningful to it.
    pub fn check_symmetric(&self) -> GraphResult<()> {
        let num_vertices = self.num_vertices();
        let mut sorted_rows: Vec<Vec<Idx>> = Vec::with_capacity(num_vertices);
        for v in 0..num_vertices {
            let mut row = self.neighbors(v).to_vec();
            row.sort_unstable();
            sorted_rows.push(row);
        }
        for u in 0..num_vertices {
            for &v in self.neighbors(u) {
                if sorted_rows[v as usize].binary_search(&(u as Idx)).is_err() {
                    return Err(GraphError::NotSymmetric {
                        vertex: u as Idx,
                        neighbor: v,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring4() -> CsrStorage {
        // 4-vertex cycle: 0-1-2-3-0
        CsrStorage::new(vec![0, 2, 4, 6, 8], vec![1, 3, 0, 2, 1, 3, 2, 0]).unwrap()
    }

    #[test]
    fn test_valid_csr() {
        let csr = ring4();
        assert_eq!(csr.num_vertices(), 4);
        assert_eq!(csr.num_edges(), 8);
        assert_eq!(csr.neighbors(0), &[1, 3]);
        assert_eq!(csr.degree(2), 2);
    }

    #[test]
    fn test_empty_graph() {
        let csr = CsrStorage::empty();
        assert_eq!(csr.num_vertices(), 0);
        assert_eq!(csr.num_edges(), 0);
        assert!(csr.check_simple().is_ok());
        assert!(csr.check_symmetric().is_ok());
    }

    #[test]
    fn test_rejects_empty_indptr() {
        assert!(matches!(
            CsrStorage::new(vec![], vec![]),
            Err(GraphError::EmptyIndptr)
        ));
    }

    #[test]
    fn test_rejects_nonzero_start() {
        assert!(matches!(
            CsrStorage::new(vec![1, 2], vec![0]),
            Err(GraphError::IndptrStart(1))
        ));
    }

    #[test]
    fn test_rejects_decreasing_indptr() {
        assert!(matches!(
            CsrStorage::new(vec![0, 2, 1], vec![1, 0]),
            Err(GraphError::IndptrDecreasing { position: 2 })
        ));
    }

    #[test]
    fn test_rejects_edge_count_mismatch() {
        assert!(matches!(
            CsrStorage::new(vec![0, 3], vec![0]),
            Err(GraphError::EdgeCountMismatch {
                declared: 3,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_neighbor() {
        assert!(matches!(
            CsrStorage::new(vec![0, 1], vec![5]),
            Err(GraphError::VertexOutOfRange { index: 5, .. })
        ));
        assert!(matches!(
            CsrStorage::new(vec![0, 1], vec![-1]),
            Err(GraphError::VertexOutOfRange { index: -1, .. })
        ));
    }

    #[test]
    fn test_check_simple() {
        let csr = ring4();
        assert!(csr.check_simple().is_ok());

        let loops = CsrStorage::new(vec![0, 1], vec![0]).unwrap();
        assert!(matches!(
            loops.check_simple(),
            Err(GraphError::SelfLoop { vertex: 0 })
        ));

        let multi = CsrStorage::new(vec![0, 2, 4], vec![1, 1, 0, 0]).unwrap();
        assert!(matches!(
            multi.check_simple(),
            Err(GraphError::DuplicateEdge {
                vertex: 0,
                neighbor: 1
            })
        ));
    }

    #[test]
    fn test_check_symmetric() {
        assert!(ring4().check_symmetric().is_ok());

        // 0 -> 1 with no reverse edge
        let directed = CsrStorage::new(vec![0, 1, 1], vec![1]).unwrap();
        assert!(matches!(
            directed.check_symmetric(),
            Err(GraphError::NotSymmetric {
                vertex: 0,
                neighbor: 1
            })
        ));
    }

    #[test]
    fn test_from_edges_symmetrizes() {
        // One direction per edge in the input; both directions come out.
        let csr = CsrStorage::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        assert_eq!(csr.num_edges(), 8);
        assert!(csr.check_simple().is_ok());
        assert!(csr.check_symmetric().is_ok());
        assert_eq!(csr.neighbors(0), &[1, 3]);
        assert_eq!(csr.neighbors(3), &[0, 2]);
    }

    #[test]
    fn test_from_edges_dedups_and_drops_loops() {
        let csr = CsrStorage::from_edges(3, &[(0, 1), (1, 0), (0, 1), (2, 2)]).unwrap();
        assert_eq!(csr.num_edges(), 2);
        assert_eq!(csr.neighbors(0), &[1]);
        assert_eq!(csr.neighbors(1), &[0]);
        assert_eq!(csr.neighbors(2), &[] as &[Idx]);
    }

    #[test]
    fn test_from_edges_rejects_out_of_range() {
        assert!(matches!(
            CsrStorage::from_edges(2, &[(0, 2)]),
            Err(GraphError::VertexOutOfRange { index: 2, .. })
        ));
    }

    #[test]
    fn test_view_is_zero_copy_and_stable() {
        let csr = ring4();
        let a = csr.view();
        let b = csr.view();
        assert_eq!(a, b);
        assert!(std::ptr::eq(a.indptr.as_ptr(), b.indptr.as_ptr()));
    }

    #[test]
    fn test_serde_round_trip() {
        let csr = ring4();
        let json = serde_json::to_string(&csr).unwrap();
        let back: CsrStorage = serde_json::from_str(&json).unwrap();
        assert_eq!(csr, back);
    }
}
