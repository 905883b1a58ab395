//! # gsp-core: Graph Sharding Core
//!
//! Immutable graph model for sharding large graphs across distributed
//! workers. A graph lives in compressed sparse row (CSR) form, the one
//! contiguous-array convention the native partitioner consumes, and is
//! reached through the [`CsrGraph`] capability trait, so the partitioning
//! pipeline in `gsp-metis` never cares which storage representation backs a
//! handle.
//!
//! ## Representations
//!
//! - [`Graph`]: homogeneous immutable graph, stored directly as symmetric
//!   CSR.
//! - [`RelationGraph`]: vertex set shared by named edge relations, each its
//!   own CSR; partitionable only once it has collapsed to a single relation.
//!
//! Both validate their structure at construction (offsets, bounds, simple,
//! symmetric), so extraction is zero-copy and idempotent.
//!
//! ## Quick Start
//!
//! ```rust
//! use gsp_core::{CsrGraph, Graph, RelationSelector};
//!
//! // A 4-cycle, built from one direction per edge; reverse edges are added.
//! let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
//! assert_eq!(graph.num_vertices(), 4);
//! // 4 undirected edges stored as 8 directed entries.
//! assert_eq!(graph.num_edges(), 8);
//!
//! let view = graph.csr_view(RelationSelector::Sole).unwrap();
//! assert_eq!(view.indptr, &[0, 2, 4, 6, 8]);
//! ```

pub mod csr;
pub mod error;
pub mod graph;
pub mod hetero;

pub use csr::{CsrStorage, CsrView, Idx};
pub use error::{GraphError, GraphResult};
pub use graph::{CsrGraph, Graph, RelationSelector};
pub use hetero::RelationGraph;
