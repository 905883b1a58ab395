//! # gsp-metis: k-way graph partitioning for distributed sharding
//!
//! Adapts the graph handles from [`gsp_core`] onto a k-way multi-constraint
//! partitioning solver, so a large graph can be sharded across distributed
//! workers with roughly equal load per worker and as few cross-worker edges
//! as possible.
//!
//! The pipeline is deliberately thin (the solver is a black box reached
//! through [`KwayBackend`]) and puts its effort into the adaptation:
//!
//! 1. **Extract**: obtain the validated, zero-copy CSR view of the handle's
//!    sole relation ([`gsp_core::CsrGraph`]).
//! 2. **Normalize**: infer the balancing-constraint count from the flat
//!    weight buffer's shape, or fall back to unweighted ([`weights`]).
//! 3. **Solve**: one blocking call into the backend with equal part targets
//!    and default tolerances ([`MetisOptions`] only selects the memory
//!    mode, on-disk by default for graphs larger than working memory).
//! 4. **Marshal**: return an owned [`Partitioning`] on success; surface a
//!    [`PartitionError`] on any failure. A failed call never yields a
//!    partial or empty assignment.
//!
//! ## Example
//!
//! ```ignore
//! use gsp_core::Graph;
//! use gsp_metis::partition; // feature "native"
//!
//! let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])?;
//! let parts = partition(&graph, 2, &[])?;
//! assert_eq!(parts.assignments().len(), 4);
//! ```
//!
//! Multi-constraint balancing works through the same call: a weight buffer
//! of `num_vertices * c` entries balances `c` cost axes at once (for
//! instance compute cost and memory footprint), and
//! [`weights::balance_weights`] builds such buffers from per-vertex class
//! labels and degrees.
//!
//! ## Backends
//!
//! The native METIS backend (`MetisBackend`) lives behind the `native`
//! cargo feature because it needs libmetis at link time; everything else in
//! the crate, tests included, works against any [`KwayBackend`]
//! implementation.

pub mod backend;
pub mod error;
pub mod options;
pub mod partition;
pub mod weights;

#[cfg(feature = "native")]
pub mod native;

pub use backend::{BackendError, KwayBackend, KwayPartition};
pub use error::{PartitionError, PartitionResult};
pub use options::{MemoryMode, MetisOptions};
pub use partition::{partition_with, Partitioning};
pub use weights::{balance_weights, BalanceSpec};

#[cfg(feature = "native")]
pub use native::MetisBackend;
#[cfg(feature = "native")]
pub use partition::partition;
