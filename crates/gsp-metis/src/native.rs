//! METIS-backed partitioning backend.
//!
//! Packs the CSR view and weight buffer into the C calling convention and
//! makes the one blocking `METIS_PartGraphKway` call. Requires libmetis at
//! link time; enable the `native` feature to build it.

use gsp_core::{CsrView, Idx};
use gsp_metis_sys as sys;

use crate::backend::{BackendError, KwayBackend, KwayPartition};
use crate::options::{MemoryMode, MetisOptions};

// The bindings and this workspace must agree on the id width; a mismatched
// METIS build corrupts every array passed across the boundary.
const _: () = assert!(std::mem::size_of::<sys::idx_t>() == std::mem::size_of::<Idx>());

/// The native METIS solver.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetisBackend;

impl KwayBackend for MetisBackend {
    fn id(&self) -> &str {
        "metis"
    }

    fn index_width(&self) -> usize {
        std::mem::size_of::<sys::idx_t>()
    }

    fn part_kway(
        &self,
        csr: CsrView<'_>,
        ncon: Idx,
        vwgt: Option<&[Idx]>,
        nparts: Idx,
        options: &MetisOptions,
    ) -> Result<KwayPartition, BackendError> {
        let num_vertices = csr.num_vertices();
        let mut nvtxs = num_vertices as sys::idx_t;
        let mut ncon = ncon as sys::idx_t;
        let mut nparts = nparts as sys::idx_t;

        // The C prototypes take mutable pointers even for arrays METIS only
        // reads, so the borrowed views are copied into owned buffers.
        let mut xadj = csr.indptr.to_vec();
        let mut adjncy = csr.indices.to_vec();
        let mut vwgt = vwgt.map(<[Idx]>::to_vec);
        let vwgt_ptr = vwgt
            .as_mut()
            .map_or(std::ptr::null_mut(), |w| w.as_mut_ptr());

        let mut metis_options = [0 as sys::idx_t; sys::METIS_NOPTIONS];
        // SAFETY: the options array has METIS_NOPTIONS entries.
        unsafe {
            sys::METIS_SetDefaultOptions(metis_options.as_mut_ptr());
        }
        metis_options[sys::METIS_OPTION_ONDISK] =
            sys::idx_t::from(options.memory_mode == MemoryMode::OnDisk);

        let mut part = vec![0 as sys::idx_t; num_vertices];
        let mut objval: sys::idx_t = 0;

        // SAFETY: xadj/adjncy form a validated CSR over num_vertices
        // vertices, vwgt is either null or num_vertices * ncon long, and
        // part has one slot per vertex. METIS reads the inputs and writes
        // only objval and part.
        let status = unsafe {
            sys::METIS_PartGraphKway(
                &mut nvtxs,
                &mut ncon,
                xadj.as_mut_ptr(),
                adjncy.as_mut_ptr(),
                vwgt_ptr,
                std::ptr::null_mut(), // vsize: no communication-volume sizes
                std::ptr::null_mut(), // adjwgt: no edge weights
                &mut nparts,
                std::ptr::null_mut(), // tpwgts: equal-sized part targets
                std::ptr::null_mut(), // ubvec: default imbalance tolerance
                metis_options.as_mut_ptr(),
                &mut objval,
                part.as_mut_ptr(),
            )
        };

        match status {
            sys::METIS_OK => Ok(KwayPartition {
                assignments: part,
                edge_cut: objval,
            }),
            sys::METIS_ERROR_INPUT => Err(BackendError::Input),
            sys::METIS_ERROR_MEMORY => Err(BackendError::Memory),
            other => Err(BackendError::Other(other)),
        }
    }
}
