//! Native FFI bindings to METIS, the serial graph partitioner.
//!
//! This crate provides low-level unsafe bindings to the METIS C interface:
//! the index/real type aliases, the options array layout, the return codes,
//! and the partitioning entry points. Safe wrappers live in `gsp-metis`.
//!
//! # Index width
//!
//! METIS is compiled with a fixed index width. These bindings assume
//! `IDXTYPEWIDTH = 64` / `REALTYPEWIDTH = 32`, the configuration used for
//! large-graph sharding. Callers must verify [`idx_t`] matches their own id
//! width before passing buffers across the boundary; a mismatched build
//! corrupts every array it touches.
//!
//! # Options
//!
//! The option ordinals below follow the dmlc METIS fork, which inserts
//! `METIS_OPTION_ONDISK` directly after `METIS_OPTION_NO2HOP`. The on-disk
//! mode spills coarsening data to disk so very large graphs can be
//! partitioned in bounded memory.
//!
//! # Reference
//!
//! Karypis, G., & Kumar, V. (1998). A fast and high quality multilevel
//! scheme for partitioning irregular graphs. *SIAM Journal on Scientific
//! Computing*, 20(1), 359-392.

#![allow(non_camel_case_types)]

use std::os::raw::c_int;

// ============================================================================
// TYPES
// ============================================================================

/// Index type (matches `idx_t`; IDXTYPEWIDTH = 64).
pub type idx_t = i64;

/// Floating-point type (matches `real_t`; REALTYPEWIDTH = 32). Used for
/// target part weights and imbalance tolerances.
pub type real_t = f32;

// ============================================================================
// RETURN CODES (rstatus_et)
// ============================================================================

/// The call completed successfully.
pub const METIS_OK: c_int = 1;
/// The input arrays or parameters were invalid.
pub const METIS_ERROR_INPUT: c_int = -2;
/// METIS could not allocate the memory it needed.
pub const METIS_ERROR_MEMORY: c_int = -3;
/// Some other type of error.
pub const METIS_ERROR: c_int = -4;

// ============================================================================
// OPTIONS (moptions_et)
// ============================================================================

/// Length of the options array passed to every entry point.
pub const METIS_NOPTIONS: usize = 40;

pub const METIS_OPTION_PTYPE: usize = 0;
pub const METIS_OPTION_OBJTYPE: usize = 1;
pub const METIS_OPTION_CTYPE: usize = 2;
pub const METIS_OPTION_IPTYPE: usize = 3;
pub const METIS_OPTION_RTYPE: usize = 4;
pub const METIS_OPTION_DBGLVL: usize = 5;
pub const METIS_OPTION_NITER: usize = 6;
pub const METIS_OPTION_NCUTS: usize = 7;
pub const METIS_OPTION_SEED: usize = 8;
pub const METIS_OPTION_NO2HOP: usize = 9;
/// Spill coarsening data to disk (dmlc fork extension).
pub const METIS_OPTION_ONDISK: usize = 10;
pub const METIS_OPTION_MINCONN: usize = 11;
pub const METIS_OPTION_CONTIG: usize = 12;
pub const METIS_OPTION_COMPRESS: usize = 13;
pub const METIS_OPTION_CCORDER: usize = 14;
pub const METIS_OPTION_PFACTOR: usize = 15;
pub const METIS_OPTION_NSEPS: usize = 16;
pub const METIS_OPTION_UFACTOR: usize = 17;
pub const METIS_OPTION_NUMBERING: usize = 18;

extern "C" {
    /// Initialize an options array of length [`METIS_NOPTIONS`] to defaults.
    pub fn METIS_SetDefaultOptions(options: *mut idx_t) -> c_int;

    /// Multilevel k-way partitioning.
    ///
    /// Splits the graph described by `xadj`/`adjncy` (CSR, symmetric, zero
    /// based) into `nparts` parts, balancing `ncon` constraints per vertex,
    /// and writes one part id per vertex into `part`. `objval` receives the
    /// edge cut (or communication volume, depending on the objective
    /// option). Null is accepted for `vwgt`, `vsize`, `adjwgt`, `tpwgts`,
    /// and `ubvec`, selecting uniform weights/targets.
    #[allow(clippy::too_many_arguments)]
    pub fn METIS_PartGraphKway(
        nvtxs: *mut idx_t,
        ncon: *mut idx_t,
        xadj: *mut idx_t,
        adjncy: *mut idx_t,
        vwgt: *mut idx_t,
        vsize: *mut idx_t,
        adjwgt: *mut idx_t,
        nparts: *mut idx_t,
        tpwgts: *mut real_t,
        ubvec: *mut real_t,
        options: *mut idx_t,
        objval: *mut idx_t,
        part: *mut idx_t,
    ) -> c_int;

    /// Multilevel recursive-bisection partitioning. Same calling convention
    /// as [`METIS_PartGraphKway`].
    #[allow(clippy::too_many_arguments)]
    pub fn METIS_PartGraphRecursive(
        nvtxs: *mut idx_t,
        ncon: *mut idx_t,
        xadj: *mut idx_t,
        adjncy: *mut idx_t,
        vwgt: *mut idx_t,
        vsize: *mut idx_t,
        adjwgt: *mut idx_t,
        nparts: *mut idx_t,
        tpwgts: *mut real_t,
        ubvec: *mut real_t,
        options: *mut idx_t,
        objval: *mut idx_t,
        part: *mut idx_t,
    ) -> c_int;
}
