//! Build script for gsp-metis-sys.
//!
//! Links against METIS with the following priority:
//! 1. Pre-built libraries from vendor/local (preferred for CI reproducibility)
//! 2. A prefix named by the `METIS_DIR` environment variable
//! 3. The system library search path
//!
//! # Installing METIS
//!
//! - Ubuntu: sudo apt install libmetis-dev
//! - macOS: brew install metis
//!
//! The library must be built with 64-bit indices (IDXTYPEWIDTH = 64) to
//! match the id width used throughout this workspace.

use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=METIS_DIR");

    // Determine paths for vendor/local (preferred)
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
    let workspace_root = manifest_dir.parent().unwrap().parent().unwrap();
    let vendor_local = workspace_root.join("vendor/local");

    if try_vendor_local(&vendor_local) {
        return;
    }

    if try_metis_dir() {
        return;
    }

    // Last resort: let the linker search the system paths.
    println!("cargo:rustc-link-lib=metis");
}

/// Try to link against vendor/local pre-built METIS.
fn try_vendor_local(vendor_local: &Path) -> bool {
    let lib_dir = vendor_local.join("lib");
    let has_shared = lib_dir.join("libmetis.so").exists() || lib_dir.join("libmetis.dylib").exists();
    let has_static = lib_dir.join("libmetis.a").exists();

    if !has_shared && !has_static {
        return false;
    }

    println!("cargo:rustc-link-search=native={}", lib_dir.display());

    // Prefer shared library (fewer dependency issues)
    if has_shared {
        println!("cargo:rustc-link-lib=metis");
    } else {
        println!("cargo:rustc-link-lib=static=metis");
    }
    true
}

/// Try a user-supplied install prefix.
fn try_metis_dir() -> bool {
    let Ok(dir) = std::env::var("METIS_DIR") else {
        return false;
    };
    let lib_dir = PathBuf::from(dir).join("lib");
    if !lib_dir.exists() {
        println!(
            "cargo:warning=METIS_DIR set but {} does not exist",
            lib_dir.display()
        );
        return false;
    }
    println!("cargo:rustc-link-search=native={}", lib_dir.display());
    println!("cargo:rustc-link-lib=metis");
    true
}
