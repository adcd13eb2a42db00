//! Build script for the ISDB-T receiver firmware
//!
//! Handles:
//! - Memory layout search path
//! - Linker scripts for the embedded binary (cortex-m-rt and defmt)

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host test builds link like any other std crate
    if std::env::var_os("CARGO_FEATURE_EMBEDDED").is_none() {
        return;
    }

    if let Ok(dir) = std::env::var("CARGO_MANIFEST_DIR") {
        println!("cargo:rustc-link-search={dir}");
    }

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
