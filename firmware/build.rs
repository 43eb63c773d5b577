// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Adds the defmt linker script when RTT logging is enabled.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    if std::env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
}
