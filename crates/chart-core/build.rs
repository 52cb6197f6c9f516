// File: crates/chart-core/build.rs
// Summary: Links advapi32 on Windows when the Skia raster backend (`png` feature) is compiled in.

fn main() {
    let windows = std::env::var("CARGO_CFG_TARGET_OS").is_ok_and(|os| os == "windows");
    let raster = std::env::var_os("CARGO_FEATURE_PNG").is_some();
    if windows && raster {
        // Skia's font manager reads the registry (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
