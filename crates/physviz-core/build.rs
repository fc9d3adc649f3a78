// File: crates/physviz-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU need.

fn main() {
    // Build scripts run on the host, so read the target OS from cargo rather than cfg!.
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os == "windows" {
        // RegOpenKeyExW, RegQueryInfoKeyW (font enumeration)
        println!("cargo:rustc-link-lib=advapi32");
    }
}
