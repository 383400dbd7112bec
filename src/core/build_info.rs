//! Build metadata and output-format version accessors.
//! Includes the generated build_info.rs from the build script, giving the
//! info API version a single source of truth (Cargo.toml metadata).

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Parse the info API version string from the build script into u32.
/// Falls back to the initial revision if parsing fails.
pub fn info_api_version() -> u32 {
    INFO_API_VERSION.parse().unwrap_or(1)
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}
