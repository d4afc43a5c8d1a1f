// src/lib.rs - Library interface for internal module access

pub mod classification;
pub mod constants;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
pub mod section;
pub mod types;

// Crate version from CARGO_PKG_VERSION; a VERGEN_GIT_SEMVER set at build time overrides it.
pub fn crate_version() -> &'static str {
    option_env!("VERGEN_GIT_SEMVER").unwrap_or(env!("CARGO_PKG_VERSION"))
}
