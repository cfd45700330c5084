use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Vitalog";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable pointing at a replacement taxonomy JSON file.
/// Unset means the built-in taxonomy is used.
pub const TAXONOMY_PATH_ENV: &str = "VITALOG_TAXONOMY";

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Taxonomy override path from the environment, if configured.
pub fn taxonomy_override_path() -> Option<PathBuf> {
    std::env::var_os(TAXONOMY_PATH_ENV).map(PathBuf::from)
}
