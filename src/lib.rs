//! Vitalog — classification core of a personal health-tracking service.
//!
//! Users log journal entries, meals, water intake, and free-text symptom or
//! mood descriptions; this crate turns that free text into structured,
//! deterministic assessments: a symptom triage prediction (with an absolute
//! emergency override) and a mood/emotion distribution. Storage, auth,
//! uploads, notifications, and HTTP routing live in the surrounding service,
//! not here — the engine is a pure function of its input and an immutable
//! keyword taxonomy.

pub mod classifier;
pub mod config;

pub use classifier::engine::{ClassifierEngine, DefaultClassifierEngine};
pub use classifier::taxonomy::TaxonomyStore;
pub use classifier::types::{
    ClassificationInput, ClassificationResult, TaxonomyError, TriageClass,
};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for a hosting binary. Respects RUST_LOG, falling back
/// to the crate default filter.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} classifier core v{}", config::APP_NAME, config::APP_VERSION);
}
