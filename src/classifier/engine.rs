use std::time::Instant;

use super::taxonomy::TaxonomyStore;
use super::types::{ClassificationInput, ClassificationResult, TaxonomyError};
use super::{mood, symptom};

/// The two pure classification operations exposed to calling collaborators
/// (HTTP handlers). Implementations hold no mutable state and perform no
/// I/O; each call is independent and safe to run concurrently.
///
/// "No usable input" is a modeled outcome, never an error — per-call
/// operations cannot fail.
pub trait ClassifierEngine {
    /// Triage free text plus optional structured symptom tags.
    fn classify_symptoms(&self, input: &ClassificationInput) -> ClassificationResult;

    /// Detect the dominant mood of a journal entry.
    fn classify_mood(&self, free_text: &str) -> ClassificationResult;
}

/// Default engine over an immutable taxonomy. The taxonomy is injected once
/// at construction; reloading configuration means building a new engine and
/// swapping it whole, never mutating this one.
pub struct DefaultClassifierEngine {
    taxonomy: TaxonomyStore,
}

impl DefaultClassifierEngine {
    pub fn new(taxonomy: TaxonomyStore) -> Self {
        Self { taxonomy }
    }

    /// Engine over the curated built-in taxonomy.
    pub fn builtin() -> Self {
        Self::new(TaxonomyStore::builtin())
    }

    /// Engine from the environment: loads the taxonomy file named by
    /// VITALOG_TAXONOMY when set, falls back to the built-in taxonomy.
    pub fn from_env() -> Result<Self, TaxonomyError> {
        let taxonomy = match crate::config::taxonomy_override_path() {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading taxonomy override");
                TaxonomyStore::load(&path)?
            }
            None => TaxonomyStore::builtin(),
        };
        Ok(Self::new(taxonomy))
    }

    pub fn taxonomy(&self) -> &TaxonomyStore {
        &self.taxonomy
    }

    /// Classify a batch of journal entries in order.
    pub fn classify_mood_batch(&self, texts: &[String]) -> Vec<ClassificationResult> {
        texts.iter().map(|t| self.classify_mood(t)).collect()
    }
}

impl ClassifierEngine for DefaultClassifierEngine {
    fn classify_symptoms(&self, input: &ClassificationInput) -> ClassificationResult {
        let start = Instant::now();
        let result = symptom::classify(input, &self.taxonomy);

        tracing::info!(
            category = %result.category,
            confidence = result.confidence,
            emergency_override = result.emergency_override,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Symptom classification complete"
        );

        result
    }

    fn classify_mood(&self, free_text: &str) -> ClassificationResult {
        let start = Instant::now();
        let result = mood::classify(free_text, &self.taxonomy);

        tracing::info!(
            category = %result.category,
            confidence = result.confidence,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Mood classification complete"
        );

        result
    }
}
