use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Severity and triage
// ---------------------------------------------------------------------------

/// How serious a matched condition is considered to be.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Mild,
    Moderate,
    Severe,
}

impl SeverityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }

    /// Fixed numeric severity used in assessment payloads.
    pub fn score(&self) -> f64 {
        match self {
            Self::Severe => 0.8,
            Self::Moderate => 0.6,
            Self::Mild => 0.3,
        }
    }
}

/// What the user should do about a matched condition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TriageClass {
    SelfCare,
    ConsultDoctor,
    Emergency,
}

impl TriageClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfCare => "self_care",
            Self::ConsultDoctor => "consult_doctor",
            Self::Emergency => "emergency",
        }
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Caller-supplied input for symptom classification. Ephemeral; the engine
/// never stores it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationInput {
    /// Free-text symptom description, possibly empty.
    pub free_text: String,
    /// Explicit symptom tags picked from the UI, unioned with extracted
    /// phrases at equal weight.
    #[serde(default)]
    pub structured_hints: Vec<String>,
}

impl ClassificationInput {
    pub fn new(free_text: impl Into<String>, structured_hints: Vec<String>) -> Self {
        Self {
            free_text: free_text.into(),
            structured_hints,
        }
    }

    pub fn from_text(free_text: impl Into<String>) -> Self {
        Self {
            free_text: free_text.into(),
            structured_hints: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Scores and results
// ---------------------------------------------------------------------------

/// Per-category raw match score, transient within a single call.
#[derive(Debug, Clone)]
pub struct CategoryScore {
    pub category_id: String,
    pub raw_score: f64,
    pub match_count: usize,
}

/// A non-winning category reported with discounted confidence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alternate {
    pub category: String,
    pub confidence: f64,
}

/// Mode-specific fields of a classification result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AssessmentDetail {
    Symptom(SymptomDetail),
    Mood(MoodDetail),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymptomDetail {
    pub triage: TriageClass,
    /// Fixed mapping from the winning severity tier (0.5 for fallbacks).
    pub severity_score: f64,
    /// Patient-facing guidance from the recommendation synthesizer.
    pub recommendation: String,
    /// First few matched terms, for display and audit.
    pub matched_terms: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodDetail {
    /// Lexicon polarity in [-1, 1]; positive means positive sentiment.
    pub polarity: f64,
}

/// Outcome of one classification call. Produced fresh per call and never
/// mutated afterwards; ownership transfers to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassificationResult {
    /// Winning category id (condition or emotion).
    pub category: String,
    /// Heuristic certainty in [0, 1], capped below 1.0.
    pub confidence: f64,
    /// Normalized score distribution over categories that matched.
    /// Values sum to 1.0 whenever any category scored; empty otherwise.
    pub distribution: BTreeMap<String, f64>,
    /// Up to two runner-up categories.
    pub alternates: Vec<Alternate>,
    /// True only when the emergency keyword short-circuit fired.
    pub emergency_override: bool,
    pub detail: AssessmentDetail,
}

impl ClassificationResult {
    /// Symptom-mode triage class, if this is a symptom assessment.
    pub fn triage(&self) -> Option<TriageClass> {
        match &self.detail {
            AssessmentDetail::Symptom(d) => Some(d.triage),
            AssessmentDetail::Mood(_) => None,
        }
    }

    /// Mood-mode polarity, if this is a mood assessment.
    pub fn polarity(&self) -> Option<f64> {
        match &self.detail {
            AssessmentDetail::Mood(d) => Some(d.polarity),
            AssessmentDetail::Symptom(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Well-known category ids
// ---------------------------------------------------------------------------

/// Symptom fallback when neither text nor hints carry usable content.
pub const CATEGORY_INSUFFICIENT_INFO: &str = "insufficient_information";
/// Symptom result when the emergency keyword check fires.
pub const CATEGORY_POTENTIAL_EMERGENCY: &str = "potential_emergency";
/// Symptom fallback when no condition scores above zero.
pub const CATEGORY_GENERAL_ILLNESS: &str = "general_illness";

/// Mood anchor categories the sentiment blend steers towards. The emotion
/// taxonomy must declare all four (validated at load).
pub const MOOD_NEUTRAL: &str = "neutral";
pub const MOOD_HAPPY: &str = "happy";
pub const MOOD_SAD: &str = "sad";
pub const MOOD_ANGRY: &str = "angry";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Taxonomy construction/load failures. The only failure class the engine
/// has: malformed configuration is fatal at process start, never per-call.
#[derive(Error, Debug)]
pub enum TaxonomyError {
    #[error("Failed to read taxonomy file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse taxonomy file {0}: {1}")]
    Parse(String, String),

    #[error("Invalid taxonomy: {0}")]
    Invalid(String),
}
