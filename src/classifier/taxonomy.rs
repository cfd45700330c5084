use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::{
    SeverityTier, TaxonomyError, TriageClass, MOOD_ANGRY, MOOD_HAPPY, MOOD_NEUTRAL, MOOD_SAD,
};

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// A symptom condition: keyword set plus triage metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub id: String,
    pub keywords: Vec<String>,
    pub severity: SeverityTier,
    pub triage: TriageClass,
}

/// An emotion category: keyword set only. Severity and triage do not exist
/// here by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionEntry {
    pub id: String,
    pub keywords: Vec<String>,
}

/// Serialized form of a full taxonomy file.
#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    conditions: Vec<ConditionEntry>,
    emergency_keywords: Vec<String>,
    emotions: Vec<EmotionEntry>,
    symptom_phrases: Vec<String>,
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Immutable keyword taxonomies backing both classifier modes.
///
/// Constructed and validated once at process start, then shared read-only.
/// Declaration order of `conditions` and `emotions` is the tie-break order,
/// so it is preserved exactly as loaded. Reload is by swapping the whole
/// value, never by in-place mutation.
#[derive(Debug, Clone)]
pub struct TaxonomyStore {
    conditions: Vec<ConditionEntry>,
    emergency_keywords: Vec<String>,
    emotions: Vec<EmotionEntry>,
    symptom_phrases: Vec<String>,
}

impl TaxonomyStore {
    /// Validate and normalize a taxonomy. All keywords, phrases, and ids are
    /// lower-cased so matching never has to case-fold again.
    pub fn new(
        conditions: Vec<ConditionEntry>,
        emergency_keywords: Vec<String>,
        emotions: Vec<EmotionEntry>,
        symptom_phrases: Vec<String>,
    ) -> Result<Self, TaxonomyError> {
        let conditions = conditions
            .into_iter()
            .map(|c| ConditionEntry {
                id: c.id.trim().to_lowercase(),
                keywords: lower_all(c.keywords),
                severity: c.severity,
                triage: c.triage,
            })
            .collect::<Vec<_>>();
        let emotions = emotions
            .into_iter()
            .map(|e| EmotionEntry {
                id: e.id.trim().to_lowercase(),
                keywords: lower_all(e.keywords),
            })
            .collect::<Vec<_>>();
        let emergency_keywords = lower_all(emergency_keywords);
        let symptom_phrases = lower_all(symptom_phrases);

        validate_entries("condition", conditions.iter().map(|c| (&c.id, &c.keywords)))?;
        validate_entries("emotion", emotions.iter().map(|e| (&e.id, &e.keywords)))?;

        if conditions.is_empty() {
            return Err(TaxonomyError::Invalid(
                "condition taxonomy must not be empty".into(),
            ));
        }
        if emotions.is_empty() {
            return Err(TaxonomyError::Invalid(
                "emotion taxonomy must not be empty".into(),
            ));
        }
        // The sentiment blend steers towards these, so they must exist.
        for anchor in [MOOD_NEUTRAL, MOOD_HAPPY, MOOD_SAD, MOOD_ANGRY] {
            if !emotions.iter().any(|e| e.id == anchor) {
                return Err(TaxonomyError::Invalid(format!(
                    "emotion taxonomy is missing anchor category '{anchor}'"
                )));
            }
        }

        Ok(Self {
            conditions,
            emergency_keywords,
            emotions,
            symptom_phrases,
        })
    }

    /// Load a taxonomy from a JSON file. Any failure here is fatal for the
    /// process; there is no per-call recovery from bad configuration.
    pub fn load(path: &Path) -> Result<Self, TaxonomyError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            TaxonomyError::FileRead(path.display().to_string(), e.to_string())
        })?;
        let file: TaxonomyFile = serde_json::from_str(&json).map_err(|e| {
            TaxonomyError::Parse(path.display().to_string(), e.to_string())
        })?;
        Self::new(
            file.conditions,
            file.emergency_keywords,
            file.emotions,
            file.symptom_phrases,
        )
    }

    /// The curated default taxonomy shipped with the service.
    pub fn builtin() -> Self {
        Self::new(
            builtin_conditions(),
            builtin_emergency_keywords(),
            builtin_emotions(),
            builtin_symptom_phrases(),
        )
        .expect("Built-in taxonomy is valid")
    }

    pub fn conditions(&self) -> &[ConditionEntry] {
        &self.conditions
    }

    pub fn emergency_keywords(&self) -> &[String] {
        &self.emergency_keywords
    }

    pub fn emotions(&self) -> &[EmotionEntry] {
        &self.emotions
    }

    pub fn symptom_phrases(&self) -> &[String] {
        &self.symptom_phrases
    }
}

fn lower_all(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_lowercase())
        .collect()
}

fn validate_entries<'a>(
    kind: &str,
    entries: impl Iterator<Item = (&'a String, &'a Vec<String>)>,
) -> Result<(), TaxonomyError> {
    let mut seen = std::collections::HashSet::new();
    for (id, keywords) in entries {
        if id.is_empty() {
            return Err(TaxonomyError::Invalid(format!("{kind} entry has empty id")));
        }
        if !seen.insert(id.clone()) {
            return Err(TaxonomyError::Invalid(format!(
                "duplicate {kind} id '{id}'"
            )));
        }
        if keywords.is_empty() || keywords.iter().any(|k| k.is_empty()) {
            return Err(TaxonomyError::Invalid(format!(
                "{kind} '{id}' has an empty keyword set or blank keyword"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Built-in data
// ---------------------------------------------------------------------------

fn builtin_conditions() -> Vec<ConditionEntry> {
    fn entry(
        id: &str,
        keywords: &[&str],
        severity: SeverityTier,
        triage: TriageClass,
    ) -> ConditionEntry {
        ConditionEntry {
            id: id.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            severity,
            triage,
        }
    }

    vec![
        entry(
            "common_cold",
            &["cough", "runny nose", "sneezing", "sore throat", "congestion"],
            SeverityTier::Mild,
            TriageClass::SelfCare,
        ),
        entry(
            "flu",
            &["fever", "chills", "body aches", "fatigue", "cough", "headache"],
            SeverityTier::Moderate,
            TriageClass::ConsultDoctor,
        ),
        entry(
            "migraine",
            &["severe headache", "nausea", "sensitivity to light", "throbbing pain"],
            SeverityTier::Moderate,
            TriageClass::SelfCare,
        ),
        entry(
            "anxiety",
            &["worry", "nervousness", "restlessness", "panic", "trouble sleeping"],
            SeverityTier::Moderate,
            TriageClass::ConsultDoctor,
        ),
        entry(
            "urinary_tract_infection",
            &["frequent urination", "burning sensation", "cloudy urine", "pelvic pain"],
            SeverityTier::Moderate,
            TriageClass::ConsultDoctor,
        ),
        entry(
            "gastroenteritis",
            &["diarrhea", "nausea", "vomiting", "stomach pain", "fever"],
            SeverityTier::Moderate,
            TriageClass::ConsultDoctor,
        ),
        entry(
            "emergency_chest_pain",
            &["chest pain", "shortness of breath", "dizziness", "nausea"],
            SeverityTier::Severe,
            TriageClass::Emergency,
        ),
        entry(
            "emergency_stroke",
            &["sudden weakness", "speech difficulty", "facial drooping", "severe headache"],
            SeverityTier::Severe,
            TriageClass::Emergency,
        ),
    ]
}

fn builtin_emergency_keywords() -> Vec<String> {
    [
        "chest pain",
        "difficulty breathing",
        "severe allergic reaction",
        "loss of consciousness",
        "severe bleeding",
        "stroke symptoms",
    ]
    .iter()
    .map(|k| k.to_string())
    .collect()
}

/// Phrases the free-text extractor recognises as symptoms.
fn builtin_symptom_phrases() -> Vec<String> {
    [
        "headache",
        "fever",
        "cough",
        "sore throat",
        "runny nose",
        "nausea",
        "vomiting",
        "diarrhea",
        "stomach pain",
        "chest pain",
        "shortness of breath",
        "dizziness",
        "fatigue",
        "body aches",
        "chills",
        "sweating",
        "joint pain",
        "muscle pain",
        "back pain",
    ]
    .iter()
    .map(|k| k.to_string())
    .collect()
}

fn builtin_emotions() -> Vec<EmotionEntry> {
    fn entry(id: &str, keywords: &[&str]) -> EmotionEntry {
        EmotionEntry {
            id: id.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    vec![
        entry(
            "happy",
            &[
                "happy", "joy", "excited", "glad", "pleased", "delighted", "cheerful",
                "great", "amazing", "wonderful", "fantastic", "love", "enjoy", "fun",
            ],
        ),
        entry(
            "sad",
            &[
                "sad", "down", "depressed", "unhappy", "upset", "disappointed", "hurt",
                "lonely", "empty", "hopeless", "miserable", "tired", "exhausted",
            ],
        ),
        entry(
            "anxious",
            &[
                "anxious", "worried", "nervous", "stressed", "panic", "fear", "scared",
                "uneasy", "restless", "tense", "apprehensive", "overwhelmed",
            ],
        ),
        entry(
            "angry",
            &[
                "angry", "mad", "furious", "annoyed", "irritated", "frustrated", "rage",
                "hostile", "resentful", "bitter",
            ],
        ),
        entry(
            "neutral",
            &["okay", "fine", "alright", "normal", "regular", "average", "meh"],
        ),
        entry(
            "calm",
            &[
                "calm", "peaceful", "relaxed", "content", "serene", "tranquil", "at ease",
                "comfortable",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_taxonomy_loads_and_validates() {
        let store = TaxonomyStore::builtin();
        assert_eq!(store.conditions().len(), 8);
        assert_eq!(store.emergency_keywords().len(), 6);
        assert_eq!(store.emotions().len(), 6);
        assert_eq!(store.symptom_phrases().len(), 19);
    }

    #[test]
    fn builtin_preserves_declaration_order() {
        let store = TaxonomyStore::builtin();
        assert_eq!(store.conditions()[0].id, "common_cold");
        assert_eq!(store.conditions()[1].id, "flu");
        assert_eq!(store.emotions()[0].id, "happy");
    }

    #[test]
    fn keywords_are_lowercased_on_construction() {
        let store = TaxonomyStore::new(
            vec![ConditionEntry {
                id: "Flu".into(),
                keywords: vec!["FEVER".into(), " Chills ".into()],
                severity: SeverityTier::Moderate,
                triage: TriageClass::ConsultDoctor,
            }],
            vec!["CHEST PAIN".into()],
            builtin_emotions(),
            vec![],
        )
        .unwrap();
        assert_eq!(store.conditions()[0].id, "flu");
        assert_eq!(store.conditions()[0].keywords, vec!["fever", "chills"]);
        assert_eq!(store.emergency_keywords()[0], "chest pain");
    }

    #[test]
    fn rejects_duplicate_condition_ids() {
        let dup = builtin_conditions()
            .into_iter()
            .chain(builtin_conditions().into_iter().take(1))
            .collect();
        let err = TaxonomyStore::new(
            dup,
            vec![],
            builtin_emotions(),
            vec![],
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate condition id"));
    }

    #[test]
    fn rejects_empty_keyword_set() {
        let err = TaxonomyStore::new(
            vec![ConditionEntry {
                id: "flu".into(),
                keywords: vec![],
                severity: SeverityTier::Moderate,
                triage: TriageClass::ConsultDoctor,
            }],
            vec![],
            builtin_emotions(),
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, TaxonomyError::Invalid(_)));
    }

    #[test]
    fn rejects_missing_mood_anchor() {
        let emotions = builtin_emotions()
            .into_iter()
            .filter(|e| e.id != "neutral")
            .collect();
        let err = TaxonomyStore::new(builtin_conditions(), vec![], emotions, vec![])
            .unwrap_err();
        assert!(err.to_string().contains("anchor category 'neutral'"));
    }

    #[test]
    fn loads_taxonomy_from_json_file() {
        let json = serde_json::json!({
            "conditions": [{
                "id": "flu",
                "keywords": ["fever", "chills"],
                "severity": "moderate",
                "triage": "consult_doctor"
            }],
            "emergency_keywords": ["chest pain"],
            "emotions": [
                {"id": "happy", "keywords": ["happy"]},
                {"id": "sad", "keywords": ["sad"]},
                {"id": "angry", "keywords": ["angry"]},
                {"id": "neutral", "keywords": ["okay"]}
            ],
            "symptom_phrases": ["fever", "chills"]
        });
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{json}").unwrap();

        let store = TaxonomyStore::load(file.path()).unwrap();
        assert_eq!(store.conditions().len(), 1);
        assert_eq!(store.conditions()[0].triage, TriageClass::ConsultDoctor);
    }

    #[test]
    fn load_missing_file_is_fatal_error() {
        let err = TaxonomyStore::load(Path::new("/nonexistent/taxonomy.json")).unwrap_err();
        assert!(matches!(err, TaxonomyError::FileRead(_, _)));
    }

    #[test]
    fn load_malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = TaxonomyStore::load(file.path()).unwrap_err();
        assert!(matches!(err, TaxonomyError::Parse(_, _)));
    }
}
