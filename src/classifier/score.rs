use super::normalize::NormalizedText;
use super::taxonomy::{ConditionEntry, EmotionEntry};
use super::types::CategoryScore;

/// Bidirectional substring containment, preserved from the original matcher.
///
/// Known imprecision: short keywords match unrelated longer terms (and the
/// reverse). Kept deliberately for compatibility rather than "fixed", since
/// stored assessments depend on it.
pub fn terms_match(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Score condition entries against a symptom term set (extracted phrases
/// unioned with structured hints, all equal weight).
///
/// Each (term, keyword) containment pair counts once; a term may match
/// several keywords and a keyword several terms. The raw score is match
/// count normalized by the entry's keyword-set size, which rewards dense
/// matches in small categories.
pub fn score_terms(terms: &[String], conditions: &[ConditionEntry]) -> Vec<CategoryScore> {
    conditions
        .iter()
        .map(|entry| {
            let match_count = terms
                .iter()
                .map(|term| {
                    entry
                        .keywords
                        .iter()
                        .filter(|keyword| terms_match(term, keyword))
                        .count()
                })
                .sum();
            CategoryScore {
                category_id: entry.id.clone(),
                raw_score: match_count as f64 / entry.keywords.len() as f64,
                match_count,
            }
        })
        .collect()
}

/// Score emotion entries against the whole lowered text.
///
/// Mood mode counts raw keyword hits; both emotion sets are comparable in
/// size, so normalization happens later at the distribution level.
pub fn score_text(text: &NormalizedText, emotions: &[EmotionEntry]) -> Vec<CategoryScore> {
    emotions
        .iter()
        .map(|entry| {
            let match_count = entry
                .keywords
                .iter()
                .filter(|keyword| text.contains(keyword))
                .count();
            CategoryScore {
                category_id: entry.id.clone(),
                raw_score: match_count as f64,
                match_count,
            }
        })
        .collect()
}
