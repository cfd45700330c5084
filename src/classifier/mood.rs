use std::collections::BTreeMap;

use super::normalize::NormalizedText;
use super::score::score_text;
use super::sentiment::polarity;
use super::taxonomy::TaxonomyStore;
use super::types::{
    AssessmentDetail, ClassificationResult, MoodDetail, MOOD_ANGRY, MOOD_HAPPY, MOOD_NEUTRAL,
    MOOD_SAD,
};

/// Polarity magnitude beyond which sentiment overrides keyword evidence.
const POLARITY_OVERRIDE_THRESHOLD: f64 = 0.3;
/// Keyword confidence saturates at three matches.
const KEYWORD_CONFIDENCE_DIVISOR: f64 = 3.0;
const CONFIDENCE_CAP: f64 = 0.95;
const NO_MATCH_CONFIDENCE: f64 = 0.5;
const POLARITY_CONFIDENCE_WEIGHT: f64 = 0.8;

/// Mood resolver: EmptyCheck -> Score -> Argmax -> SentimentBlend ->
/// Confidence. No emergency stage in this mode.
pub(crate) fn classify(free_text: &str, taxonomy: &TaxonomyStore) -> ClassificationResult {
    let text = NormalizedText::new(free_text);

    if text.is_empty() {
        return neutral_result();
    }

    let scores = score_text(&text, taxonomy.emotions());
    let total: usize = scores.iter().map(|s| s.match_count).sum();

    let distribution: BTreeMap<String, f64> = if total > 0 {
        scores
            .iter()
            .map(|s| (s.category_id.clone(), s.match_count as f64 / total as f64))
            .collect()
    } else {
        BTreeMap::new()
    };

    // Argmax with declaration-order tie-break; zero evidence forces neutral.
    // Only a strictly greater count displaces the running winner, so ties
    // keep the first-declared entry.
    let mut keyword_winner = MOOD_NEUTRAL;
    let mut max_count = 0usize;
    for score in &scores {
        if score.match_count > max_count {
            max_count = score.match_count;
            keyword_winner = score.category_id.as_str();
        }
    }

    // SentimentBlend: polarity evidence wins when it crosses the threshold,
    // after keyword argmax and before confidence finalization.
    let pol = polarity(&text);
    let winner = if pol > POLARITY_OVERRIDE_THRESHOLD && keyword_winner != MOOD_HAPPY {
        MOOD_HAPPY
    } else if pol < -POLARITY_OVERRIDE_THRESHOLD
        && keyword_winner != MOOD_SAD
        && keyword_winner != MOOD_ANGRY
    {
        MOOD_SAD
    } else {
        keyword_winner
    };

    let keyword_confidence = if max_count > 0 {
        (max_count as f64 / KEYWORD_CONFIDENCE_DIVISOR).min(CONFIDENCE_CAP)
    } else {
        NO_MATCH_CONFIDENCE
    };
    let confidence = keyword_confidence.max(pol.abs() * POLARITY_CONFIDENCE_WEIGHT);

    ClassificationResult {
        category: winner.to_string(),
        confidence,
        distribution,
        alternates: vec![],
        emergency_override: false,
        detail: AssessmentDetail::Mood(MoodDetail { polarity: pol }),
    }
}

fn neutral_result() -> ClassificationResult {
    let mut distribution = BTreeMap::new();
    distribution.insert(MOOD_NEUTRAL.to_string(), 1.0);
    ClassificationResult {
        category: MOOD_NEUTRAL.into(),
        confidence: NO_MATCH_CONFIDENCE,
        distribution,
        alternates: vec![],
        emergency_override: false,
        detail: AssessmentDetail::Mood(MoodDetail { polarity: 0.0 }),
    }
}
