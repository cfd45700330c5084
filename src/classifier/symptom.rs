use std::collections::BTreeMap;

use super::normalize::NormalizedText;
use super::recommend::{
    recommendation_for, GENERAL_ILLNESS_MESSAGE, INSUFFICIENT_INFO_MESSAGE, URGENT_CARE_MESSAGE,
};
use super::score::{score_terms, terms_match};
use super::taxonomy::TaxonomyStore;
use super::types::{
    Alternate, AssessmentDetail, CategoryScore, ClassificationInput, ClassificationResult,
    SymptomDetail, TriageClass, CATEGORY_GENERAL_ILLNESS, CATEGORY_INSUFFICIENT_INFO,
    CATEGORY_POTENTIAL_EMERGENCY,
};

/// Fixed confidence for the emergency short-circuit.
const EMERGENCY_CONFIDENCE: f64 = 0.9;
const EMERGENCY_SEVERITY: f64 = 0.9;
/// Confidence never reaches 1.0 from keyword evidence alone.
const CONFIDENCE_CAP: f64 = 0.95;
/// Runner-up categories are reported at a deliberate discount.
const ALTERNATE_DISCOUNT: f64 = 0.8;
const FALLBACK_CONFIDENCE: f64 = 0.5;
const FALLBACK_SEVERITY: f64 = 0.5;
const MATCHED_TERMS_LIMIT: usize = 5;

/// Symptom triage resolver. A linear state machine with no revisits:
/// EmptyCheck -> EmergencyCheck -> Score -> NoMatch -> Argmax.
pub(crate) fn classify(
    input: &ClassificationInput,
    taxonomy: &TaxonomyStore,
) -> ClassificationResult {
    let text = NormalizedText::new(&input.free_text);
    let hints: Vec<String> = input
        .structured_hints
        .iter()
        .map(|h| h.trim().to_lowercase())
        .filter(|h| !h.is_empty())
        .collect();

    // EmptyCheck: no usable input is a modeled outcome, not an error.
    if text.is_empty() && hints.is_empty() {
        return insufficient_information();
    }

    // Hints and extracted phrases carry equal weight in one term set.
    let mut terms = hints;
    terms.extend(
        taxonomy
            .symptom_phrases()
            .iter()
            .filter(|phrase| text.contains(phrase))
            .cloned(),
    );

    // EmergencyCheck strictly precedes scoring and cannot be outscored.
    if let Some(term) = emergency_term(&terms, taxonomy.emergency_keywords()) {
        tracing::warn!(matched_term = %term, "Emergency keyword override fired");
        return emergency_result(term);
    }

    let scores = score_terms(&terms, taxonomy.conditions());

    // NoMatch: nothing in the taxonomy fit.
    if scores.iter().all(|s| s.match_count == 0) {
        return general_illness_fallback();
    }

    resolve_argmax(&terms, &scores, taxonomy)
}

/// First matched term that bidirectionally contains an emergency keyword.
fn emergency_term<'a>(terms: &'a [String], emergency_keywords: &[String]) -> Option<&'a str> {
    terms
        .iter()
        .find(|term| {
            emergency_keywords
                .iter()
                .any(|keyword| terms_match(term, keyword))
        })
        .map(|term| term.as_str())
}

fn resolve_argmax(
    terms: &[String],
    scores: &[CategoryScore],
    taxonomy: &TaxonomyStore,
) -> ClassificationResult {
    // Stable sort: equal scores resolve to the first-declared entry.
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .raw_score
            .partial_cmp(&scores[a].raw_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let top = &scores[order[0]];
    let winner = &taxonomy.conditions()[order[0]];
    let confidence = top.raw_score.min(CONFIDENCE_CAP);

    let total: f64 = scores.iter().map(|s| s.raw_score).sum();
    let distribution: BTreeMap<String, f64> = scores
        .iter()
        .filter(|s| s.raw_score > 0.0)
        .map(|s| (s.category_id.clone(), s.raw_score / total))
        .collect();

    let alternates: Vec<Alternate> = order[1..]
        .iter()
        .filter(|&&i| scores[i].raw_score > 0.0)
        .take(2)
        .map(|&i| Alternate {
            category: scores[i].category_id.clone(),
            confidence: scores[i].raw_score * ALTERNATE_DISCOUNT,
        })
        .collect();

    ClassificationResult {
        category: winner.id.clone(),
        confidence,
        distribution,
        alternates,
        emergency_override: false,
        detail: AssessmentDetail::Symptom(SymptomDetail {
            triage: winner.triage,
            severity_score: winner.severity.score(),
            recommendation: recommendation_for(winner.triage, &winner.id),
            matched_terms: terms.iter().take(MATCHED_TERMS_LIMIT).cloned().collect(),
        }),
    }
}

fn insufficient_information() -> ClassificationResult {
    ClassificationResult {
        category: CATEGORY_INSUFFICIENT_INFO.into(),
        confidence: 0.0,
        distribution: BTreeMap::new(),
        alternates: vec![],
        emergency_override: false,
        detail: AssessmentDetail::Symptom(SymptomDetail {
            triage: TriageClass::SelfCare,
            severity_score: 0.0,
            recommendation: INSUFFICIENT_INFO_MESSAGE.into(),
            matched_terms: vec![],
        }),
    }
}

fn emergency_result(matched_term: &str) -> ClassificationResult {
    ClassificationResult {
        category: CATEGORY_POTENTIAL_EMERGENCY.into(),
        confidence: EMERGENCY_CONFIDENCE,
        distribution: BTreeMap::new(),
        alternates: vec![],
        emergency_override: true,
        detail: AssessmentDetail::Symptom(SymptomDetail {
            triage: TriageClass::Emergency,
            severity_score: EMERGENCY_SEVERITY,
            recommendation: URGENT_CARE_MESSAGE.into(),
            matched_terms: vec![matched_term.to_string()],
        }),
    }
}

fn general_illness_fallback() -> ClassificationResult {
    ClassificationResult {
        category: CATEGORY_GENERAL_ILLNESS.into(),
        confidence: FALLBACK_CONFIDENCE,
        distribution: BTreeMap::new(),
        alternates: vec![],
        emergency_override: false,
        detail: AssessmentDetail::Symptom(SymptomDetail {
            triage: TriageClass::ConsultDoctor,
            severity_score: FALLBACK_SEVERITY,
            recommendation: GENERAL_ILLNESS_MESSAGE.into(),
            matched_terms: vec![],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::taxonomy::{ConditionEntry, TaxonomyStore};
    use crate::classifier::types::SeverityTier;

    fn taxonomy() -> TaxonomyStore {
        TaxonomyStore::builtin()
    }

    fn symptom_detail(result: &ClassificationResult) -> &SymptomDetail {
        match &result.detail {
            AssessmentDetail::Symptom(d) => d,
            AssessmentDetail::Mood(_) => panic!("expected symptom detail"),
        }
    }

    #[test]
    fn empty_input_returns_insufficient_information() {
        let result = classify(&ClassificationInput::new("", vec![]), &taxonomy());
        assert_eq!(result.category, CATEGORY_INSUFFICIENT_INFO);
        assert_eq!(result.confidence, 0.0);
        assert!(result.distribution.is_empty());
        assert!(result.alternates.is_empty());
        assert!(!result.emergency_override);
    }

    #[test]
    fn whitespace_text_counts_as_empty() {
        let result = classify(&ClassificationInput::new("   \n ", vec![]), &taxonomy());
        assert_eq!(result.category, CATEGORY_INSUFFICIENT_INFO);
    }

    #[test]
    fn emergency_phrase_short_circuits_scoring() {
        let result = classify(
            &ClassificationInput::from_text("I have chest pain and shortness of breath"),
            &taxonomy(),
        );
        assert_eq!(result.category, CATEGORY_POTENTIAL_EMERGENCY);
        assert_eq!(result.confidence, EMERGENCY_CONFIDENCE);
        assert!(result.emergency_override);
        let detail = symptom_detail(&result);
        assert_eq!(detail.triage, TriageClass::Emergency);
        assert_eq!(detail.recommendation, URGENT_CARE_MESSAGE);
    }

    #[test]
    fn emergency_wins_over_cooccurring_flu_keywords() {
        // Flu keywords present, but the emergency check runs first.
        let result = classify(
            &ClassificationInput::from_text("fever, cough, body aches and chest pain"),
            &taxonomy(),
        );
        assert_eq!(result.category, CATEGORY_POTENTIAL_EMERGENCY);
        assert_eq!(symptom_detail(&result).triage, TriageClass::Emergency);
    }

    #[test]
    fn emergency_fires_from_structured_hint() {
        let result = classify(
            &ClassificationInput::new("", vec!["severe bleeding".into()]),
            &taxonomy(),
        );
        assert!(result.emergency_override);
    }

    #[test]
    fn short_hint_containment_still_triggers_emergency() {
        // Known imprecision of the bidirectional matcher: "pain" is contained
        // in "chest pain". Preserved for compatibility.
        let result = classify(
            &ClassificationInput::new("", vec!["pain".into()]),
            &taxonomy(),
        );
        assert!(result.emergency_override);
    }

    #[test]
    fn flu_hints_resolve_to_flu_consult_doctor() {
        let result = classify(
            &ClassificationInput::new(
                "",
                vec!["fever".into(), "cough".into(), "body aches".into()],
            ),
            &taxonomy(),
        );
        assert_eq!(result.category, "flu");
        let detail = symptom_detail(&result);
        assert_eq!(detail.triage, TriageClass::ConsultDoctor);
        // 3 of flu's 6 declared keywords matched.
        assert!((result.confidence - 0.5).abs() < 1e-9);
        assert_eq!(detail.severity_score, 0.6);
        assert!(detail.recommendation.contains("antiviral"));
    }

    #[test]
    fn no_match_falls_back_to_general_illness() {
        let result = classify(
            &ClassificationInput::from_text("I feel strange somehow"),
            &taxonomy(),
        );
        assert_eq!(result.category, CATEGORY_GENERAL_ILLNESS);
        assert_eq!(result.confidence, 0.5);
        let detail = symptom_detail(&result);
        assert_eq!(detail.triage, TriageClass::ConsultDoctor);
        assert_eq!(detail.severity_score, 0.5);
    }

    #[test]
    fn unknown_hint_scores_nothing_and_falls_back() {
        let result = classify(
            &ClassificationInput::new("", vec!["xyzzy".into()]),
            &taxonomy(),
        );
        assert_eq!(result.category, CATEGORY_GENERAL_ILLNESS);
    }

    #[test]
    fn distribution_sums_to_one_when_anything_scores() {
        let result = classify(
            &ClassificationInput::new("", vec!["fever".into(), "nausea".into()]),
            &taxonomy(),
        );
        let sum: f64 = result.distribution.values().sum();
        assert!((sum - 1.0).abs() < 1e-9, "distribution sum was {sum}");
        assert!(result.distribution.values().all(|v| *v >= 0.0));
    }

    #[test]
    fn alternates_are_discounted_and_capped_at_two() {
        // "nausea" appears in migraine, gastroenteritis, and chest-pain sets.
        let result = classify(
            &ClassificationInput::new("", vec!["nausea".into(), "fever".into()]),
            &taxonomy(),
        );
        assert!(result.alternates.len() <= 2);
        for alt in &result.alternates {
            assert!(alt.confidence < result.confidence + 1e-9);
            assert!(alt.confidence > 0.0);
        }
    }

    #[test]
    fn equal_scores_resolve_to_first_declared_entry() {
        let store = TaxonomyStore::new(
            vec![
                ConditionEntry {
                    id: "first".into(),
                    keywords: vec!["ache".into()],
                    severity: SeverityTier::Mild,
                    triage: TriageClass::SelfCare,
                },
                ConditionEntry {
                    id: "second".into(),
                    keywords: vec!["ache".into()],
                    severity: SeverityTier::Mild,
                    triage: TriageClass::SelfCare,
                },
            ],
            vec![],
            TaxonomyStore::builtin().emotions().to_vec(),
            vec![],
        )
        .unwrap();
        let result = classify(&ClassificationInput::new("", vec!["ache".into()]), &store);
        assert_eq!(result.category, "first");
    }

    #[test]
    fn matched_terms_are_limited_to_five() {
        let hints = vec![
            "fever".into(),
            "cough".into(),
            "chills".into(),
            "fatigue".into(),
            "headache".into(),
            "nausea".into(),
        ];
        let result = classify(&ClassificationInput::new("", hints), &taxonomy());
        assert_eq!(symptom_detail(&result).matched_terms.len(), 5);
    }

    #[test]
    fn identical_input_yields_identical_results() {
        let input = ClassificationInput::new(
            "fever and headache since yesterday",
            vec!["fatigue".into()],
        );
        let first = classify(&input, &taxonomy());
        let second = classify(&input, &taxonomy());
        assert_eq!(first, second);
    }

    #[test]
    fn condition_level_emergency_triage_gets_urgent_message() {
        // dizziness + nausea match emergency_chest_pain without touching the
        // emergency keyword set: triage is emergency, but no override flag.
        let result = classify(
            &ClassificationInput::new("", vec!["dizziness".into(), "nausea".into()]),
            &taxonomy(),
        );
        if symptom_detail(&result).triage == TriageClass::Emergency {
            assert!(!result.emergency_override);
            assert_eq!(symptom_detail(&result).recommendation, URGENT_CARE_MESSAGE);
        }
    }
}
