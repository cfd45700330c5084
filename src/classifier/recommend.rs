use super::types::TriageClass;

/// Fixed urgent-care message. Returned verbatim for any emergency triage,
/// whether from the keyword short-circuit or an emergency-class condition.
pub const URGENT_CARE_MESSAGE: &str =
    "🚨 URGENT: Please seek immediate medical attention or call emergency services. \
     Do not delay.";

/// Shown when neither text nor hints carried usable content.
pub const INSUFFICIENT_INFO_MESSAGE: &str =
    "Please provide more details about your symptoms.";

/// Shown for the general-illness fallback when nothing scored.
pub const GENERAL_ILLNESS_MESSAGE: &str =
    "Monitor your symptoms. If they persist or worsen, consult a healthcare professional.";

const DISCLAIMER: &str = "\n\n⚠️ Note: This is not a medical diagnosis. \
     Always consult healthcare professionals for proper medical advice.";

/// Condition-specific guidance. When present it fully replaces the generic
/// triage message; it is never concatenated with it.
fn specific_message(triage: TriageClass, category: &str) -> Option<&'static str> {
    match (triage, category) {
        (TriageClass::SelfCare, "common_cold") => Some(
            "Rest, drink plenty of fluids, use saline nasal spray, and consider \
             over-the-counter cold medicine.",
        ),
        (TriageClass::SelfCare, "migraine") => Some(
            "Rest in a dark, quiet room. Stay hydrated. Consider over-the-counter \
             pain relief. Avoid triggers.",
        ),
        (TriageClass::ConsultDoctor, "flu") => Some(
            "See a doctor for antiviral medication if caught early. Rest, stay \
             hydrated, and monitor for complications.",
        ),
        (TriageClass::ConsultDoctor, "urinary_tract_infection") => Some(
            "Consult a doctor for antibiotics. Drink plenty of water and avoid irritants.",
        ),
        (TriageClass::ConsultDoctor, "gastroenteritis") => Some(
            "See a doctor if symptoms persist. Stay hydrated with electrolyte solutions.",
        ),
        _ => None,
    }
}

fn generic_message(triage: TriageClass) -> &'static str {
    match triage {
        TriageClass::SelfCare => {
            "Monitor your symptoms at home. Rest, stay hydrated, and take \
             over-the-counter medications as needed."
        }
        TriageClass::ConsultDoctor => {
            "Schedule an appointment with your healthcare provider. Monitor symptoms \
             and seek care if they worsen."
        }
        TriageClass::Emergency => URGENT_CARE_MESSAGE,
    }
}

/// Synthesize the patient-facing recommendation for a resolved condition.
///
/// Lookup order: emergency triage returns the fixed urgent message with no
/// further lookup; otherwise a condition-specific message when one exists;
/// otherwise the triage-level generic message with the disclaimer appended.
pub fn recommendation_for(triage: TriageClass, category: &str) -> String {
    if triage == TriageClass::Emergency {
        return URGENT_CARE_MESSAGE.to_string();
    }
    if let Some(specific) = specific_message(triage, category) {
        return specific.to_string();
    }
    format!("{}{}", generic_message(triage), DISCLAIMER)
}
