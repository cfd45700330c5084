use std::collections::HashMap;
use std::sync::LazyLock;

use super::normalize::NormalizedText;

/// AFINN-style valence table, curated for journal vocabulary. Integer
/// valences in [-5, 5]; tokens not listed contribute nothing.
static LEXICON: LazyLock<HashMap<&'static str, i32>> = LazyLock::new(|| {
    VALENCES.iter().copied().collect()
});

const VALENCES: &[(&str, i32)] = &[
    // positive
    ("amazing", 4),
    ("awesome", 4),
    ("beautiful", 3),
    ("best", 3),
    ("better", 2),
    ("blessed", 2),
    ("brilliant", 4),
    ("calm", 2),
    ("cheerful", 2),
    ("comfortable", 2),
    ("confident", 2),
    ("delight", 3),
    ("delighted", 3),
    ("eager", 2),
    ("enjoy", 2),
    ("enjoyed", 2),
    ("excellent", 3),
    ("excited", 3),
    ("fantastic", 4),
    ("fun", 4),
    ("glad", 3),
    ("good", 3),
    ("grateful", 3),
    ("great", 3),
    ("happy", 3),
    ("hope", 2),
    ("hopeful", 2),
    ("joy", 3),
    ("joyful", 3),
    ("love", 3),
    ("loved", 3),
    ("lovely", 3),
    ("nice", 3),
    ("peaceful", 2),
    ("perfect", 3),
    ("pleased", 3),
    ("proud", 2),
    ("relaxed", 2),
    ("relieved", 2),
    ("satisfied", 2),
    ("strong", 2),
    ("super", 3),
    ("superb", 5),
    ("thankful", 2),
    ("thrilled", 5),
    ("win", 4),
    ("wonderful", 4),
    ("wow", 4),
    // negative
    ("afraid", -2),
    ("alone", -2),
    ("angry", -3),
    ("annoyed", -2),
    ("anxious", -2),
    ("ashamed", -2),
    ("awful", -3),
    ("bad", -3),
    ("bitter", -2),
    ("bored", -2),
    ("cried", -2),
    ("crying", -2),
    ("depressed", -2),
    ("devastated", -2),
    ("disappointed", -2),
    ("disgusted", -3),
    ("dread", -2),
    ("empty", -1),
    ("exhausted", -2),
    ("fail", -2),
    ("failed", -2),
    ("fear", -2),
    ("frustrated", -2),
    ("furious", -3),
    ("grief", -2),
    ("guilty", -3),
    ("hate", -3),
    ("hated", -3),
    ("helpless", -2),
    ("hopeless", -2),
    ("horrible", -3),
    ("hurt", -2),
    ("lonely", -2),
    ("lost", -3),
    ("mad", -3),
    ("miserable", -3),
    ("nervous", -2),
    ("pain", -2),
    ("panic", -3),
    ("sad", -2),
    ("scared", -2),
    ("sick", -2),
    ("sorrow", -2),
    ("stressed", -2),
    ("terrible", -3),
    ("terrified", -3),
    ("tired", -2),
    ("unhappy", -2),
    ("upset", -2),
    ("weak", -2),
    ("worried", -3),
    ("worse", -3),
    ("worst", -3),
    ("wrong", -2),
];

/// Lexicon polarity over the token sequence: summed valence divided by token
/// count, clamped to [-1, 1]. Empty input is exactly 0.0.
pub fn polarity(text: &NormalizedText) -> f64 {
    let mut sum = 0i32;
    let mut count = 0usize;
    for token in text.tokens() {
        count += 1;
        if let Some(valence) = LEXICON.get(token) {
            sum += valence;
        }
    }
    if count == 0 {
        return 0.0;
    }
    (sum as f64 / count as f64).clamp(-1.0, 1.0)
}
