//! Emotion classification from keyword triggers.
//!
//! Each category scores one point per distinct trigger word found in the
//! message. The highest score wins; ties go to the category declared first
//! in the lexicon. A zero score means no emotion was detected.

use super::lexicon::KeywordLexicon;
use serde::{Deserialize, Serialize};
use std::fmt;

// ── Emotion ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Anger,
    Sadness,
    Fear,
    Neutral,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Anger => "anger",
            Emotion::Sadness => "sadness",
            Emotion::Fear => "fear",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Detection ──────────────────────────────────────────────

/// Detect the dominant emotion in an already lower-cased message.
///
/// Returns the emotion and its intensity (number of distinct trigger words
/// matched). Intensity 0 always comes back as `Emotion::Neutral`.
pub fn detect_emotion(lexicon: &KeywordLexicon, lower: &str) -> (Emotion, u32) {
    let mut best = (Emotion::Neutral, 0u32);

    for (emotion, words) in lexicon.emotion_keywords() {
        let count = words.iter().filter(|w| lower.contains(w.as_str())).count() as u32;
        // Strict comparison keeps the earlier category on ties.
        if count > best.1 {
            best = (*emotion, count);
        }
    }

    best
}
