//! Message Sentiment Scoring — polarity, label, emotion and sarcasm for a
//! single user message.
//!
//! A base polarity from the `PolarityEstimator` is adjusted by keyword
//! rules: a flat penalty for negative cues (cancelled by a negation phrase),
//! then a sarcasm penalty that also overrides the detected emotion. The
//! final polarity is always clamped into `[-1.0, 1.0]`.

use super::emotion::{detect_emotion, Emotion};
use super::lexicon::KeywordLexicon;
use super::polarity::{LexiconPolarity, PolarityEstimator};
use serde::{Deserialize, Serialize};
use std::fmt;

const NEGATIVE_KEYWORD_PENALTY: f64 = 0.3;
const SARCASM_PENALTY: f64 = 0.4;
const LABEL_THRESHOLD: f64 = 0.1;

// ── Label ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Strict, symmetric thresholds: exactly ±0.1 is Neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > LABEL_THRESHOLD {
            Self::Positive
        } else if polarity < -LABEL_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Result ─────────────────────────────────────────────────

/// Scored view of one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResult {
    /// Final polarity, clamped to `[-1.0, 1.0]`.
    pub polarity: f64,
    pub label: SentimentLabel,
    pub emotion: Emotion,
    /// Distinct trigger words matched for the detected emotion.
    pub intensity: u32,
    pub sarcasm: bool,
}

// ── Scorer ─────────────────────────────────────────────────

/// Stateless scorer over a shared, read-only lexicon.
#[derive(Debug, Clone)]
pub struct MessageScorer<'a, P = LexiconPolarity> {
    lexicon: &'a KeywordLexicon,
    estimator: P,
}

impl MessageScorer<'static, LexiconPolarity> {
    /// Scorer over the process-wide lexicon and the default estimator.
    pub fn global() -> Self {
        Self::new(KeywordLexicon::global(), LexiconPolarity::new())
    }
}

impl<'a, P: PolarityEstimator> MessageScorer<'a, P> {
    pub fn new(lexicon: &'a KeywordLexicon, estimator: P) -> Self {
        Self { lexicon, estimator }
    }

    pub fn lexicon(&self) -> &KeywordLexicon {
        self.lexicon
    }

    /// Score a message. Never fails; empty input scores neutral.
    pub fn score(&self, text: &str) -> MessageResult {
        let mut polarity = sanitize(self.estimator.polarity(text));
        let lower = text.to_lowercase();

        // 1. Negative cues cost a flat penalty unless a negation phrase is present
        let has_negation = self.lexicon.has_negated_keyword(&lower);
        if self.lexicon.has_negative_keyword(&lower) && !has_negation {
            polarity -= NEGATIVE_KEYWORD_PENALTY;
        }

        // 2. Keyword emotion
        let (mut emotion, intensity) = detect_emotion(self.lexicon, &lower);

        // 3. Sarcasm overrides the keyword emotion
        let sarcasm = detect_sarcasm(&lower, polarity);
        if sarcasm {
            polarity -= SARCASM_PENALTY;
            emotion = Emotion::Anger;
        }

        let polarity = polarity.clamp(-1.0, 1.0);
        let result = MessageResult {
            polarity,
            label: SentimentLabel::from_polarity(polarity),
            emotion,
            intensity,
            sarcasm,
        };

        tracing::trace!(
            "[Sentiment] polarity={:.3} label={} emotion={} intensity={} sarcasm={} negated={}",
            result.polarity,
            result.label,
            result.emotion,
            result.intensity,
            result.sarcasm,
            has_negation
        );

        result
    }
}

/// "yeah right" anywhere, or "great" while the running polarity is negative.
pub fn detect_sarcasm(lower: &str, polarity: f64) -> bool {
    lower.contains("yeah right") || (lower.contains("great") && polarity < 0.0)
}

/// Treat a non-finite estimator output as "no signal" and bound the rest.
fn sanitize(polarity: f64) -> f64 {
    if polarity.is_finite() {
        polarity.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
