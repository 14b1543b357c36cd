//! Base polarity estimation: the general-purpose signal the keyword
//! adjustments are layered on top of.
//!
//! `LexiconPolarity` averages per-word scores from a small polarity lexicon,
//! flipping and damping a word preceded by a negator and boosting one
//! preceded by an intensifier. Any other estimator can be plugged in through
//! the `PolarityEstimator` trait.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Produces a base polarity in `[-1.0, 1.0]` for a raw message.
pub trait PolarityEstimator {
    fn polarity(&self, text: &str) -> f64;
}

// ── Word scores ────────────────────────────────────────────

const WORD_SCORES: &[(&str, f64)] = &[
    // Positive
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("brilliant", 0.9),
    ("cool", 0.35),
    ("delighted", 0.7),
    ("enjoy", 0.4),
    ("excellent", 1.0),
    ("fantastic", 0.4),
    ("fine", 0.4),
    ("fun", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.5),
    ("love", 0.5),
    ("lovely", 0.5),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleased", 0.5),
    ("thanks", 0.2),
    ("wonderful", 1.0),
    // Negative
    ("afraid", -0.6),
    ("angry", -0.5),
    ("annoyed", -0.4),
    ("anxious", -0.25),
    ("awful", -1.0),
    ("bad", -0.7),
    ("boring", -1.0),
    ("broken", -0.4),
    ("depressed", -0.6),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("furious", -0.8),
    ("hate", -0.8),
    ("horrible", -1.0),
    ("nervous", -0.3),
    ("poor", -0.4),
    ("sad", -0.5),
    ("scared", -0.5),
    ("stupid", -0.8),
    ("terrible", -1.0),
    ("tired", -0.4),
    ("unhappy", -0.6),
    ("upset", -0.5),
    ("worried", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

const NEGATORS: &[&str] = &["not", "never", "no", "hardly", "barely"];

const INTENSIFIERS: &[&str] = &["very", "really", "so", "extremely", "too", "incredibly"];

const NEGATION_FACTOR: f64 = -0.5;
const INTENSIFIER_FACTOR: f64 = 1.3;

// ── LexiconPolarity ────────────────────────────────────────

static WORD_TABLE: OnceLock<HashMap<&'static str, f64>> = OnceLock::new();

fn word_table() -> &'static HashMap<&'static str, f64> {
    WORD_TABLE.get_or_init(|| WORD_SCORES.iter().copied().collect())
}

/// Averaged word-polarity estimator over the shared word table.
#[derive(Debug, Clone, Copy)]
pub struct LexiconPolarity {
    scores: &'static HashMap<&'static str, f64>,
}

impl Default for LexiconPolarity {
    fn default() -> Self {
        Self {
            scores: word_table(),
        }
    }
}

impl LexiconPolarity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PolarityEstimator for LexiconPolarity {
    fn polarity(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let mut total = 0.0;
        let mut scored = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.scores.get(token.as_str()) else {
                continue;
            };

            let mut score = base;
            if let Some(prev) = i.checked_sub(1).map(|j| tokens[j].as_str()) {
                if is_negator(prev) {
                    score *= NEGATION_FACTOR;
                } else if INTENSIFIERS.contains(&prev) {
                    score = (score * INTENSIFIER_FACTOR).clamp(-1.0, 1.0);
                }
            }

            total += score;
            scored += 1;
        }

        if scored == 0 {
            return 0.0;
        }
        (total / scored as f64).clamp(-1.0, 1.0)
    }
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't")
}

/// Lower-cased alphabetic runs; apostrophes stay inside a word.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphabetic() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
