//! Keyword Lexicon — the fixed cue lists behind message scoring.
//!
//! Built once per process and shared read-only by every scoring call.
//! All entries are lower-case; matching is plain substring search on the
//! lower-cased message, so no word-boundary rules apply.

use super::emotion::Emotion;
use std::sync::OnceLock;

// ── Keyword sets ───────────────────────────────────────────

const NEGATIVE_KW: &[&str] = &[
    "disappoint",
    "disappointed",
    "disappoints",
    "bad",
    "terrible",
    "awful",
    "worst",
    "angry",
    "upset",
    "hate",
    "poor service",
];

const NEGATION_KW: &[&str] = &["not", "never", "no", "hardly", "barely"];

const JOY_KW: &[&str] = &["happy", "great", "awesome", "love", "fantastic", "amazing"];
const ANGER_KW: &[&str] = &["angry", "furious", "hate", "worst", "annoyed", "irritated"];
const SADNESS_KW: &[&str] = &["sad", "upset", "disappointed", "depressed", "unhappy"];
const FEAR_KW: &[&str] = &["scared", "worried", "nervous", "afraid", "anxious"];

/// Immutable keyword configuration used by the scorer.
#[derive(Debug, Clone)]
pub struct KeywordLexicon {
    negative_keywords: Vec<String>,
    negation_words: Vec<String>,
    /// Declaration order matters: it breaks ties in emotion detection.
    emotion_keywords: Vec<(Emotion, Vec<String>)>,
}

static GLOBAL: OnceLock<KeywordLexicon> = OnceLock::new();

impl Default for KeywordLexicon {
    fn default() -> Self {
        fn owned(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| w.to_string()).collect()
        }

        Self {
            negative_keywords: owned(NEGATIVE_KW),
            negation_words: owned(NEGATION_KW),
            emotion_keywords: vec![
                (Emotion::Joy, owned(JOY_KW)),
                (Emotion::Anger, owned(ANGER_KW)),
                (Emotion::Sadness, owned(SADNESS_KW)),
                (Emotion::Fear, owned(FEAR_KW)),
            ],
        }
    }
}

impl KeywordLexicon {
    /// Build a lexicon from explicit lists. Entries are lower-cased.
    pub fn new(
        negative_keywords: &[&str],
        negation_words: &[&str],
        emotion_keywords: &[(Emotion, &[&str])],
    ) -> Self {
        fn lower(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| w.to_lowercase()).collect()
        }

        Self {
            negative_keywords: lower(negative_keywords),
            negation_words: lower(negation_words),
            emotion_keywords: emotion_keywords
                .iter()
                .map(|(emotion, words)| (*emotion, lower(words)))
                .collect(),
        }
    }

    /// The process-wide default lexicon, built on first use.
    pub fn global() -> &'static KeywordLexicon {
        GLOBAL.get_or_init(|| {
            let lexicon = KeywordLexicon::default();
            tracing::debug!(
                "[Lexicon] Initialized: {} negative cues, {} negations, {} emotion categories",
                lexicon.negative_keywords.len(),
                lexicon.negation_words.len(),
                lexicon.emotion_keywords.len()
            );
            lexicon
        })
    }

    pub fn negative_keywords(&self) -> &[String] {
        &self.negative_keywords
    }

    pub fn negation_words(&self) -> &[String] {
        &self.negation_words
    }

    /// Emotion categories with their trigger words, in declaration order.
    pub fn emotion_keywords(&self) -> &[(Emotion, Vec<String>)] {
        &self.emotion_keywords
    }

    /// True when any negative cue occurs in `lower`.
    pub fn has_negative_keyword(&self, lower: &str) -> bool {
        self.negative_keywords.iter().any(|kw| lower.contains(kw.as_str()))
    }

    /// True when some `"<negation> <negative cue>"` phrase occurs in `lower`.
    pub fn has_negated_keyword(&self, lower: &str) -> bool {
        self.negation_words.iter().any(|neg| {
            self.negative_keywords
                .iter()
                .any(|kw| lower.contains(&format!("{} {}", neg, kw)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_emotion_order_is_joy_anger_sadness_fear() {
        let lex = KeywordLexicon::default();
        let order: Vec<Emotion> = lex.emotion_keywords().iter().map(|(e, _)| *e).collect();
        assert_eq!(
            order,
            vec![Emotion::Joy, Emotion::Anger, Emotion::Sadness, Emotion::Fear]
        );
    }

    #[test]
    fn negative_keyword_matches_inside_longer_words() {
        let lex = KeywordLexicon::default();
        assert!(lex.has_negative_keyword("a badger ran past"));
    }

    #[test]
    fn multi_word_cue_pairs_with_negation() {
        let lex = KeywordLexicon::default();
        assert!(lex.has_negative_keyword("the poor service again"));
        assert!(lex.has_negated_keyword("there was no poor service"));
        assert!(!lex.has_negated_keyword("poor service, not today"));
    }

    #[test]
    fn negation_must_be_directly_followed_by_cue() {
        let lex = KeywordLexicon::default();
        assert!(lex.has_negated_keyword("it was not bad"));
        assert!(!lex.has_negated_keyword("it was not that bad"));
    }

    #[test]
    fn custom_lexicon_lowercases_entries() {
        let joy: &[&str] = &["Yay"];
        let lex = KeywordLexicon::new(&["Meh"], &["NOT"], &[(Emotion::Joy, joy)]);
        assert!(lex.has_negated_keyword("not meh"));
        assert_eq!(lex.emotion_keywords()[0].1, vec!["yay".to_string()]);
    }

    #[test]
    fn global_is_shared() {
        let a = KeywordLexicon::global() as *const KeywordLexicon;
        let b = KeywordLexicon::global() as *const KeywordLexicon;
        assert_eq!(a, b);
    }
}
