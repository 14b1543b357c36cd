//! Conversation Mood — average polarity and recency-weighted trend over the
//! whole message history.
//!
//! Every call rescores the full history from scratch. Message scoring keeps
//! no cross-message state, so there is nothing to maintain incrementally.

use super::polarity::{LexiconPolarity, PolarityEstimator};
use super::sentiment::{MessageScorer, SentimentLabel};
use crate::error::AnalysisError;
use serde::Serialize;
use std::fmt;

/// Fewer messages than this and no trend is reported.
pub const MIN_TREND_MESSAGES: usize = 4;
/// Weights for the most recent messages, oldest first.
const TREND_WEIGHTS: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
const TREND_THRESHOLD: f64 = 0.2;

// ── Trend ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoodTrend {
    NotEnoughData,
    StrongPositive,
    StrongNegative,
    Stable,
}

impl MoodTrend {
    pub fn from_weighted_average(weighted: f64) -> Self {
        if weighted > TREND_THRESHOLD {
            Self::StrongPositive
        } else if weighted < -TREND_THRESHOLD {
            Self::StrongNegative
        } else {
            Self::Stable
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::NotEnoughData => "Mood trend: Not enough data.",
            Self::StrongPositive => "Mood trend: Strong positive improvement.",
            Self::StrongNegative => "Mood trend: Strong negative deterioration.",
            Self::Stable => "Mood trend: Emotionally stable.",
        }
    }
}

impl fmt::Display for MoodTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// ── Summary ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationSummary {
    pub average_polarity: f64,
    pub overall_label: SentimentLabel,
    pub trend: MoodTrend,
}

/// Weighted mean of up to the last five polarities, newest weighted 5.
///
/// Returns `None` for an empty slice.
pub fn weighted_recent_average(polarities: &[f64]) -> Option<f64> {
    if polarities.is_empty() {
        return None;
    }
    let k = polarities.len().min(TREND_WEIGHTS.len());
    let recent = &polarities[polarities.len() - k..];
    let weights = &TREND_WEIGHTS[TREND_WEIGHTS.len() - k..];

    let weighted: f64 = recent.iter().zip(weights).map(|(p, w)| p * w).sum();
    let total: f64 = weights.iter().sum();
    Some(weighted / total)
}

// ── Aggregator ─────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ConversationAggregator<'a, P = LexiconPolarity> {
    scorer: MessageScorer<'a, P>,
}

impl ConversationAggregator<'static, LexiconPolarity> {
    pub fn global() -> Self {
        Self::new(MessageScorer::global())
    }
}

impl<'a, P: PolarityEstimator> ConversationAggregator<'a, P> {
    pub fn new(scorer: MessageScorer<'a, P>) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &MessageScorer<'a, P> {
        &self.scorer
    }

    /// Summarize the full history, oldest message first.
    pub fn summarize<S: AsRef<str>>(
        &self,
        history: &[S],
    ) -> Result<ConversationSummary, AnalysisError> {
        if history.is_empty() {
            return Err(AnalysisError::EmptyHistory);
        }

        let polarities: Vec<f64> = history
            .iter()
            .map(|m| self.scorer.score(m.as_ref()).polarity)
            .collect();

        let average_polarity = polarities.iter().sum::<f64>() / polarities.len() as f64;
        let trend = trend_of(&polarities);

        tracing::debug!(
            "[Conversation] {} messages, avg={:.3}, trend={:?}",
            polarities.len(),
            average_polarity,
            trend
        );

        Ok(ConversationSummary {
            average_polarity,
            overall_label: SentimentLabel::from_polarity(average_polarity),
            trend,
        })
    }
}

fn trend_of(polarities: &[f64]) -> MoodTrend {
    if polarities.len() < MIN_TREND_MESSAGES {
        return MoodTrend::NotEnoughData;
    }
    weighted_recent_average(polarities)
        .map(MoodTrend::from_weighted_average)
        .unwrap_or(MoodTrend::NotEnoughData)
}
