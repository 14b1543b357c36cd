use crate::ai::{
    select_reply, ConversationAggregator, Emotion, MessageResult, MessageScorer, SentimentLabel,
};
use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub message: String,
}

/// Per-message sentiment as returned to callers; polarity rounded to 2 places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentView {
    pub polarity: f64,
    pub label: SentimentLabel,
    pub emotion: Emotion,
    pub intensity: u32,
    pub sarcasm: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallView {
    pub avg: f64,
    pub label: SentimentLabel,
    pub trend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeResponse {
    pub reply: String,
    pub sentiment: SentimentView,
    pub overall: OverallView,
}

impl From<&MessageResult> for SentimentView {
    fn from(r: &MessageResult) -> Self {
        Self {
            polarity: round2(r.polarity),
            label: r.label,
            emotion: r.emotion,
            intensity: r.intensity,
            sarcasm: r.sarcasm,
        }
    }
}

/// Round for presentation only; scoring keeps full precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One conversation's append-only message history.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    history: Vec<String>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Score `message`, pick a reply, then append it and summarize the
    /// whole history including it.
    pub fn analyze(&mut self, message: &str) -> Result<AnalyzeResponse, AnalysisError> {
        let scorer = MessageScorer::global();
        let result = scorer.score(message);
        let reply = select_reply(&result);

        self.history.push(message.to_string());
        let summary = ConversationAggregator::new(scorer).summarize(&self.history)?;

        Ok(AnalyzeResponse {
            reply: reply.to_string(),
            sentiment: SentimentView::from(&result),
            overall: OverallView {
                avg: round2(summary.average_polarity),
                label: summary.overall_label,
                trend: summary.trend.to_string(),
            },
        })
    }
}

/// Boundary check for a request, then analysis. Blank messages are rejected.
pub fn analyze_message(
    session: &mut ChatSession,
    request: AnalyzeRequest,
) -> Result<AnalyzeResponse, String> {
    if request.message.trim().is_empty() {
        return Err("Message cannot be empty".to_string());
    }
    session.analyze(&request.message).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::responder::{DEFAULT_REPLY, JOY_REPLY};

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(0.586), 0.59);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn first_message_is_appended_before_summary() {
        let mut session = ChatSession::new();
        let resp = session
            .analyze("I am not disappointed at all, this is great!")
            .unwrap();

        assert_eq!(session.history().len(), 1);
        assert_eq!(resp.reply, JOY_REPLY);
        assert_eq!(resp.sentiment.emotion, Emotion::Joy);
        assert_eq!(resp.overall.avg, resp.sentiment.polarity);
        assert_eq!(resp.overall.trend, "Mood trend: Not enough data.");
    }

    #[test]
    fn trend_appears_from_fourth_message() {
        let mut session = ChatSession::new();
        for _ in 0..3 {
            let resp = session.analyze("what a wonderful, happy day").unwrap();
            assert_eq!(resp.overall.trend, "Mood trend: Not enough data.");
        }
        let resp = session.analyze("what a wonderful, happy day").unwrap();
        assert_eq!(resp.overall.trend, "Mood trend: Strong positive improvement.");
    }

    #[test]
    fn blank_message_rejected_at_boundary() {
        let mut session = ChatSession::new();
        let err = analyze_message(
            &mut session,
            AnalyzeRequest {
                message: "   ".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, "Message cannot be empty");
        assert!(session.history().is_empty());
    }

    #[test]
    fn plain_message_gets_default_reply() {
        let mut session = ChatSession::new();
        let resp = analyze_message(
            &mut session,
            AnalyzeRequest {
                message: "I went to the shop".to_string(),
            },
        )
        .unwrap();
        assert_eq!(resp.reply, DEFAULT_REPLY);
        assert_eq!(resp.sentiment.label, SentimentLabel::Neutral);
    }

    #[test]
    fn response_json_shape() {
        let mut session = ChatSession::new();
        let resp = session.analyze("happy").unwrap();
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json["reply"].is_string());
        assert_eq!(json["sentiment"]["emotion"], "joy");
        assert_eq!(json["sentiment"]["label"], "Positive");
        assert!(json["overall"]["avg"].is_number());
        assert_eq!(json["overall"]["label"], "Positive");
    }
}
