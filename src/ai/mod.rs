pub mod conversation;
pub mod emotion;
pub mod lexicon;
pub mod polarity;
pub mod responder;
pub mod sentiment;


pub use conversation::{ConversationAggregator, ConversationSummary, MoodTrend};
pub use emotion::Emotion;
pub use lexicon::KeywordLexicon;
pub use polarity::{LexiconPolarity, PolarityEstimator};
pub use responder::select_reply;
pub use sentiment::{MessageResult, MessageScorer, SentimentLabel};
