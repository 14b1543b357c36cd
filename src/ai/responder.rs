//! Reply selection keyed on the scored message.

use super::emotion::Emotion;
use super::sentiment::MessageResult;

pub const ANGER_REPLY: &str = "That sounds seriously frustrating. Walk me through what went wrong.";
pub const SADNESS_REPLY: &str = "That's heavy. I'm here — want to talk about it?";
pub const JOY_REPLY: &str = "Love that vibe! What made your day so good?";
pub const SARCASM_REPLY: &str = "I'm sensing sarcasm — sounds like something's really off.";
pub const DEFAULT_REPLY: &str = "I'm listening. Tell me more.";

/// Pick the canned reply. First match wins: anger, sadness, joy, sarcasm, default.
pub fn select_reply(result: &MessageResult) -> &'static str {
    match result.emotion {
        Emotion::Anger => ANGER_REPLY,
        Emotion::Sadness => SADNESS_REPLY,
        Emotion::Joy => JOY_REPLY,
        _ if result.sarcasm => SARCASM_REPLY,
        _ => DEFAULT_REPLY,
    }
}
