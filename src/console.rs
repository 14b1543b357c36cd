//! Interactive console chat. One line in, sentiment line plus reply out,
//! and a mood report when the user leaves.

use crate::ai::{select_reply, ConversationAggregator, MessageScorer};
use std::io::{self, BufRead, Write};

const EXIT_WORDS: &[&str] = &["quit", "exit"];

/// Run the chat loop until "quit"/"exit" (any case) or end of input.
pub fn run_chat<R: BufRead, W: Write>(input: R, mut out: W, show_banner: bool) -> io::Result<()> {
    let scorer = MessageScorer::global();
    let mut history: Vec<String> = Vec::new();

    if show_banner {
        writeln!(out, "=== Emotional Intelligence ChatBot ===")?;
        writeln!(out, "Type 'quit' to exit.\n")?;
    }

    let mut lines = input.lines();
    loop {
        write!(out, "User: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            // EOF behaves like "quit".
            writeln!(out)?;
            break;
        };
        let line = line?;

        if EXIT_WORDS.contains(&line.trim().to_lowercase().as_str()) {
            break;
        }

        let result = scorer.score(&line);
        let reply = select_reply(&result);

        writeln!(
            out,
            "→ Sentiment: {} | Emotion: {} | Score: {:.2}",
            result.label, result.emotion, result.polarity
        )?;
        writeln!(out, "Bot: {}\n", reply)?;

        history.push(line);
    }

    tracing::debug!("[Console] Session ended after {} messages", history.len());
    write_report(&mut out, &ConversationAggregator::new(scorer), &history)
}

fn write_report<W: Write>(
    out: &mut W,
    aggregator: &ConversationAggregator<'_>,
    history: &[String],
) -> io::Result<()> {
    writeln!(out, "\n===== FINAL REPORT =====")?;
    match aggregator.summarize(history) {
        Ok(summary) => {
            writeln!(out, "Overall sentiment: {}", summary.overall_label)?;
            writeln!(out, "Average polarity: {:.2}", summary.average_polarity)?;
            writeln!(out, "{}", summary.trend)?;
        }
        Err(e) => {
            writeln!(out, "Overall sentiment: {}", e)?;
        }
    }
    writeln!(out, "========================")
}
