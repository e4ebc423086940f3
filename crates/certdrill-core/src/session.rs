//! One interactive drill: pick a topic, answer questions, see the score.

use anyhow::Result;
use rand::RngCore;

use crate::config::DrillConfig;
use crate::console::{Console, Tone};
use crate::report::{ReportWidths, Scorecard};
use crate::topic::Topic;

/// Shown when the topic or question count cannot be used.
pub const ABORT_MESSAGE: &str = "Invalid input. Exiting...";

pub const TOPIC_PROMPT: &str = "Select topic";
pub const COUNT_PROMPT: &str = "Amount of questions";

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// All questions were asked and scored.
    Completed(Scorecard),
    /// The user gave an unusable topic or question count.
    Aborted,
}

/// Parse a 1-based topic number into an index into `available` topics.
pub fn parse_topic_choice(input: &str, available: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    (1..=available).contains(&choice).then(|| choice - 1)
}

/// Parse a positive question count.
pub fn parse_question_count(input: &str) -> Option<usize> {
    input.trim().parse().ok().filter(|&n: &usize| n > 0)
}

/// Run a full session over `topics`.
///
/// Unusable input ends the session with [`SessionOutcome::Aborted`] after
/// telling the user; running out of questions is an error.
pub fn run_session(
    topics: &mut [Topic],
    console: &mut dyn Console,
    rng: &mut dyn RngCore,
    config: &DrillConfig,
) -> Result<SessionOutcome> {
    anyhow::ensure!(!topics.is_empty(), "no topics available");

    console.show_topics(&config.title, topics)?;

    let Some(index) = parse_topic_choice(&console.prompt(TOPIC_PROMPT)?, topics.len()) else {
        console.notice(ABORT_MESSAGE, Tone::Failure)?;
        return Ok(SessionOutcome::Aborted);
    };
    let Some(count) = parse_question_count(&console.prompt(COUNT_PROMPT)?) else {
        console.notice(ABORT_MESSAGE, Tone::Failure)?;
        return Ok(SessionOutcome::Aborted);
    };

    console.clear()?;
    let topic = &mut topics[index];
    tracing::info!("starting '{}' with {} questions", topic.name(), count);

    topic.load_topic(count, rng, config.draw_factor)?;
    topic.show_questions(console)?;

    let widths = ReportWidths {
        question: config.question_width,
        answer: config.answer_width,
    };
    let scorecard = topic.show_results(console, widths)?;
    Ok(SessionOutcome::Completed(scorecard))
}
