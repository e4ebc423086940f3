//! The presentation boundary.
//!
//! The drill logic talks to the user only through [`Console`]. Styling is a
//! separate capability ([`Styler`]) so the core never emits control
//! sequences itself. The CLI provides the terminal implementation;
//! [`ScriptedConsole`] replays canned input for tests.

use std::collections::VecDeque;
use std::io;

use crate::model::{Answer, Question};
use crate::report::Scorecard;
use crate::topic::Topic;

/// Colour intent for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Ordinals, labels and echoed answers.
    Accent,
    Success,
    Failure,
}

/// Text formatting capability.
pub trait Styler {
    /// Render `text` in bold.
    fn emphasize(&self, text: &str) -> String;

    /// Render `text` in the colour associated with `tone`.
    fn colorize(&self, text: &str, tone: Tone) -> String;
}

/// A styler that leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn emphasize(&self, text: &str) -> String {
        text.to_string()
    }

    fn colorize(&self, text: &str, _tone: Tone) -> String {
        text.to_string()
    }
}

/// Everything the drill shows to, or reads from, the user.
pub trait Console {
    /// Show the numbered topic list under a banner.
    fn show_topics(&mut self, title: &str, topics: &[Topic]) -> io::Result<()>;

    /// Show a question (1-based ordinal) and its numbered answers.
    fn show_question(&mut self, ordinal: usize, question: &Question) -> io::Result<()>;

    /// Echo an answer the user just selected.
    fn acknowledge(&mut self, answer: &Answer) -> io::Result<()>;

    /// Show a one-line message.
    fn notice(&mut self, message: &str, tone: Tone) -> io::Result<()>;

    /// Show the results table and the score line.
    fn show_report(&mut self, scorecard: &Scorecard) -> io::Result<()>;

    /// Ask for a labelled value. Returns the line without its terminator,
    /// or an empty string at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<String>;

    /// Read one line of answer input after a `> ` marker.
    fn answer_prompt(&mut self) -> io::Result<String>;

    fn clear(&mut self) -> io::Result<()>;
}

/// A display event recorded by [`ScriptedConsole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Topics(Vec<String>),
    Question { ordinal: usize, uuid: String },
    Acknowledged(String),
    Notice(String, Tone),
    Report { correct: usize, wrong: usize },
    Prompt(String),
    AnswerPrompt,
    Clear,
}

/// A console fed from a script of input lines that records what it shows.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    events: Vec<ConsoleEvent>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[ConsoleEvent] {
        &self.events
    }

    /// Labels of every labelled prompt shown so far.
    pub fn prompts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ConsoleEvent::Prompt(label) => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Messages shown with [`Console::notice`].
    pub fn notices(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ConsoleEvent::Notice(message, _) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    fn next_line(&mut self) -> String {
        self.input.pop_front().unwrap_or_default()
    }
}

impl Console for ScriptedConsole {
    fn show_topics(&mut self, _title: &str, topics: &[Topic]) -> io::Result<()> {
        let names = topics.iter().map(|t| t.name().to_string()).collect();
        self.events.push(ConsoleEvent::Topics(names));
        Ok(())
    }

    fn show_question(&mut self, ordinal: usize, question: &Question) -> io::Result<()> {
        self.events.push(ConsoleEvent::Question {
            ordinal,
            uuid: question.uuid().to_string(),
        });
        Ok(())
    }

    fn acknowledge(&mut self, answer: &Answer) -> io::Result<()> {
        self.events
            .push(ConsoleEvent::Acknowledged(answer.value().to_string()));
        Ok(())
    }

    fn notice(&mut self, message: &str, tone: Tone) -> io::Result<()> {
        self.events
            .push(ConsoleEvent::Notice(message.to_string(), tone));
        Ok(())
    }

    fn show_report(&mut self, scorecard: &Scorecard) -> io::Result<()> {
        self.events.push(ConsoleEvent::Report {
            correct: scorecard.correct,
            wrong: scorecard.wrong,
        });
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        self.events.push(ConsoleEvent::Prompt(label.to_string()));
        Ok(self.next_line())
    }

    fn answer_prompt(&mut self) -> io::Result<String> {
        self.events.push(ConsoleEvent::AnswerPrompt);
        Ok(self.next_line())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.events.push(ConsoleEvent::Clear);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_styler_is_identity() {
        let styler = PlainStyler;
        assert_eq!(styler.emphasize("bold"), "bold");
        assert_eq!(styler.colorize("red", Tone::Failure), "red");
    }

    #[test]
    fn scripted_console_replays_lines_then_eof() {
        let mut console = ScriptedConsole::new(["1", "5"]);
        assert_eq!(console.prompt("Select topic").unwrap(), "1");
        assert_eq!(console.answer_prompt().unwrap(), "5");
        assert_eq!(console.prompt("Amount of questions").unwrap(), "");
        assert_eq!(
            console.prompts(),
            vec!["Select topic", "Amount of questions"]
        );
    }
}
