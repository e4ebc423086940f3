//! Terminal implementation of the drill console.

use std::io::{self, BufRead, IsTerminal, Stdout, Write};

use comfy_table::{Attribute, Cell, Color, Table};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};

use certdrill_core::{Answer, Console, PlainStyler, Question, Scorecard, Styler, Tone, Topic};

/// ANSI styling through crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

impl Styler for AnsiStyler {
    fn emphasize(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn colorize(&self, text: &str, tone: Tone) -> String {
        match tone {
            Tone::Plain => text.to_string(),
            Tone::Accent => text.dark_yellow().to_string(),
            Tone::Success => text.green().to_string(),
            Tone::Failure => text.red().to_string(),
        }
    }
}

/// Reads answers from `input` and writes everything else to `output`.
///
/// Styling and screen clearing only happen when `interactive` is set.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    styler: Box<dyn Styler>,
    interactive: bool,
}

impl TerminalConsole<io::StdinLock<'static>, Stdout> {
    /// Console on stdin/stdout, styled when stdout is a terminal and
    /// `NO_COLOR` is unset.
    pub fn stdio() -> Self {
        let interactive = io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self::new(io::stdin().lock(), io::stdout(), interactive)
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W, interactive: bool) -> Self {
        let styler: Box<dyn Styler> = if interactive {
            Box::new(AnsiStyler)
        } else {
            Box::new(PlainStyler)
        };
        Self {
            input,
            output,
            styler,
            interactive,
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.output.flush()?;
        let mut buf = String::new();
        self.input.read_line(&mut buf)?;
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    fn results_table(&self, scorecard: &Scorecard) -> Table {
        let mut table = Table::new();
        if self.interactive {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }

        table.set_header(
            ["Question", "Correct Answer", "Result"]
                .into_iter()
                .map(|h| Cell::new(h).fg(Color::Green).add_attribute(Attribute::Bold)),
        );

        for row in &scorecard.rows {
            let (mark, color) = if row.passed {
                ("✅", Color::Green)
            } else {
                ("❌", Color::Red)
            };
            table.add_row(vec![
                Cell::new(format!("#{} {}", row.ordinal, row.question)),
                Cell::new(row.correct_answers.join(", ")),
                Cell::new(mark).fg(color),
            ]);
        }
        table
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn show_topics(&mut self, title: &str, topics: &[Topic]) -> io::Result<()> {
        let banner = self
            .styler
            .emphasize(&self.styler.colorize(&format!("-- {title} --"), Tone::Success));
        self.line(&banner)?;
        for (i, topic) in topics.iter().enumerate() {
            self.line(&format!("{}. {}", i + 1, topic.name()))?;
        }
        self.line("")
    }

    fn show_question(&mut self, ordinal: usize, question: &Question) -> io::Result<()> {
        let label = self
            .styler
            .colorize(&format!("Question #{ordinal}"), Tone::Accent);
        let header = self
            .styler
            .emphasize(&format!("{label} {}", question.text()));
        self.line("")?;
        self.line(&header)?;

        for (i, answer) in question.answers().iter().enumerate() {
            let number = self.styler.colorize(&(i + 1).to_string(), Tone::Accent);
            self.line(&format!("\t[{number}] {}", answer.value()))?;
        }
        Ok(())
    }

    fn acknowledge(&mut self, answer: &Answer) -> io::Result<()> {
        let label = self.styler.colorize("Your answer:", Tone::Accent);
        self.line(&format!("{label} {}", answer.value()))
    }

    fn notice(&mut self, message: &str, tone: Tone) -> io::Result<()> {
        let text = self.styler.colorize(message, tone);
        self.line(&text)
    }

    fn show_report(&mut self, scorecard: &Scorecard) -> io::Result<()> {
        let table = self.results_table(scorecard);
        writeln!(self.output, "\n{table}")?;

        let correct = self
            .styler
            .colorize(&format!("Correct: {}", scorecard.correct), Tone::Success);
        let wrong = self
            .styler
            .colorize(&format!("Wrong: {}", scorecard.wrong), Tone::Failure);
        let summary = self.styler.emphasize(&format!("{correct} - {wrong}"));
        self.line(&summary)
    }

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        let text = self.styler.emphasize(&format!("{label}: "));
        write!(self.output, "{text}")?;
        self.read_line()
    }

    fn answer_prompt(&mut self) -> io::Result<String> {
        write!(self.output, "> ")?;
        self.read_line()
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.interactive {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}
