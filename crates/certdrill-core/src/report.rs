//! Results report assembly.

use crate::model::Question;

/// Marker appended to text that was cut short.
pub const ELLIPSIS: &str = "..";

/// Cut `text` to `width` characters, appending [`ELLIPSIS`] only when
/// something was removed.
pub fn truncate(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Display widths for the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWidths {
    pub question: usize,
    pub answer: usize,
}

impl Default for ReportWidths {
    fn default() -> Self {
        Self {
            question: 75,
            answer: 35,
        }
    }
}

/// One row of the results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// 1-based position in the session.
    pub ordinal: usize,
    /// Question text, truncated.
    pub question: String,
    /// Correct answer values, each truncated, in display order.
    pub correct_answers: Vec<String>,
    /// Whether the selected answers matched the correct ones exactly.
    pub passed: bool,
}

/// The scored outcome of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scorecard {
    pub rows: Vec<ResultRow>,
    pub correct: usize,
    pub wrong: usize,
}

impl Scorecard {
    /// Score `questions` in session order.
    pub fn build(questions: &[Question], widths: ReportWidths) -> Self {
        let rows: Vec<ResultRow> = questions
            .iter()
            .enumerate()
            .map(|(i, question)| ResultRow {
                ordinal: i + 1,
                question: truncate(question.text(), widths.question),
                correct_answers: question
                    .correct_answers()
                    .iter()
                    .map(|a| truncate(a.value(), widths.answer))
                    .collect(),
                passed: question.is_answered_correctly(),
            })
            .collect();

        let correct = rows.iter().filter(|r| r.passed).count();
        let wrong = rows.len() - correct;
        Self {
            rows,
            correct,
            wrong,
        }
    }

    pub fn total(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Answer;

    #[test]
    fn truncate_at_exact_width_keeps_text() {
        let text = "x".repeat(75);
        assert_eq!(truncate(&text, 75), text);
    }

    #[test]
    fn truncate_past_width_adds_marker() {
        let text = "y".repeat(76);
        let cut = truncate(&text, 75);
        assert_eq!(cut, format!("{}..", "y".repeat(75)));
        assert_eq!(truncate(&"z".repeat(200), 75).chars().count(), 77);
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("héllo wörld", 5), "héllo..");
        assert_eq!(truncate("", 5), "");
    }

    #[test]
    fn scorecard_counts_matches() {
        let mut right = Question::new(
            "a",
            "Right?",
            vec![Answer::new("yes", true), Answer::new("no", false)],
        );
        right.select_answers(&["1"]).unwrap();
        let mut wrong = Question::new(
            "b",
            "Wrong?",
            vec![Answer::new("yes", true), Answer::new("no", false)],
        );
        wrong.select_answers(&["2"]).unwrap();
        let skipped = Question::new("c", "Skipped?", vec![Answer::new("only", true)]);

        let card = Scorecard::build(&[right, wrong, skipped], ReportWidths::default());
        assert_eq!(card.total(), 3);
        assert_eq!(card.correct, 1);
        assert_eq!(card.wrong, 2);
        assert_eq!(card.rows[0].ordinal, 1);
        assert!(card.rows[0].passed);
        assert!(!card.rows[2].passed);
        assert_eq!(card.rows[1].correct_answers, vec!["yes"]);
    }

    #[test]
    fn scorecard_truncates_answers_only_when_long() {
        let long = "a".repeat(40);
        let question = Question::new(
            "long",
            &"q".repeat(80),
            vec![Answer::new(long.as_str(), true), Answer::new("short", true)],
        );
        let card = Scorecard::build(&[question], ReportWidths::default());
        let row = &card.rows[0];
        assert_eq!(row.question.chars().count(), 77);
        assert_eq!(row.correct_answers[0], format!("{}..", "a".repeat(35)));
        assert_eq!(row.correct_answers[1], "short");
    }
}
