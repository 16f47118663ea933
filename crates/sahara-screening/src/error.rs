use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreeningError {
    #[error("incomplete answer sheet, missing questions: {}", format_questions(.missing))]
    Incomplete {
        /// Question numbers (1..=20) with no answer, sorted ascending.
        missing: Vec<u8>,
    },

    #[error("question number {0} is out of range (expected 1..=20)")]
    QuestionOutOfRange(u8),

    #[error("question {0} was answered more than once")]
    DuplicateAnswer(u8),
}

fn format_questions(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
