use thiserror::Error;

use super::QuizPhase;

#[derive(Debug, Error)]
pub enum QuizError {
    /// The operation is not allowed in the engine's current phase.
    #[error("cannot {operation} while the quiz is {phase}")]
    InvalidState {
        operation: &'static str,
        phase: QuizPhase,
    },

    /// The selected option does not exist for the current question.
    #[error("option {selected} is out of range (question has {options} options)")]
    OptionOutOfRange { selected: usize, options: usize },

    /// A pending advance from an earlier answer or session arrived late.
    #[error("stale advance for question {question_index} of session {generation}")]
    StaleAdvance { generation: u64, question_index: usize },

    /// A question names a correct option it does not have.
    #[error("question {index} marks option {correct} correct but has {options} options")]
    InvalidQuestion {
        index: usize,
        correct: usize,
        options: usize,
    },

    /// The question bank is not a JSON array of questions.
    #[error("failed to parse quiz bank")]
    Parse(#[source] serde_json::Error),
}
