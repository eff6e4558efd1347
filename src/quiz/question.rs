use serde::{Deserialize, Serialize};

use super::QuizError;

const EMBEDDED_BANK: &str = include_str!("../../data/quiz.json");

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correct")]
    pub correct_index: usize,
}

/// Ordered, validated list of questions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizBank {
    questions: Vec<QuestionRecord>,
}

impl QuizBank {
    /// Every question's correct index must point at one of its options.
    pub fn new(questions: Vec<QuestionRecord>) -> Result<Self, QuizError> {
        for (index, question) in questions.iter().enumerate() {
            if question.correct_index >= question.options.len() {
                return Err(QuizError::InvalidQuestion {
                    index,
                    correct: question.correct_index,
                    options: question.options.len(),
                });
            }
        }
        Ok(QuizBank { questions })
    }

    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let questions: Vec<QuestionRecord> =
            serde_json::from_str(json).map_err(QuizError::Parse)?;
        Self::new(questions)
    }

    pub fn embedded() -> Result<Self, QuizError> {
        Self::from_json(EMBEDDED_BANK)
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&QuestionRecord> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
