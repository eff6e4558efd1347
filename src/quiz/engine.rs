use std::fmt;
use std::time::Duration;

use super::{QuestionRecord, QuizBank, QuizError, QuizResult, ScoreTiers};

/// Pause between answering and moving on, long enough to see the marked options.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuizPhase {
    NotStarted,
    InProgress,
    AwaitingAdvance,
    Finished,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuizPhase::NotStarted => "not started",
            QuizPhase::InProgress => "in progress",
            QuizPhase::AwaitingAdvance => "awaiting advance",
            QuizPhase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Deferred move to the next question, valid only for the answer that
/// produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAdvance {
    generation: u64,
    question_index: usize,
    delay: Duration,
}

impl PendingAdvance {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// What happened when an option was picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub selected: usize,
    pub correct_index: usize,
    pub is_correct: bool,
    pub pending: PendingAdvance,
}

/// Position in the quiz. Displays as `"Вопрос {number} из {total}"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based question number.
    pub number: usize,
    pub total: usize,
}

impl fmt::Display for QuizProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Вопрос {} из {}", self.number, self.total)
    }
}

pub struct QuizEngine {
    bank: QuizBank,
    phase: QuizPhase,
    current_index: usize,
    score: usize,
    generation: u64,
    last_answer: Option<AnswerOutcome>,
    advance_delay: Duration,
    tiers: ScoreTiers,
}

impl QuizEngine {
    pub fn new(bank: QuizBank) -> Self {
        QuizEngine {
            bank,
            phase: QuizPhase::NotStarted,
            current_index: 0,
            score: 0,
            generation: 0,
            last_answer: None,
            advance_delay: DEFAULT_ADVANCE_DELAY,
            tiers: ScoreTiers::default(),
        }
    }

    /// Engine over the bundled question bank.
    pub fn embedded() -> Result<Self, QuizError> {
        Ok(Self::new(QuizBank::embedded()?))
    }

    /// Set the delay carried by [`PendingAdvance`] tokens.
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    pub fn with_tiers(mut self, tiers: ScoreTiers) -> Self {
        self.tiers = tiers;
        self
    }

    pub fn bank(&self) -> &QuizBank {
        &self.bank
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Session counter, bumped by every `start` and `restart`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The answer awaiting advance, for marking the options.
    pub fn last_answer(&self) -> Option<&AnswerOutcome> {
        self.last_answer.as_ref()
    }

    /// Begin a new session from the first question. Allowed in any phase.
    pub fn start(&mut self) {
        self.generation += 1;
        self.current_index = 0;
        self.score = 0;
        self.last_answer = None;
        self.phase = if self.bank.is_empty() {
            QuizPhase::Finished
        } else {
            QuizPhase::InProgress
        };
        tracing::debug!(generation = self.generation, phase = %self.phase, "quiz started");
    }

    /// The question being asked.
    ///
    /// Running past the last question is how completion is detected: the
    /// engine moves to `Finished` and `None` is returned.
    pub fn current_question(&mut self) -> Option<&QuestionRecord> {
        if !matches!(
            self.phase,
            QuizPhase::InProgress | QuizPhase::AwaitingAdvance
        ) {
            return None;
        }
        if self.current_index >= self.bank.len() {
            self.finish();
            return None;
        }
        self.bank.get(self.current_index)
    }

    pub fn progress(&self) -> Option<QuizProgress> {
        match self.phase {
            QuizPhase::InProgress | QuizPhase::AwaitingAdvance
                if self.current_index < self.bank.len() =>
            {
                Some(QuizProgress {
                    number: self.current_index + 1,
                    total: self.bank.len(),
                })
            }
            _ => None,
        }
    }

    /// Answer the current question with option `selected`.
    ///
    /// Rejected answers leave score and phase untouched.
    pub fn submit_answer(&mut self, selected: usize) -> Result<AnswerOutcome, QuizError> {
        if self.phase != QuizPhase::InProgress {
            return Err(QuizError::InvalidState {
                operation: "submit an answer",
                phase: self.phase,
            });
        }

        let (correct_index, options) = match self.bank.get(self.current_index) {
            Some(question) => (question.correct_index, question.options.len()),
            None => {
                self.finish();
                return Err(QuizError::InvalidState {
                    operation: "submit an answer",
                    phase: self.phase,
                });
            }
        };
        if selected >= options {
            return Err(QuizError::OptionOutOfRange { selected, options });
        }

        let is_correct = selected == correct_index;
        if is_correct {
            self.score += 1;
        }
        self.phase = QuizPhase::AwaitingAdvance;

        let outcome = AnswerOutcome {
            selected,
            correct_index,
            is_correct,
            pending: PendingAdvance {
                generation: self.generation,
                question_index: self.current_index,
                delay: self.advance_delay,
            },
        };
        self.last_answer = Some(outcome);

        tracing::debug!(
            question = self.current_index,
            selected,
            is_correct,
            score = self.score,
            "quiz answer submitted"
        );
        Ok(outcome)
    }

    /// Move to the next question, or to `Finished` past the last one.
    pub fn advance(&mut self) -> Result<QuizPhase, QuizError> {
        if !matches!(
            self.phase,
            QuizPhase::InProgress | QuizPhase::AwaitingAdvance
        ) {
            return Err(QuizError::InvalidState {
                operation: "advance",
                phase: self.phase,
            });
        }

        self.current_index += 1;
        self.last_answer = None;
        if self.current_index < self.bank.len() {
            self.phase = QuizPhase::InProgress;
        } else {
            self.finish();
        }
        Ok(self.phase)
    }

    /// Apply a deferred advance if it still belongs to the answer on screen.
    pub fn advance_pending(&mut self, pending: PendingAdvance) -> Result<QuizPhase, QuizError> {
        let current = self.phase == QuizPhase::AwaitingAdvance
            && pending.generation == self.generation
            && pending.question_index == self.current_index;
        if !current {
            tracing::debug!(
                generation = pending.generation,
                question = pending.question_index,
                "ignoring stale quiz advance"
            );
            return Err(QuizError::StaleAdvance {
                generation: pending.generation,
                question_index: pending.question_index,
            });
        }
        self.advance()
    }

    pub fn result(&self) -> Result<QuizResult, QuizError> {
        if self.phase != QuizPhase::Finished {
            return Err(QuizError::InvalidState {
                operation: "show results",
                phase: self.phase,
            });
        }
        Ok(QuizResult::grade(self.score, self.bank.len(), &self.tiers))
    }

    /// Leave the results screen. The question bank is kept.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        if self.phase != QuizPhase::Finished {
            return Err(QuizError::InvalidState {
                operation: "restart",
                phase: self.phase,
            });
        }
        self.generation += 1;
        self.current_index = 0;
        self.score = 0;
        self.last_answer = None;
        self.phase = QuizPhase::NotStarted;
        Ok(())
    }

    fn finish(&mut self) {
        self.phase = QuizPhase::Finished;
        self.last_answer = None;
        tracing::debug!(score = self.score, total = self.bank.len(), "quiz finished");
    }
}
