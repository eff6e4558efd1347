//! Quiz Engine: a small state machine over a fixed question bank.
//!
//! ```text
//! NotStarted --start--> InProgress --submit_answer--> AwaitingAdvance
//!                           ^                               |
//!                           +---------- advance ------------+
//!                                                           |
//! NotStarted <--restart-- Finished <--advance (past end)----+
//! ```
//!
//! After an answer the presentation layer shows which option was right,
//! then hands the returned [`PendingAdvance`] back (directly or through an
//! [`AdvanceTimer`]). Tokens from an earlier session are rejected.

mod engine;
mod error;
mod question;
mod result;
mod timer;

pub use engine::{
    AnswerOutcome, PendingAdvance, QuizEngine, QuizPhase, QuizProgress, DEFAULT_ADVANCE_DELAY,
};
pub use error::QuizError;
pub use question::{QuestionRecord, QuizBank};
pub use result::{QuizResult, ResultTier, ScoreTiers};
pub use timer::{AdvanceTarget, AdvanceTimer};
