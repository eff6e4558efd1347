#[path = "../support/mod.rs"]
mod support;

mod pacing;

use insect_atlas::{QuizEngine, QuizError, QuizPhase, ResultTier};
use support::quiz::bank_of;

#[test]
fn one_right_two_wrong_is_one_of_three() {
    support::init_tracing();
    let mut quiz = QuizEngine::new(bank_of(3));
    quiz.start();

    for selected in [0, 2, 3] {
        let outcome = quiz.submit_answer(selected).unwrap();
        quiz.advance_pending(outcome.pending).unwrap();
    }

    assert_eq!(quiz.phase(), QuizPhase::Finished);
    let result = quiz.result().unwrap();
    assert_eq!((result.score, result.total), (1, 3));
    assert_eq!(result.tier, ResultTier::TryAgain);
    assert_eq!(result.to_string(), "1 из 3");
}

#[test]
fn length_advances_finish_the_quiz() {
    for n in 1..=5 {
        let mut quiz = QuizEngine::new(bank_of(n));
        quiz.start();
        for _ in 0..n {
            quiz.advance().unwrap();
        }
        assert_eq!(quiz.phase(), QuizPhase::Finished);
        assert_eq!(quiz.result().unwrap().total, n);
    }
}

#[test]
fn tiers_over_a_five_question_bank() {
    let expectations = [
        (5, ResultTier::Excellent),
        (4, ResultTier::Excellent),
        (3, ResultTier::Good),
        (2, ResultTier::TryAgain),
        (0, ResultTier::TryAgain),
    ];

    for (correct, tier) in expectations {
        let mut quiz = QuizEngine::new(bank_of(5));
        quiz.start();
        for i in 0..5 {
            let selected = if i < correct { 0 } else { 1 };
            quiz.submit_answer(selected).unwrap();
            quiz.advance().unwrap();
        }
        assert_eq!(quiz.result().unwrap().tier, tier, "{} correct", correct);
    }
}

#[test]
fn misuse_never_corrupts_score() {
    let mut quiz = QuizEngine::new(bank_of(2));
    assert!(quiz.submit_answer(0).is_err());
    assert!(quiz.advance().is_err());

    quiz.start();
    quiz.submit_answer(0).unwrap();
    assert!(quiz.submit_answer(0).is_err());
    assert!(matches!(
        quiz.submit_answer(9).unwrap_err(),
        QuizError::InvalidState { .. }
    ));
    quiz.advance().unwrap();
    assert!(matches!(
        quiz.submit_answer(9).unwrap_err(),
        QuizError::OptionOutOfRange { selected: 9, options: 4 }
    ));
    quiz.submit_answer(0).unwrap();
    quiz.advance().unwrap();

    assert!(quiz.advance().is_err());
    assert!(quiz.submit_answer(0).is_err());
    assert_eq!(quiz.result().unwrap().score, 2);
}

#[test]
fn restart_then_start_runs_a_fresh_session() {
    let mut quiz = QuizEngine::new(bank_of(1));
    quiz.start();
    quiz.submit_answer(0).unwrap();
    quiz.advance().unwrap();
    let first = quiz.generation();

    quiz.restart().unwrap();
    assert_eq!(quiz.phase(), QuizPhase::NotStarted);
    assert!(quiz.result().is_err());

    quiz.start();
    assert!(quiz.generation() > first);
    assert_eq!(quiz.score(), 0);
    assert_eq!(quiz.current_question().unwrap().question, "Q1");
}
