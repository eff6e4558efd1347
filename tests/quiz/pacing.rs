use std::sync::{Arc, Mutex};
use std::time::Duration;

use insect_atlas::{AdvanceTimer, InMemoryStore, QuizEngine, QuizPhase, Site};

use crate::support::quiz::bank_of;

#[test]
fn timers_walk_the_quiz_to_the_end() {
    let mut quiz = QuizEngine::new(bank_of(3)).with_advance_delay(Duration::from_millis(5));
    quiz.start();
    let quiz = Arc::new(Mutex::new(quiz));

    for _ in 0..3 {
        let outcome = quiz.lock().unwrap().submit_answer(0).unwrap();
        assert!(AdvanceTimer::spawn(quiz.clone(), outcome.pending).join());
    }

    let quiz = quiz.lock().unwrap();
    assert_eq!(quiz.phase(), QuizPhase::Finished);
    assert_eq!(quiz.result().unwrap().score, 3);
}

#[test]
fn timer_from_before_restart_is_ignored() {
    let mut quiz = QuizEngine::new(bank_of(1)).with_advance_delay(Duration::from_millis(200));
    quiz.start();
    let quiz = Arc::new(Mutex::new(quiz));

    let outcome = quiz.lock().unwrap().submit_answer(0).unwrap();
    let stale = AdvanceTimer::spawn(quiz.clone(), outcome.pending);

    {
        let mut quiz = quiz.lock().unwrap();
        quiz.advance().unwrap();
        quiz.restart().unwrap();
        quiz.start();
        quiz.submit_answer(0).unwrap();
    }

    assert!(!stale.join());
    assert_eq!(quiz.lock().unwrap().phase(), QuizPhase::AwaitingAdvance);
}

#[test]
fn timer_drives_a_shared_site() {
    let mut site = Site::embedded(InMemoryStore::new()).unwrap();
    site.quiz_mut().start();
    let site = Arc::new(Mutex::new(site));

    let outcome = site.lock().unwrap().quiz_mut().submit_answer(1).unwrap();
    let timer = AdvanceTimer::spawn(site.clone(), outcome.pending);
    assert!(timer.join());
    assert_eq!(site.lock().unwrap().quiz().current_index(), 1);
}
