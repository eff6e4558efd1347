use insect_atlas::{QuestionRecord, QuizBank};

pub fn question(text: &str, correct_index: usize) -> QuestionRecord {
    QuestionRecord {
        question: text.to_string(),
        options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        correct_index,
    }
}

/// `n` questions whose correct option is always index 0.
pub fn bank_of(n: usize) -> QuizBank {
    QuizBank::new((0..n).map(|i| question(&format!("Q{}", i + 1), 0)).collect()).unwrap()
}
