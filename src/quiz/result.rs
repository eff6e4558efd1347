use std::fmt;

use serde::{Deserialize, Serialize};

/// Feedback tier picked from the final score percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultTier {
    Excellent,
    Good,
    TryAgain,
}

impl ResultTier {
    pub fn message(self) -> &'static str {
        match self {
            ResultTier::Excellent => "Отлично! Вы настоящий энтомолог!",
            ResultTier::Good => "Хорошо! Вы хорошо разбираетесь в насекомых!",
            ResultTier::TryAgain => "Попробуйте еще раз! Насекомые - это интересно!",
        }
    }
}

/// Inclusive lower bounds, in percent, of the upper two tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTiers {
    pub excellent_percent: u32,
    pub good_percent: u32,
}

impl Default for ScoreTiers {
    fn default() -> Self {
        ScoreTiers {
            excellent_percent: 80,
            good_percent: 60,
        }
    }
}

impl ScoreTiers {
    pub fn tier(&self, score: usize, total: usize) -> ResultTier {
        if total == 0 {
            return ResultTier::TryAgain;
        }
        // score / total >= p / 100, without rounding
        let scaled = score as u64 * 100;
        let total = total as u64;
        if scaled >= u64::from(self.excellent_percent) * total {
            ResultTier::Excellent
        } else if scaled >= u64::from(self.good_percent) * total {
            ResultTier::Good
        } else {
            ResultTier::TryAgain
        }
    }
}

/// Final score of a finished quiz. Displays as `"{score} из {total}"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub tier: ResultTier,
}

impl QuizResult {
    pub fn grade(score: usize, total: usize, tiers: &ScoreTiers) -> Self {
        QuizResult {
            score,
            total,
            tier: tiers.tier(score, total),
        }
    }

    pub fn message(&self) -> &'static str {
        self.tier.message()
    }

    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.score as f64 * 100.0 / self.total as f64
        }
    }
}

impl fmt::Display for QuizResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} из {}", self.score, self.total)
    }
}
