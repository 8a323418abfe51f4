//! Generation of a single quiz question.
//!
//! A round shows `a + b = result` where the result is either the true sum or
//! a sum skewed by a small offset. The offset is drawn from `-2..=2`, so a
//! round flagged as incorrect may still show the true sum. Such a round is
//! judged by its flag, not by the arithmetic.

use core::fmt;

use crate::random::RandomSource;

pub const OPERAND_MIN: i32 = 1;
pub const OPERAND_MAX: i32 = 10;

pub const SKEW_MIN: i32 = -2;
pub const SKEW_MAX: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Round {
    operand_a: i32,
    operand_b: i32,
    displayed_result: i32,
    is_displayed_result_correct: bool,
}

impl Round {
    pub fn new(
        operand_a: i32,
        operand_b: i32,
        displayed_result: i32,
        is_displayed_result_correct: bool,
    ) -> Self {
        Self {
            operand_a,
            operand_b,
            displayed_result,
            is_displayed_result_correct,
        }
    }

    pub fn generate<R: RandomSource>(random: &mut R) -> Self {
        let operand_a = random.random_int(OPERAND_MIN, OPERAND_MAX);
        let operand_b = random.random_int(OPERAND_MIN, OPERAND_MAX);
        let is_displayed_result_correct = random.random_int(0, 1) == 1;

        let sum = operand_a + operand_b;
        let displayed_result = if is_displayed_result_correct {
            sum
        } else {
            sum + random.random_int(SKEW_MIN, SKEW_MAX)
        };

        Self::new(
            operand_a,
            operand_b,
            displayed_result,
            is_displayed_result_correct,
        )
    }

    pub fn operand_a(&self) -> i32 {
        self.operand_a
    }

    pub fn operand_b(&self) -> i32 {
        self.operand_b
    }

    pub fn sum(&self) -> i32 {
        self.operand_a + self.operand_b
    }

    pub fn displayed_result(&self) -> i32 {
        self.displayed_result
    }

    pub fn is_displayed_result_correct(&self) -> bool {
        self.is_displayed_result_correct
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {} = {}",
            self.operand_a, self.operand_b, self.displayed_result
        )
    }
}
