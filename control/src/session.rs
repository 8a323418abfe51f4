//! Score keeping and round lifecycle of a single play-through.
//!
//! A round can only exist while the session awaits an answer, this is
//! enforced by keeping it inside of that phase.

use crate::input::Button;
use crate::round::Round;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Idle,
    AwaitingAnswer,
    RoundEnded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Session {
    phase: Phase,
    score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Phase {
    Idle,
    AwaitingAnswer(Option<Round>),
    RoundEnded,
}

impl Session {
    pub const fn new() -> Self {
        Self {
            phase: Phase::Idle,
            score: 0,
        }
    }

    pub fn state(&self) -> State {
        match self.phase {
            Phase::Idle => State::Idle,
            Phase::AwaitingAnswer(_) => State::AwaitingAnswer,
            Phase::RoundEnded => State::RoundEnded,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_round(&self) -> Option<&Round> {
        match &self.phase {
            Phase::AwaitingAnswer(round) => round.as_ref(),
            _ => None,
        }
    }

    /// Begin a new play-through. Works from any state.
    pub fn start(&mut self) {
        self.score = 0;
        self.phase = Phase::AwaitingAnswer(None);
    }

    /// Make the round the one awaiting an answer.
    ///
    /// Returns `false` and drops the round if the session is not waiting for
    /// a new one.
    pub fn present(&mut self, round: Round) -> bool {
        match &mut self.phase {
            Phase::AwaitingAnswer(slot) if slot.is_none() => {
                *slot = Some(round);
                true
            }
            _ => false,
        }
    }

    /// Judge the button against the current round.
    ///
    /// A means "the displayed result is correct", B means it is not. A
    /// correct answer scores and clears the round so a new one can be
    /// presented. An incorrect one ends the session. Returns `None` when
    /// there is no round to answer.
    pub fn check_answer(&mut self, button: Button) -> Option<Verdict> {
        let round = self.current_round()?;

        let claims_correct = button == Button::A;
        if claims_correct == round.is_displayed_result_correct() {
            self.score = self.score.saturating_add(1);
            self.phase = Phase::AwaitingAnswer(None);
            Some(Verdict::Correct)
        } else {
            self.phase = Phase::RoundEnded;
            Some(Verdict::Incorrect)
        }
    }

    /// End the session without scoring, as a reaction to invalid input.
    ///
    /// Returns `false` if there was no round in progress.
    pub fn abort(&mut self) -> bool {
        if self.current_round().is_none() {
            return false;
        }
        self.phase = Phase::RoundEnded;
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
