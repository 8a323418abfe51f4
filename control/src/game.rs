//! The quiz state machine.
//!
//! [`Game::step`] performs one iteration of the polling loop: it either
//! waits for the player to start, presents a new round, or samples the
//! buttons and reacts to the answer. Feedback pauses block inside the step.

use core::fmt::Write as _;

use heapless::String;

use crate::config::Config;
use crate::input::{Button, ButtonEvent, ButtonLines, ChordLatch, InputSampler};
use crate::pacing::Pause;
use crate::random::RandomSource;
use crate::round::Round;
use crate::session::{Session, State, Verdict};
use crate::text::Display;
use crate::tone::ToneEmitter;

pub const TITLE: &str = "SUM QUIZ";
pub const INSTRUCTIONS: &str = "A FOR CORRECT\nB FOR WRONG\nPress A!";
pub const CORRECT: &str = "Correct!";
pub const CHORD_WARNING: &str = "Don't press A\nand B together!";
pub const RESTART_PROMPT: &str = "Press A\nto restart!";

// NOTE: Fits the longest messages, "10 + 10 = 22" and the wrong answer
// report with a score of `u32::MAX`.
const MESSAGE_CAPACITY: usize = 32;

/// Everything the game talks to.
pub struct Peripherals<D, T, P, L> {
    pub display: D,
    pub tone: T,
    pub pause: P,
    pub buttons: L,
}

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    Waiting,
    /// Input that means nothing in the current state.
    Ignored(ButtonEvent),
    SessionStarted(Round),
    RoundPresented(Round),
    Answered { verdict: Verdict, score: u32 },
    ChordAborted { score: u32 },
}

pub struct Game<'a, R> {
    session: Session,
    sampler: InputSampler<'a>,
    random: R,
    config: Config,
}

impl<'a, R: RandomSource> Game<'a, R> {
    pub fn new(config: Config, random: R, chord_latch: &'a ChordLatch) -> Self {
        Self {
            session: Session::new(),
            sampler: InputSampler::new(chord_latch, config.timing.settle_ms),
            random,
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Show the title and then the instructions.
    pub fn introduce<D: Display, P: Pause>(&mut self, display: &mut D, pause: &mut P) {
        display.show(TITLE);
        pause.pause_ms(self.config.timing.splash_ms);
        display.show(INSTRUCTIONS);
    }

    pub fn step<D, T, P, L>(&mut self, peripherals: &mut Peripherals<D, T, P, L>) -> Step
    where
        D: Display,
        T: ToneEmitter,
        P: Pause,
        L: ButtonLines,
    {
        match self.session.state() {
            State::Idle | State::RoundEnded => self.await_start(peripherals),
            State::AwaitingAnswer if self.session.current_round().is_none() => {
                Step::RoundPresented(self.present_round(&mut peripherals.display))
            }
            State::AwaitingAnswer => self.await_answer(peripherals),
        }
    }

    fn await_start<D, T, P, L>(&mut self, peripherals: &mut Peripherals<D, T, P, L>) -> Step
    where
        D: Display,
        P: Pause,
        L: ButtonLines,
    {
        match self.sampler.sample(&mut peripherals.buttons, &mut peripherals.pause) {
            ButtonEvent::None => Step::Waiting,
            ButtonEvent::PressA => {
                self.session.start();
                Step::SessionStarted(self.present_round(&mut peripherals.display))
            }
            event => Step::Ignored(event),
        }
    }

    fn present_round<D: Display>(&mut self, display: &mut D) -> Round {
        let round = Round::generate(&mut self.random);
        self.session.present(round);

        display.show(&round_message(&round));

        round
    }

    fn await_answer<D, T, P, L>(&mut self, peripherals: &mut Peripherals<D, T, P, L>) -> Step
    where
        D: Display,
        T: ToneEmitter,
        P: Pause,
        L: ButtonLines,
    {
        match self.sampler.sample(&mut peripherals.buttons, &mut peripherals.pause) {
            ButtonEvent::None => Step::Waiting,
            ButtonEvent::Chord => self.abort(peripherals),
            ButtonEvent::PressA => self.answer(Button::A, peripherals),
            ButtonEvent::PressB => self.answer(Button::B, peripherals),
        }
    }

    fn answer<D, T, P, L>(
        &mut self,
        button: Button,
        peripherals: &mut Peripherals<D, T, P, L>,
    ) -> Step
    where
        D: Display,
        T: ToneEmitter,
        P: Pause,
    {
        let Some(verdict) = self.session.check_answer(button) else {
            return Step::Waiting;
        };
        let score = self.session.score();
        let timing = &self.config.timing;

        match verdict {
            Verdict::Correct => {
                peripherals.display.show(CORRECT);
                peripherals.pause.pause_ms(timing.correct_feedback_ms);
            }
            Verdict::Incorrect => {
                peripherals.display.show(&wrong_answer_message(score));

                let beep = &self.config.beep;
                peripherals.tone.emit_tone(beep.frequency_hz, beep.duration_ms);
                peripherals.pause.pause_ms(timing.wrong_feedback_ms);

                peripherals.display.show(RESTART_PROMPT);
            }
        }

        Step::Answered { verdict, score }
    }

    fn abort<D, T, P, L>(&mut self, peripherals: &mut Peripherals<D, T, P, L>) -> Step
    where
        D: Display,
        P: Pause,
    {
        self.session.abort();

        peripherals.display.show(CHORD_WARNING);
        peripherals.pause.pause_ms(self.config.timing.chord_warning_ms);
        peripherals.display.show(RESTART_PROMPT);

        Step::ChordAborted {
            score: self.session.score(),
        }
    }
}

fn round_message(round: &Round) -> String<MESSAGE_CAPACITY> {
    let mut text = String::new();
    write!(text, "{}", round).ok();
    text
}

fn wrong_answer_message(score: u32) -> String<MESSAGE_CAPACITY> {
    let mut text = String::new();
    write!(text, "Wrong!\nScore: {}", score).ok();
    text
}
