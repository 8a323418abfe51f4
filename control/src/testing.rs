//! Fake collaborators recording what the game did to them.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::input::{Button, ButtonLines};
use crate::pacing::Pause;
use crate::random::RandomSource;
use crate::text::Display;
use crate::tone::ToneEmitter;

pub struct ScriptedRandom {
    values: VecDeque<i32>,
}

impl ScriptedRandom {
    pub fn new(values: &[i32]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.values.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        let value = self.values.pop_front().expect("random script exhausted");
        assert!(
            (min..=max).contains(&value),
            "scripted value {value} is outside of {min}..={max}"
        );
        value
    }
}

pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }
}

#[derive(Default)]
pub struct FakeButtons {
    pub a: bool,
    pub b: bool,
}

impl ButtonLines for FakeButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        match button {
            Button::A => self.a,
            Button::B => self.b,
        }
    }
}

#[derive(Default)]
pub struct FakeDisplay {
    pub shown: Vec<String>,
}

impl FakeDisplay {
    pub fn last(&self) -> Option<&str> {
        self.shown.last().map(String::as_str)
    }
}

impl Display for FakeDisplay {
    fn show(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }
}

#[derive(Default)]
pub struct FakeTone {
    pub tones: Vec<(u32, u32)>,
}

impl ToneEmitter for FakeTone {
    fn emit_tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        self.tones.push((frequency_hz, duration_ms));
    }
}

#[derive(Default)]
pub struct FakePause {
    pub pauses: Vec<u32>,
}

impl Pause for FakePause {
    fn pause_ms(&mut self, duration_ms: u32) {
        self.pauses.push(duration_ms);
    }
}
