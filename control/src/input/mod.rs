mod chord_latch;
mod debouncer;

pub use self::chord_latch::ChordLatch;

use self::debouncer::Debouncer;

use crate::pacing::Pause;

pub const BUTTONS: usize = 2;

/// Consecutive pressed readings needed before a line counts as pressed.
pub const DEBOUNCE_SAMPLES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Claims the displayed result is correct. Also starts the game.
    A,
    /// Claims the displayed result is wrong.
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    None,
    PressA,
    PressB,
    Chord,
}

/// Raw access to the two button lines.
///
/// Implementations translate the active-low electrical level, `true` always
/// means pressed.
pub trait ButtonLines {
    fn is_pressed(&mut self, button: Button) -> bool;
}

impl<T: ButtonLines + ?Sized> ButtonLines for &mut T {
    fn is_pressed(&mut self, button: Button) -> bool {
        (**self).is_pressed(button)
    }
}

#[derive(Debug)]
pub struct InputSampler<'a> {
    chord_latch: &'a ChordLatch,
    debouncers: [Debouncer<DEBOUNCE_SAMPLES>; BUTTONS],
    settle_ms: u32,
}

impl<'a> InputSampler<'a> {
    pub fn new(chord_latch: &'a ChordLatch, settle_ms: u32) -> Self {
        Self {
            chord_latch,
            debouncers: [Debouncer::new(), Debouncer::new()],
            settle_ms,
        }
    }

    /// Read both lines once and classify the reading.
    ///
    /// Any reported press is followed by the settle pause before this
    /// returns, so the caller never sees the bounce of the same contact.
    pub fn sample<L, P>(&mut self, lines: &mut L, pause: &mut P) -> ButtonEvent
    where
        L: ButtonLines,
        P: Pause,
    {
        let a = self.debouncers[0].update(lines.is_pressed(Button::A));
        let b = self.debouncers[1].update(lines.is_pressed(Button::B));

        // NOTE: The latch must be consumed even when the lines alone already
        // show the chord. Otherwise it would abort the next round.
        let latched = self.chord_latch.take();

        let event = match (a, b) {
            _ if latched => ButtonEvent::Chord,
            (true, true) => ButtonEvent::Chord,
            (true, false) => ButtonEvent::PressA,
            (false, true) => ButtonEvent::PressB,
            (false, false) => ButtonEvent::None,
        };

        if event != ButtonEvent::None {
            pause.pause_ms(self.settle_ms);
        }

        event
    }
}
