mod buttons;

pub use self::buttons::Buttons;
pub use self::buttons::Config as ButtonsConfig;
pub use self::buttons::Pins as ButtonsPins;

use sum_quiz_control::input::{Button, ButtonLines};

/// Button lines shared with the edge interrupts.
///
/// Every reading takes the lock, so the interrupts are held off only for the
/// duration of a single pin read.
pub struct LockedButtons<M> {
    buttons: M,
}

impl<M> LockedButtons<M>
where
    M: rtic::Mutex<T = Buttons>,
{
    pub fn new(buttons: M) -> Self {
        Self { buttons }
    }
}

impl<M> ButtonLines for LockedButtons<M>
where
    M: rtic::Mutex<T = Buttons>,
{
    fn is_pressed(&mut self, button: Button) -> bool {
        self.buttons.lock(|buttons| buttons.is_pressed(button))
    }
}
