use sum_quiz_control::input::{Button, ButtonLines, ChordLatch};

use crate::system::hal::gpio::{self, Edge, ExtiPin};
use crate::system::hal::pac::{EXTI, SYSCFG};

#[derive(Debug)]
pub struct Buttons {
    pins: Pins,
    chord_latch: &'static ChordLatch,
}

pub struct Config {
    pub pins: Pins,
    pub chord_latch: &'static ChordLatch,
}

#[derive(Debug, defmt::Format)]
pub struct Pins {
    pub button_a: ButtonAPin,
    pub button_b: ButtonBPin,
}

// NOTE: Both pins need their own EXTI line. PD3 fires EXTI3, PB4 fires EXTI4.
pub type ButtonAPin = gpio::gpiod::PD3<gpio::Input>;
pub type ButtonBPin = gpio::gpiob::PB4<gpio::Input>;

impl Buttons {
    pub fn new(config: Config, syscfg: &mut SYSCFG, exti: &mut EXTI) -> Self {
        let mut pins = config.pins;

        pins.button_a.make_interrupt_source(syscfg);
        pins.button_a.trigger_on_edge(exti, Edge::Falling);
        pins.button_a.enable_interrupt(exti);

        pins.button_b.make_interrupt_source(syscfg);
        pins.button_b.trigger_on_edge(exti, Edge::Falling);
        pins.button_b.enable_interrupt(exti);

        Self {
            pins,
            chord_latch: config.chord_latch,
        }
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::A => self.pins.button_a.is_low(),
            Button::B => self.pins.button_b.is_low(),
        }
    }

    /// To be called from the interrupt of the given button's falling edge.
    pub fn on_edge(&mut self, button: Button) {
        match button {
            Button::A => self.pins.button_a.clear_interrupt_pending_bit(),
            Button::B => self.pins.button_b.clear_interrupt_pending_bit(),
        }
        let a_pressed = self.pins.button_a.is_low();
        let b_pressed = self.pins.button_b.is_low();
        self.chord_latch.observe_edge(a_pressed, b_pressed);
    }
}

impl ButtonLines for Buttons {
    fn is_pressed(&mut self, button: Button) -> bool {
        Buttons::is_pressed(self, button)
    }
}
