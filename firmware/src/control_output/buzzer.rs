//! Piezo buzzer driven by a PWM channel at a fixed frequency.
//!
//! The timer is configured once for the beep frequency. Starting a tone sets
//! a 50 % duty cycle, stopping it sets zero.

use sum_quiz_control::tone::ToneGate;

use crate::system::hal::hal::PwmPin;
use crate::system::hal::pac::TIM12;
use crate::system::hal::pwm::{ComplementaryImpossible, Pwm};

pub type BuzzerPwm = Pwm<TIM12, 0, ComplementaryImpossible>;

pub struct Buzzer {
    pwm: BuzzerPwm,
    frequency_hz: u32,
    gate: &'static ToneGate,
}

pub struct Config {
    pub pwm: BuzzerPwm,
    pub frequency_hz: u32,
    pub gate: &'static ToneGate,
}

impl Buzzer {
    pub fn new(config: Config) -> Self {
        let mut pwm = config.pwm;
        pwm.set_duty(0);
        pwm.enable();
        Self {
            pwm,
            frequency_hz: config.frequency_hz,
            gate: config.gate,
        }
    }

    pub fn start(&mut self, frequency_hz: u32) {
        if frequency_hz != self.frequency_hz {
            defmt::warn!(
                "Requested tone frequency={}Hz, playing the configured {}Hz",
                frequency_hz,
                self.frequency_hz
            );
        }
        let duty = self.pwm.get_max_duty() / 2;
        self.pwm.set_duty(duty);
    }

    /// Silence the buzzer and allow the next tone to start.
    pub fn stop(&mut self) {
        self.pwm.set_duty(0);
        self.gate.release();
    }
}
