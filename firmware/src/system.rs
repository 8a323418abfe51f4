pub use stm32h7xx_hal as hal;

use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::prelude::*;
use sum_quiz_control::config::Beep;
use sum_quiz_control::input::ChordLatch;
use sum_quiz_control::tone::ToneGate;
use systick_monotonic::Systick;

use crate::control_input::{
    Buttons, ButtonsConfig as ControlInputButtonsConfig, ButtonsPins as ControlInputButtonsPins,
};
use crate::control_output::{BuzzerConfig as ControlOutputBuzzerConfig, Buzzer, Display};
use crate::random_generator::RandomGenerator;

pub struct System {
    pub mono: Systick<1000>,
    pub random_generator: RandomGenerator,
    pub buttons: Buttons,
    pub display: Display,
    pub buzzer: Buzzer,
}

pub struct Config {
    /// Raised by the button interrupts, consumed by the game.
    pub chord_latch: &'static ChordLatch,
    /// Held between the start and the deferred stop of a tone.
    pub tone_gate: &'static ToneGate,
    pub beep: Beep,
}

impl System {
    /// Initialize system abstraction.
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise. It also
    /// panics if the display does not respond.
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals, config: Config) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let system_frequency = ccdr.clocks.sys_ck();
        let mono = Systick::new(cp.SYST, system_frequency.raw());
        let random_generator =
            RandomGenerator::from_rng(dp.RNG.constrain(ccdr.peripheral.RNG, &ccdr.clocks));
        let buttons = {
            let mut syscfg = dp.SYSCFG;
            let mut exti = dp.EXTI;
            Buttons::new(
                ControlInputButtonsConfig {
                    pins: ControlInputButtonsPins {
                        button_a: pins.GPIO.PIN_D10.into_pull_up_input(),
                        button_b: pins.GPIO.PIN_D1.into_pull_up_input(),
                    },
                    chord_latch: config.chord_latch,
                },
                &mut syscfg,
                &mut exti,
            )
        };
        let display = {
            let scl = pins.GPIO.PIN_B7.into_alternate::<4>().set_open_drain();
            let sda = pins.GPIO.PIN_B8.into_alternate::<4>().set_open_drain();
            let i2c = dp
                .I2C1
                .i2c((scl, sda), 400.kHz(), ccdr.peripheral.I2C1, &ccdr.clocks);
            Display::new(i2c)
        };
        let buzzer = {
            // NOTE: PB14 is TIM12 channel 1 on alternate function 2.
            let pin = pins.GPIO.PIN_A8.into_alternate::<2>();
            let pwm = dp.TIM12.pwm(
                pin,
                config.beep.frequency_hz.Hz(),
                ccdr.peripheral.TIM12,
                &ccdr.clocks,
            );
            Buzzer::new(ControlOutputBuzzerConfig {
                pwm,
                frequency_hz: config.beep.frequency_hz,
                gate: config.tone_gate,
            })
        };

        Self {
            mono,
            random_generator,
            buttons,
            display,
            buzzer,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal andexternal memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    // NOTE: This requires cache management around all use of DMA.
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
