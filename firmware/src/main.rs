#![no_main]
#![no_std]

use sum_quiz_firmware as _; // Global logger and panicking behavior.

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0, EXTI1])]
mod app {
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use sum_quiz_control::config::Config;
    use sum_quiz_control::game::{Game, Peripherals, Step};
    use sum_quiz_control::input::{Button, ChordLatch};
    use sum_quiz_control::pacing::Pause;
    use sum_quiz_control::tone::{GatedTone, ToneGate};
    use sum_quiz_firmware::control_input::{Buttons, LockedButtons};
    use sum_quiz_firmware::control_output::{Buzzer, Display};
    use sum_quiz_firmware::random_generator::RandomGenerator;
    use sum_quiz_firmware::system::{Config as SystemConfig, System};

    // 1 kHz granularity for task scheduling.
    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>;

    #[shared]
    struct Shared {
        buttons: Buttons,
        #[lock_free]
        buzzer: Buzzer,
    }

    #[local]
    struct Local {
        game: Game<'static, RandomGenerator>,
        display: Display,
        tone_gate: &'static ToneGate,
    }

    #[init(
        local = [
            chord_latch: ChordLatch = ChordLatch::new(),
            tone_gate_storage: ToneGate = ToneGate::new(),
        ]
    )]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("Starting the firmware, initializing resources");

        let chord_latch: &'static ChordLatch = cx.local.chord_latch;
        let tone_gate: &'static ToneGate = cx.local.tone_gate_storage;
        let config = Config::default();

        let system = System::init(
            cx.core,
            cx.device,
            SystemConfig {
                chord_latch,
                tone_gate,
                beep: config.beep,
            },
        );
        let mono = system.mono;
        let game = Game::new(config, system.random_generator, chord_latch);

        defmt::info!("Handing over to the game loop");

        (
            Shared {
                buttons: system.buttons,
                buzzer: system.buzzer,
            },
            Local {
                game,
                display: system.display,
                tone_gate,
            },
            init::Monotonics(mono),
        )
    }

    #[task(binds = EXTI3, shared = [buttons], priority = 3)]
    fn button_a_edge(mut cx: button_a_edge::Context) {
        cx.shared.buttons.lock(|buttons| buttons.on_edge(Button::A));
    }

    #[task(binds = EXTI4, shared = [buttons], priority = 3)]
    fn button_b_edge(mut cx: button_b_edge::Context) {
        cx.shared.buttons.lock(|buttons| buttons.on_edge(Button::B));
    }

    #[task(shared = [buzzer], priority = 2)]
    fn start_tone(cx: start_tone::Context, frequency_hz: u32, duration_ms: u32) {
        let buzzer = cx.shared.buzzer;
        buzzer.start(frequency_hz);
        if stop_tone::spawn_after(u64::from(duration_ms).millis()).is_err() {
            defmt::warn!("Failed to schedule the end of the tone, silencing now");
            buzzer.stop();
        }
    }

    #[task(shared = [buzzer], priority = 2)]
    fn stop_tone(cx: stop_tone::Context) {
        cx.shared.buzzer.stop();
    }

    #[idle(local = [game, display, tone_gate], shared = [buttons])]
    fn idle(cx: idle::Context) -> ! {
        let game = cx.local.game;
        let mut peripherals = Peripherals {
            display: cx.local.display,
            tone: GatedTone::new(*cx.local.tone_gate, |frequency_hz, duration_ms| {
                start_tone::spawn(frequency_hz, duration_ms)
                    .map_err(|_| defmt::warn!("Failed to spawn a tone"))
            }),
            pause: BusyPause,
            buttons: LockedButtons::new(cx.shared.buttons),
        };

        game.introduce(&mut peripherals.display, &mut peripherals.pause);

        loop {
            let step = game.step(&mut peripherals);
            log_step(step);
        }
    }

    /// Spins on the monotonic timer, interrupts keep being served.
    struct BusyPause;

    impl Pause for BusyPause {
        fn pause_ms(&mut self, duration_ms: u32) {
            let until = monotonics::now() + u64::from(duration_ms).millis();
            while monotonics::now() < until {
                cortex_m::asm::nop();
            }
        }
    }

    fn log_step(step: Step) {
        match step {
            Step::Waiting => (),
            Step::Ignored(event) => defmt::debug!("Ignoring input={:?}", event),
            Step::SessionStarted(round) => {
                defmt::info!("Session started, presenting round={:?}", round);
            }
            Step::RoundPresented(round) => defmt::info!("Presenting round={:?}", round),
            Step::Answered { verdict, score } => {
                defmt::info!("Answered verdict={:?} score={:?}", verdict, score);
            }
            Step::ChordAborted { score } => {
                defmt::info!("Both buttons pressed, session aborted with score={:?}", score);
            }
        }
    }
}
