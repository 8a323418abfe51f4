#![no_main]
#![no_std]

use core::cell::RefCell;
use core::fmt::Write as _;

use cortex_m::interrupt::Mutex;
use cortex_m::peripheral::NVIC;
use heapless::String;
use stm32h7xx_hal::pac::{interrupt, Interrupt};

use sum_quiz_control::config::Beep;
use sum_quiz_control::input::{Button, ChordLatch};
use sum_quiz_control::random::RandomSource;
use sum_quiz_control::round::{Round, SKEW_MIN};
use sum_quiz_control::text::Display as _;
use sum_quiz_control::tone::ToneGate;
use sum_quiz_firmware as _;
use sum_quiz_firmware::control_input::Buttons;
use sum_quiz_firmware::system::{Config as SystemConfig, System};

const CYCLES_PER_MS: u32 = 480_000;

struct Statistics {
    buttons: [ButtonStatistics; 2],
    chords: u32,
    rounds: RoundStatistics,
}

impl Statistics {
    fn new() -> Self {
        Self {
            buttons: [ButtonStatistics::new(), ButtonStatistics::new()],
            chords: 0,
            rounds: RoundStatistics::new(),
        }
    }

    fn sample(&mut self, buttons: [bool; 2], chord: bool) {
        for (statistics, value) in self.buttons.iter_mut().zip(buttons) {
            statistics.sample(value);
        }
        if chord {
            self.chords += 1;
        }
    }

    fn summary(&self) -> String<120> {
        let mut text = String::new();
        let _ = write!(
            text,
            "A {} {}\nB {} {}\nChords {}\nRounds {}\nCorrect {}%\nLast {}",
            self.buttons[0].value as u8,
            self.buttons[0].triggered,
            self.buttons[1].value as u8,
            self.buttons[1].triggered,
            self.chords,
            self.rounds.total,
            self.rounds.correct_percent(),
            self.rounds.last.map(|round| round.displayed_result()).unwrap_or(0),
        );
        text
    }
}

impl defmt::Format for Statistics {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "\x1B[2J\x1b[1;1H");

        defmt::write!(fmt, "Button\tValue\tTrig(total)\n");
        for (i, button) in self.buttons.iter().enumerate() {
            defmt::write!(fmt, "{}\t{}\t{}\n", i + 1, button.value, button.triggered);
        }

        defmt::write!(fmt, "\nChords\t{}\n", self.chords);

        defmt::write!(fmt, "\nRounds\tCorrect\tSkew(-2..=2)\n");
        defmt::write!(
            fmt,
            "{}\t{}%\t{}\n",
            self.rounds.total,
            self.rounds.correct_percent(),
            self.rounds.skews
        );
    }
}

struct ButtonStatistics {
    value: bool,
    triggered: u32,
}

impl ButtonStatistics {
    fn new() -> Self {
        Self {
            value: false,
            triggered: 0,
        }
    }

    fn sample(&mut self, value: bool) {
        if !self.value && value {
            self.triggered += 1;
        }
        self.value = value;
    }
}

struct RoundStatistics {
    total: u32,
    correct: u32,
    skews: [u32; 5],
    last: Option<Round>,
}

impl RoundStatistics {
    fn new() -> Self {
        Self {
            total: 0,
            correct: 0,
            skews: [0; 5],
            last: None,
        }
    }

    fn sample(&mut self, random: &mut impl RandomSource) {
        let round = Round::generate(random);
        self.total += 1;
        if round.is_displayed_result_correct() {
            self.correct += 1;
        } else {
            let skew = round.displayed_result() - round.sum();
            self.skews[(skew - SKEW_MIN) as usize] += 1;
        }
        self.last = Some(round);
    }

    fn correct_percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            self.correct * 100 / self.total
        }
    }
}

static BUTTONS: Mutex<RefCell<Option<Buttons>>> = Mutex::new(RefCell::new(None));
static CHORD_LATCH: ChordLatch = ChordLatch::new();
static TONE_GATE: ToneGate = ToneGate::new();

#[cortex_m_rt::entry]
fn main() -> ! {
    defmt::println!("Running diagnostics");

    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = daisy::pac::Peripherals::take().unwrap();
    let beep = Beep::default();
    let system = System::init(
        cp,
        dp,
        SystemConfig {
            chord_latch: &CHORD_LATCH,
            tone_gate: &TONE_GATE,
            beep,
        },
    );

    let mut random_generator = system.random_generator;
    let mut display = system.display;
    let mut buzzer = system.buzzer;

    cortex_m::interrupt::free(|cs| {
        BUTTONS.borrow(cs).replace(Some(system.buttons));
    });
    unsafe {
        NVIC::unmask(Interrupt::EXTI3);
        NVIC::unmask(Interrupt::EXTI4);
    }

    display.show("DIAGNOSTICS\nPress A to beep");

    let mut statistics = Statistics::new();

    loop {
        for _ in 0..100 {
            let values = cortex_m::interrupt::free(|cs| {
                BUTTONS
                    .borrow(cs)
                    .borrow()
                    .as_ref()
                    .map(|buttons| [buttons.is_pressed(Button::A), buttons.is_pressed(Button::B)])
                    .unwrap_or_default()
            });
            let was_pressed = statistics.buttons[0].value;
            statistics.sample(values, CHORD_LATCH.take());

            if values[0] && !was_pressed && TONE_GATE.try_acquire() {
                buzzer.start(beep.frequency_hz);
                cortex_m::asm::delay(beep.duration_ms * CYCLES_PER_MS);
                buzzer.stop();
            }

            cortex_m::asm::delay(CYCLES_PER_MS);
        }

        statistics.rounds.sample(&mut random_generator);
        display.show(&statistics.summary());
        defmt::println!("{}", statistics);
    }
}

fn on_edge(button: Button) {
    cortex_m::interrupt::free(|cs| {
        if let Some(buttons) = BUTTONS.borrow(cs).borrow_mut().as_mut() {
            buttons.on_edge(button);
        }
    });
}

#[interrupt]
fn EXTI3() {
    on_edge(Button::A);
}

#[interrupt]
fn EXTI4() {
    on_edge(Button::B);
}
