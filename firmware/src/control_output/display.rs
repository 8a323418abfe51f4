//! SSD1306 128×64 OLED connected over I2C.
//!
//! Text is laid out by the game's character grid and drawn with a 5×8 font,
//! one grid row per 8 pixels.

use display_interface::DisplayError;
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};
use sum_quiz_control::text;

use crate::system::hal::i2c::I2c;
use crate::system::hal::pac::I2C1;

const LEFT_MARGIN: i32 = 2;
const ROW_HEIGHT: i32 = 8;

type Driver = Ssd1306<
    I2CInterface<I2c<I2C1>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

pub struct Display {
    driver: Driver,
}

impl Display {
    /// Initialize the panel.
    ///
    /// # Panics
    ///
    /// Panics if the panel does not respond.
    pub fn new(i2c: I2c<I2C1>) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let mut driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        driver.init().unwrap();
        Self { driver }
    }

    fn draw(&mut self, text: &str) -> Result<(), DisplayError> {
        self.driver.clear_buffer();

        let style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);
        for (row, line) in text::lines(text).enumerate() {
            let position = Point::new(LEFT_MARGIN, row as i32 * ROW_HEIGHT);
            Text::with_baseline(line, position, style, Baseline::Top).draw(&mut self.driver)?;
        }

        self.driver.flush()
    }
}

impl text::Display for Display {
    fn show(&mut self, text: &str) {
        if let Err(error) = self.draw(text) {
            defmt::warn!(
                "Failed to draw on the display: {:?}",
                defmt::Debug2Format(&error)
            );
        }
    }
}
