mod buzzer;
mod display;

pub use self::buzzer::Buzzer;
pub use self::buzzer::Config as BuzzerConfig;
pub use self::display::Display;
