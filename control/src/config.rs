#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub timing: Timing,
    pub beep: Beep,
}

/// Durations of all the blocking pauses, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Wait after any detected press, covers contact bounce.
    pub settle_ms: u32,
    pub correct_feedback_ms: u32,
    pub wrong_feedback_ms: u32,
    pub chord_warning_ms: u32,
    pub splash_ms: u32,
}

/// The single tone played on a wrong answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Beep {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            settle_ms: 300,
            correct_feedback_ms: 1000,
            wrong_feedback_ms: 2000,
            chord_warning_ms: 2000,
            splash_ms: 2000,
        }
    }
}

impl Default for Beep {
    fn default() -> Self {
        Self {
            frequency_hz: 4000,
            duration_ms: 500,
        }
    }
}
