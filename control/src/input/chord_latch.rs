//! One-shot flag raised when both buttons are seen pressed at once.
//!
//! The flag is raised from the button edge interrupt and consumed by the
//! polling loop. Both sides use single atomic operations, so a chord raised
//! while the loop is consuming the previous one is never lost nor reported
//! twice.

use core::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
pub struct ChordLatch {
    latched: AtomicBool,
}

impl ChordLatch {
    pub const fn new() -> Self {
        Self {
            latched: AtomicBool::new(false),
        }
    }

    /// To be called on an edge of either line, with the current line states.
    pub fn observe_edge(&self, a_pressed: bool, b_pressed: bool) {
        if a_pressed && b_pressed {
            self.latched.store(true, Ordering::Release);
        }
    }

    /// Test and clear.
    pub fn take(&self) -> bool {
        self.latched.swap(false, Ordering::AcqRel)
    }
}

impl Default for ChordLatch {
    fn default() -> Self {
        Self::new()
    }
}
