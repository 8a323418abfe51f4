use core::sync::atomic::{AtomicBool, Ordering};

/// Starts a tone that silences itself after `duration_ms`.
///
/// The call must not block. A request made while a tone is still playing is
/// dropped, nothing gets queued.
pub trait ToneEmitter {
    fn emit_tone(&mut self, frequency_hz: u32, duration_ms: u32);
}

impl<T: ToneEmitter + ?Sized> ToneEmitter for &mut T {
    fn emit_tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        (**self).emit_tone(frequency_hz, duration_ms);
    }
}

/// Marks a tone as playing between its start and its deferred stop.
///
/// The stop runs asynchronously to whoever starts tones, hence atomic.
#[derive(Debug)]
pub struct ToneGate {
    active: AtomicBool,
}

impl ToneGate {
    pub const fn new() -> Self {
        Self {
            active: AtomicBool::new(false),
        }
    }

    /// Returns `false` if a tone is already playing.
    pub fn try_acquire(&self) -> bool {
        self.active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn release(&self) {
        self.active.store(false, Ordering::Release);
    }
}

impl Default for ToneGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Emitter that hands tones to `start` only while the gate is free.
///
/// Whoever stops the tone later is responsible for releasing the gate. If
/// `start` fails, the gate is released right away.
pub struct GatedTone<'a, F> {
    gate: &'a ToneGate,
    start: F,
}

impl<'a, F, E> GatedTone<'a, F>
where
    F: FnMut(u32, u32) -> Result<(), E>,
{
    pub fn new(gate: &'a ToneGate, start: F) -> Self {
        Self { gate, start }
    }
}

impl<'a, F, E> ToneEmitter for GatedTone<'a, F>
where
    F: FnMut(u32, u32) -> Result<(), E>,
{
    fn emit_tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        if !self.gate.try_acquire() {
            return;
        }
        if (self.start)(frequency_hz, duration_ms).is_err() {
            self.gate.release();
        }
    }
}
