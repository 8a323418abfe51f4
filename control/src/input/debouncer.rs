/// Reports a line as active only after `N` consecutive active readings.
///
/// Release is reported immediately.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer<const N: usize> {
    history: [bool; N],
    index: usize,
}

impl<const N: usize> Debouncer<N> {
    pub const fn new() -> Self {
        Self {
            history: [false; N],
            index: 0,
        }
    }

    pub fn update(&mut self, value: bool) -> bool {
        self.history[self.index] = value;
        self.index = (self.index + 1) % N;
        self.history.iter().all(|x| *x)
    }
}

impl<const N: usize> Default for Debouncer<N> {
    fn default() -> Self {
        Self::new()
    }
}
