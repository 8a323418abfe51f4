/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Draw an integer from the inclusive range `min..=max`.
    fn random_int(&mut self, min: i32, max: i32) -> i32;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        (**self).random_int(min, max)
    }
}

const RAW_WORDS: u32 = 1 << 16;

/// Map a raw 16-bit random word onto the inclusive range `min..=max`.
///
/// Returns `None` for the few words past the last whole multiple of the
/// range width. The caller is expected to draw another word, which keeps the
/// result uniform. The range may be at most 65536 values wide.
pub fn int_in_range(raw: u16, min: i32, max: i32) -> Option<i32> {
    debug_assert!(min <= max);
    let span = max.abs_diff(min) + 1;
    debug_assert!(span <= RAW_WORDS);

    let accepted = RAW_WORDS - RAW_WORDS % span;
    let raw = u32::from(raw);
    if raw >= accepted {
        return None;
    }

    Some(min.wrapping_add((raw % span) as i32))
}
