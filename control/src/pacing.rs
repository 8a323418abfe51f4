/// Blocking wait used to pace the game.
///
/// The game runs in a single polling loop with no other work to do, so all
/// feedback delays simply hold the loop.
pub trait Pause {
    fn pause_ms(&mut self, duration_ms: u32);
}

impl<T: Pause + ?Sized> Pause for &mut T {
    fn pause_ms(&mut self, duration_ms: u32) {
        (**self).pause_ms(duration_ms);
    }
}
