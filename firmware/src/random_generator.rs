use stm32h7xx_hal::rng::{ErrorKind, Rng};
use sum_quiz_control::random::{self, RandomSource};

pub struct RandomGenerator {
    rng: Rng,
}

impl RandomGenerator {
    pub fn from_rng(rng: Rng) -> Self {
        Self { rng }
    }

    pub fn u16(&mut self) -> Result<u16, ErrorKind> {
        use daisy::hal::rng::RngCore;
        RngCore::<u16>::gen(&mut self.rng)
    }
}

impl RandomSource for RandomGenerator {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        // NOTE: Seed and clock errors of the RNG peripheral are transient,
        // it recovers on its own after the faulty word is discarded. Words
        // that would bias the range are discarded the same way.
        loop {
            match self.u16() {
                Ok(raw) => {
                    if let Some(value) = random::int_in_range(raw, min, max) {
                        return value;
                    }
                }
                Err(error) => {
                    defmt::warn!("RNG failed, retrying: {:?}", defmt::Debug2Format(&error));
                }
            }
        }
    }
}
