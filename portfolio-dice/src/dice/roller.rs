use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniformly distributed die faces.
pub trait DieRoller {
    /// Returns a value in `1..=faces`.
    fn d(&mut self, faces: u32) -> u32;
}

#[derive(Debug)]
pub struct Roller {
    rng: StdRng,
}

impl Roller {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let rng = StdRng::from_os_rng();
        Roller { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        let rng = StdRng::seed_from_u64(seed);
        Roller { rng }
    }

    pub fn roll(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }

    #[cfg(test)]
    pub fn test_rng() -> Self {
        Self::from_seed(42)
    }
}

impl DieRoller for Roller {
    fn d(&mut self, faces: u32) -> u32 {
        self.roll(1, faces)
    }
}
