use foresight_core::config::ExplorationMode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the exploration slot's noise.
#[derive(Debug)]
pub enum ExplorationSource {
    Random(StdRng),
    Disabled,
}

impl ExplorationSource {
    pub fn from_mode(mode: ExplorationMode) -> Self {
        match mode {
            ExplorationMode::Random => Self::Random(StdRng::from_entropy()),
            ExplorationMode::Seeded { seed } => Self::seeded(seed),
            ExplorationMode::Disabled => Self::Disabled,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::Random(StdRng::seed_from_u64(seed))
    }

    /// Next value in `[0, 1)`; always 0 when disabled.
    pub fn sample(&mut self) -> f64 {
        match self {
            Self::Random(rng) => rng.gen::<f64>(),
            Self::Disabled => 0.0,
        }
    }
}

impl Default for ExplorationSource {
    fn default() -> Self {
        Self::from_mode(ExplorationMode::Random)
    }
}
