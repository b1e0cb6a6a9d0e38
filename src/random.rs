use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};

/// Random source shared by the request handlers.
///
/// `Entropy` draws from the thread-local generator on every call. `Seeded`
/// keeps one `StdRng` behind a mutex so a whole process run replays the same
/// sequence.
#[derive(Clone, Debug, Default)]
pub enum RandomSource {
    #[default]
    Entropy,
    Seeded(Arc<Mutex<StdRng>>),
}

impl RandomSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RandomSource::Seeded(Arc::new(Mutex::new(StdRng::seed_from_u64(seed)))),
            None => RandomSource::Entropy,
        }
    }

    /// Runs `f` with a generator borrowed from this source.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut dyn rand::RngCore) -> T) -> T {
        match self {
            RandomSource::Entropy => f(&mut rand::thread_rng()),
            RandomSource::Seeded(rng) => {
                // A poisoned generator still holds a valid state.
                let mut guard = rng.lock().unwrap_or_else(|e| e.into_inner());
                f(&mut *guard)
            }
        }
    }

    /// Uniform draw in `[-spread, spread]`.
    pub fn uniform(&self, spread: f64) -> f64 {
        self.with_rng(|rng| rng.gen_range(-spread..=spread))
    }

    /// Uniform integer draw in `[-spread, spread]`.
    pub fn uniform_int(&self, spread: i64) -> i64 {
        self.with_rng(|rng| rng.gen_range(-spread..=spread))
    }
}
