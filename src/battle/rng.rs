use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Anything that can hand the engine uniform samples in `[0, 1)`.
///
/// The `reason` names what the sample is for, which makes scripted test
/// sequences readable in trace output.
pub trait RandomSource {
    fn next_unit(&mut self, reason: &str) -> f64;
}

#[derive(Debug, Clone)]
enum Source {
    Seeded(StdRng),
    Scripted { outcomes: Vec<f64>, index: usize },
}

/// The random source battles draw from: either a seeded generator or a fixed
/// script of outcomes for tests.
#[derive(Debug, Clone)]
pub struct TurnRng {
    source: Source,
}

impl TurnRng {
    /// Replays `outcomes` in order. Panics once the script runs out.
    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        Self {
            source: Source::Scripted { outcomes, index: 0 },
        }
    }

    pub fn new_seeded(seed: u64) -> Self {
        Self {
            source: Source::Seeded(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn new_random() -> Self {
        Self {
            source: Source::Seeded(StdRng::from_os_rng()),
        }
    }
}

impl RandomSource for TurnRng {
    fn next_unit(&mut self, reason: &str) -> f64 {
        let outcome = match &mut self.source {
            Source::Seeded(rng) => rng.random::<f64>(),
            Source::Scripted { outcomes, index } => {
                if *index >= outcomes.len() {
                    panic!(
                        "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                        reason
                    );
                }
                let outcome = outcomes[*index];
                *index += 1;
                outcome
            }
        };

        tracing::trace!(outcome, reason, "rng consumed");
        outcome
    }
}
