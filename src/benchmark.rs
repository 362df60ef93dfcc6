//! Estimator accuracy benchmark.
//!
//! Pits the Hamming estimator against exact angular similarity on random
//! vector pairs: one projection matrix is generated up front, then each
//! trial samples a fresh pair, encodes both vectors against the shared
//! matrix, and records how far the estimate lands from the reference.
//!
//! With K signature bits the estimate is a mean of K Bernoulli trials, so
//! the per-trial error shrinks like 1/sqrt(K); doubling the bits four
//! times should roughly quarter the average error. [`run_benchmark`] makes
//! that trend measurable.

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::distance::angular_similarity;
use crate::error::Result;
use crate::projection::generate_random_projection;
use crate::signature::{compute_signature, hash_similarity};

/// One trial: exact similarity, estimated similarity, and their gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRecord {
    /// Exact angular similarity of the sampled pair.
    pub angular: f32,
    /// Hamming-estimated similarity of the pair's signatures.
    pub estimated: f32,
    /// `|angular - estimated|`.
    pub abs_diff: f32,
}

/// Results of one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// Dimensionality of the sampled vectors.
    pub dim: usize,
    /// Signature length in bits.
    pub bits: usize,
    /// Per-trial log, in execution order.
    pub trials: Vec<TrialRecord>,
    /// Mean of `abs_diff` across trials (0.0 for an empty run).
    pub average_diff: f32,
    /// Wall-clock duration of the whole run.
    pub elapsed: Duration,
}

impl BenchmarkReport {
    /// Largest per-trial error (0.0 for an empty run).
    pub fn max_diff(&self) -> f32 {
        self.trials.iter().map(|t| t.abs_diff).fold(0.0, f32::max)
    }

    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "dim={}, bits={}: {} trials, avg diff={:.4}, max diff={:.4}, elapsed={:.3}s",
            self.dim,
            self.bits,
            self.trials.len(),
            self.average_diff,
            self.max_diff(),
            self.elapsed.as_secs_f64()
        )
    }
}

/// Run `trials` estimator-accuracy trials and collect a report.
///
/// One projection matrix is generated from the seeded rng and reused for
/// the whole run; degenerate `dim`/`bits` surface as the underlying
/// [`SketchError::InvalidDimension`](crate::SketchError::InvalidDimension)
/// rather than being caught here. Each trial samples two independent
/// vectors with entries uniform in [-1, 1], encodes both, and records the
/// exact similarity, the estimate, and their absolute difference. One
/// `debug!` line is emitted per trial and one `info!` summary per run.
///
/// The loop is strictly sequential and the mean is a plain sum-over-count
/// reduction, so any execution order would agree within float tolerance.
/// Equal seeds produce identical trial logs.
pub fn run_benchmark(dim: usize, bits: usize, trials: usize, seed: u64) -> Result<BenchmarkReport> {
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(seed);

    let projection = generate_random_projection(dim, bits, &mut rng)?;

    let mut records = Vec::with_capacity(trials);
    let mut diff_sum = 0.0f64;

    for trial in 0..trials {
        let a = sample_vector(dim, &mut rng);
        let b = sample_vector(dim, &mut rng);

        let sig_a = compute_signature(&projection, &a)?;
        let sig_b = compute_signature(&projection, &b)?;

        let estimated = hash_similarity(&sig_a, &sig_b)?;
        let angular = angular_similarity(&a, &b)?;
        let abs_diff = (angular - estimated).abs();

        debug!(
            "trial {}: angular={:.4} estimated={:.4} diff={:.4}",
            trial, angular, estimated, abs_diff
        );

        diff_sum += f64::from(abs_diff);
        records.push(TrialRecord {
            angular,
            estimated,
            abs_diff,
        });
    }

    let average_diff = if records.is_empty() {
        0.0
    } else {
        (diff_sum / records.len() as f64) as f32
    };

    let report = BenchmarkReport {
        dim,
        bits,
        trials: records,
        average_diff,
        elapsed: start.elapsed(),
    };
    info!("{}", report.summary());

    Ok(report)
}

/// Sample a vector with entries i.i.d. uniform in [-1, 1].
///
/// The same distribution the projection entries are drawn from. A sampled
/// vector is never exactly zero in practice, so `angular_similarity` does
/// not fail inside the benchmark loop.
pub fn sample_vector<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Vec<f32> {
    (0..dim).map(|_| rng.random_range(-1.0f32..=1.0)).collect()
}
