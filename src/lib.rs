//! slant: signed random projection signatures for angular similarity.
//!
//! Project a dense vector onto K random hyperplanes and keep one sign bit
//! per plane. The resulting K-bit signature is a compact proxy for the
//! vector: for two vectors a and b with angle θ between them, a random
//! hyperplane separates them with probability θ/π, so
//!
//! ```text
//! P[sign(r·a) = sign(r·b)] = 1 - θ(a,b)/π
//! ```
//!
//! which is exactly their angular similarity. The fraction of matching
//! signature bits is therefore an unbiased estimator of angular
//! similarity, and comparing two signatures costs a handful of XOR +
//! popcount word operations instead of a full dot product.
//!
//! The estimate is a mean of K Bernoulli trials, so its error shrinks
//! like 1/sqrt(K): more hyperplanes buy accuracy, linearly in space and
//! encode time.
//!
//! The crate has two halves:
//!
//! - the estimator: [`generate_random_projection`], [`compute_signature`],
//!   [`hash_similarity`], with [`angular_similarity`] as the exact
//!   reference;
//! - the benchmark: [`run_benchmark`] samples random vector pairs and
//!   measures how far the estimate lands from the reference.
//!
//! There is deliberately no hash-table indexing here: signatures are
//! compared pairwise, never bucketed. The canonical sublinear-search use
//! of LSH is a different crate's job.
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use slant::{
//!     angular_similarity, compute_signature, generate_random_projection,
//!     hash_similarity, sample_vector,
//! };
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let projection = generate_random_projection(64, 256, &mut rng)?;
//!
//! let a = sample_vector(64, &mut rng);
//! let b = sample_vector(64, &mut rng);
//!
//! let estimated = hash_similarity(
//!     &compute_signature(&projection, &a)?,
//!     &compute_signature(&projection, &b)?,
//! )?;
//! let exact = angular_similarity(&a, &b)?;
//!
//! // 256 bits keep the estimate within a few percent of the truth.
//! assert!((estimated - exact).abs() < 0.15);
//! # Ok::<(), slant::SketchError>(())
//! ```
//!
//! # References
//!
//! - Charikar (2002). "Similarity estimation techniques from rounding
//!   algorithms." (random hyperplane signatures)
//! - Goemans & Williamson (1995). "Improved approximation algorithms for
//!   maximum cut and satisfiability problems using semidefinite
//!   programming." (the hyperplane separation probability)

pub mod benchmark;
pub mod distance;
pub mod error;
pub mod projection;
pub mod signature;

pub use benchmark::{run_benchmark, sample_vector, BenchmarkReport, TrialRecord};
pub use distance::angular_similarity;
pub use error::{Result, SketchError};
pub use projection::{generate_random_projection, ProjectionMatrix};
pub use signature::{compute_signature, hash_similarity, Signature};
