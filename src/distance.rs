//! Exact angular similarity between dense vectors.
//!
//! This is the reference the Hamming estimator is judged against. Angular
//! similarity is `1 - θ/π` where θ is the angle between the two vectors.
//! It equals the probability that a random hyperplane does *not* separate
//! them, which is what makes it the right yardstick for signed-projection
//! signatures.

use crate::error::{Result, SketchError};

/// Exact angular similarity `1 - acos(cos(a, b)) / π`, in [0, 1].
///
/// Symmetric in its arguments. Fails with
/// [`SketchError::DimensionMismatch`] on unequal lengths and with
/// [`SketchError::ZeroVector`] if either input has zero magnitude (the
/// angle is undefined there).
///
/// The cosine is clamped to [-1, 1] before `acos`: rounding in the dot
/// product can push it slightly outside the domain, where `acos` would
/// return NaN.
pub fn angular_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(SketchError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(SketchError::ZeroVector);
    }

    let cos = (dot(a, b) / (norm_a * norm_b)).clamp(-1.0, 1.0);
    Ok(1.0 - cos.acos() / std::f32::consts::PI)
}

#[inline]
fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[inline]
fn norm(v: &[f32]) -> f32 {
    dot(v, v).sqrt()
}
