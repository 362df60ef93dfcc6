//! Bit signatures and the Hamming similarity estimator.
//!
//! A signature keeps one sign bit per hyperplane of a projection matrix.
//! For vectors a and b with angle θ between them, a random hyperplane
//! separates them with probability θ/π, so each bit position agrees with
//! probability `1 - θ/π`. The fraction of matching bits is therefore an
//! unbiased estimate of angular similarity, and comparing two signatures
//! is a single XOR + popcount pass over their words.

use crate::error::{Result, SketchError};
use crate::projection::ProjectionMatrix;

const WORD_BITS: usize = 64;

/// A fixed-length bit signature packed into 64-bit words.
///
/// Bit i records which side of hyperplane i the encoded vector fell on.
/// Unused bits past `bits` in the last word are always zero, so Hamming
/// distance never sees garbage.
///
/// Two signatures are only meaningfully comparable when derived from the
/// *same* projection matrix. That is a usage precondition, not something
/// the type tracks or checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    words: Vec<u64>,
    bits: usize,
}

impl Signature {
    /// Build a signature from explicit bits.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is empty.
    pub fn from_bits(bits: &[bool]) -> Signature {
        assert!(!bits.is_empty(), "signature must have at least one bit");

        let mut words = vec![0u64; bits.len().div_ceil(WORD_BITS)];
        for (i, &set) in bits.iter().enumerate() {
            if set {
                words[i / WORD_BITS] |= 1u64 << (i % WORD_BITS);
            }
        }

        Signature {
            words,
            bits: bits.len(),
        }
    }

    /// Length in bits.
    pub fn len(&self) -> usize {
        self.bits
    }

    /// Always false: signatures carry at least one bit.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Bit `i`: true iff the vector fell on the nonnegative side of
    /// hyperplane `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn bit(&self, i: usize) -> bool {
        assert!(i < self.bits, "bit index {} out of range ({} bits)", i, self.bits);
        (self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1
    }

    /// Number of bit positions where `self` and `other` differ.
    ///
    /// Assumes equal lengths; [`hash_similarity`] validates that, the raw
    /// distance does not.
    pub fn hamming_distance(&self, other: &Signature) -> usize {
        self.words
            .iter()
            .zip(other.words.iter())
            .map(|(a, b)| (a ^ b).count_ones() as usize)
            .sum()
    }

    /// Bitwise complement, with the tail of the last word re-masked.
    pub fn complement(&self) -> Signature {
        let mut words: Vec<u64> = self.words.iter().map(|w| !w).collect();
        mask_tail(&mut words, self.bits);

        Signature {
            words,
            bits: self.bits,
        }
    }
}

/// Zero any bits past `bits` in the last word.
fn mask_tail(words: &mut [u64], bits: usize) {
    let tail = bits % WORD_BITS;
    if tail != 0 {
        if let Some(last) = words.last_mut() {
            *last &= (1u64 << tail) - 1;
        }
    }
}

/// Encode a vector into a bit signature against a projection matrix.
///
/// Bit i is 1 iff `dot(projection.row(i), vector) >= 0`. Deterministic:
/// the same matrix and vector always yield the same signature, and the
/// output length equals `projection.rows()`. Fails with
/// [`SketchError::DimensionMismatch`] unless
/// `vector.len() == projection.cols()`.
pub fn compute_signature(projection: &ProjectionMatrix, vector: &[f32]) -> Result<Signature> {
    if vector.len() != projection.cols() {
        return Err(SketchError::DimensionMismatch {
            expected: projection.cols(),
            actual: vector.len(),
        });
    }

    let bits = projection.rows();
    let mut words = vec![0u64; bits.div_ceil(WORD_BITS)];

    for i in 0..bits {
        let dot: f32 = projection
            .row(i)
            .iter()
            .zip(vector.iter())
            .map(|(p, v)| p * v)
            .sum();
        if dot >= 0.0 {
            words[i / WORD_BITS] |= 1u64 << (i % WORD_BITS);
        }
    }

    Ok(Signature { words, bits })
}

/// Estimated similarity of two signatures, in [0, 1].
///
/// `(k - hamming) / k` for shared length k: 1.0 means identical signatures,
/// 0.0 means every bit differs. Symmetric in its arguments. Fails with
/// [`SketchError::DimensionMismatch`] unless lengths agree.
pub fn hash_similarity(a: &Signature, b: &Signature) -> Result<f32> {
    if a.len() != b.len() {
        return Err(SketchError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let k = a.len() as f32;
    let distance = a.hamming_distance(b) as f32;
    Ok((k - distance) / k)
}
