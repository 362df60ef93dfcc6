//! Random hyperplane projection matrices.
//!
//! A projection matrix holds K random hyperplane normals of dimension D,
//! one per row. Each hyperplane splits the input space in two; which side a
//! vector falls on becomes one bit of its signature (see
//! [`compute_signature`](crate::compute_signature)).

use rand::Rng;

use crate::error::{Result, SketchError};

/// An immutable K x D matrix of random hyperplane normals.
///
/// Rows are hyperplane normals, stored flat in row-major order. K (output
/// bits) and D (input dimension) are fixed for the lifetime of an instance.
/// A matrix is generated once per run and shared by reference across every
/// encode call; it is never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl ProjectionMatrix {
    /// Number of hyperplanes, i.e. the signature length in bits.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Input dimensionality.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Hyperplane normal `i` as a slice of length [`cols`](Self::cols).
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}

/// Generate a projection matrix with entries i.i.d. uniform in [-1, 1].
///
/// `input_size` is the dimensionality of the vectors to encode;
/// `output_size` is the number of hyperplanes. Fails with
/// [`SketchError::InvalidDimension`] unless both are positive.
///
/// The random source is injected so callers control seeding:
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use slant::generate_random_projection;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let m = generate_random_projection(128, 64, &mut rng).unwrap();
/// assert_eq!((m.rows(), m.cols()), (64, 128));
/// ```
pub fn generate_random_projection<R: Rng + ?Sized>(
    input_size: usize,
    output_size: usize,
    rng: &mut R,
) -> Result<ProjectionMatrix> {
    if input_size == 0 || output_size == 0 {
        return Err(SketchError::InvalidDimension {
            rows: output_size,
            cols: input_size,
        });
    }

    let data = (0..output_size * input_size)
        .map(|_| rng.random_range(-1.0f32..=1.0))
        .collect();

    Ok(ProjectionMatrix {
        rows: output_size,
        cols: input_size,
        data,
    })
}
