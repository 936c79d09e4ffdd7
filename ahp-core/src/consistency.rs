use serde::Serialize;
use thiserror::Error;

use crate::matrix::ComparisonMatrix;
use crate::num::Weight;

/// Saaty random index values, indexed by matrix size 1..=10. Sizes 1 and 2
/// cannot be inconsistent and carry a zero index.
pub const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Conventional acceptability bound on the consistency ratio.
pub const ACCEPTABLE_RATIO: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The random index table ends at size 10; larger matrices are rejected
    /// rather than extrapolated.
    #[error("no random index for matrix size {n}")]
    UnsupportedMatrixSize { n: usize },
}

/// How self-contradictory a set of pairwise judgments is. A ratio at or
/// above [`ACCEPTABLE_RATIO`] means the derived weights are unreliable;
/// callers surface that to the user but computation never blocks on it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Consistency {
    /// Estimate of the matrix's principal eigenvalue.
    pub lambda_max: f64,
    /// Consistency index `(lambda_max - n) / (n - 1)`.
    pub index: f64,
    /// Consistency ratio `index / RI(n)`.
    pub ratio: f64,
    pub acceptable: bool,
}

/// Evaluate the consistency of `matrix` against its derived weight vector.
pub fn evaluate<const N: usize>(
    matrix: &ComparisonMatrix<N>,
    weights: &[Weight; N],
) -> Result<Consistency, Error> {
    let random_index = N
        .checked_sub(1)
        .and_then(|i| RANDOM_INDEX.get(i))
        .copied()
        .ok_or(Error::UnsupportedMatrixSize { n: N })?;

    let mut ratio_sum = 0.0;
    for i in 0..N {
        let weighted_row: f64 = (0..N)
            .map(|j| matrix.get(i, j).into_inner() * weights[j].as_f64())
            .sum();
        ratio_sum += weighted_row / weights[i].as_f64();
    }
    let lambda_max = ratio_sum / N as f64;

    let index = if N > 1 {
        (lambda_max - N as f64) / (N as f64 - 1.0)
    } else {
        0.0
    };
    let ratio = if random_index > 0.0 {
        index / random_index
    } else {
        0.0
    };

    Ok(Consistency {
        lambda_max,
        index,
        ratio,
        acceptable: ratio < ACCEPTABLE_RATIO,
    })
}
