pub mod comparison;
pub mod consistency;
pub mod matrix;
pub mod num;

pub use crate::comparison::Preference;
pub use crate::consistency::{Consistency, Error};
pub use crate::matrix::ComparisonMatrix;
pub use crate::num::{Score, Weight};

/// Strategy for deriving a priority vector from a comparison matrix.
///
/// Geometric mean is the default: it is deterministic, cheap, and degrades
/// gracefully on mildly inconsistent matrices. Power iteration approximates
/// the dominant eigenvector instead; the two diverge slightly when the
/// judgments are inconsistent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WeightMethod {
    #[default]
    GeometricMean,
    PowerIteration,
}

const POWER_ITERATIONS: usize = 100;

/// Derive the priority weights of the N criteria compared in `matrix`.
/// Every returned weight is positive and the vector sums to 1.
pub fn derive_weights<const N: usize>(
    matrix: &ComparisonMatrix<N>,
    method: WeightMethod,
) -> [Weight; N] {
    match method {
        WeightMethod::GeometricMean => geometric_mean(matrix),
        WeightMethod::PowerIteration => power_iteration(matrix),
    }
}

fn geometric_mean<const N: usize>(matrix: &ComparisonMatrix<N>) -> [Weight; N] {
    let mut means = [0.0; N];
    for (i, mean) in means.iter_mut().enumerate() {
        let product: f64 = matrix.row(i).iter().map(|entry| entry.into_inner()).product();
        *mean = product.powf(1.0 / N as f64);
    }
    normalized(means)
}

fn power_iteration<const N: usize>(matrix: &ComparisonMatrix<N>) -> [Weight; N] {
    let mut vector = [1.0 / N as f64; N];
    for _ in 0..POWER_ITERATIONS {
        let mut next = [0.0; N];
        for (i, slot) in next.iter_mut().enumerate() {
            *slot = (0..N)
                .map(|j| matrix.get(i, j).into_inner() * vector[j])
                .sum();
        }
        let sum: f64 = next.iter().sum();
        for entry in &mut next {
            *entry /= sum;
        }
        vector = next;
    }
    normalized(vector)
}

fn normalized<const N: usize>(values: [f64; N]) -> [Weight; N] {
    let sum: f64 = values.iter().sum();
    values.map(|value| Weight::new(value / sum).unwrap())
}
