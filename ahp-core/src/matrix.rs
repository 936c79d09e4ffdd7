use ordered_float::NotNan;

use crate::comparison::Preference;

/// One off-diagonal judgment: how the criterion at `row` compares to the
/// criterion at `col`, in the pair order the judgment was expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub preference: Preference,
}

/// An N×N positive reciprocal matrix of pairwise importance ratios.
/// The diagonal is 1 and `M[i][j] * M[j][i] == 1` for every pair; both hold
/// by construction and the entries are never mutated afterwards.
#[derive(Clone, Copy, PartialEq)]
pub struct ComparisonMatrix<const N: usize> {
    entries: [[NotNan<f64>; N]; N],
}

impl<const N: usize> ComparisonMatrix<N> {
    const ONE: NotNan<f64> = unsafe { NotNan::new_unchecked(1.0) };

    /// Matrix with every pair at equal importance.
    pub fn equal_importance() -> Self {
        Self {
            entries: [[Self::ONE; N]; N],
        }
    }

    /// Build from a set of judgments. Unspecified pairs stay at equal
    /// importance. Entries referencing an index outside the matrix, or a
    /// criterion against itself, have no effect.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut matrix = Self::equal_importance();
        for Entry {
            row,
            col,
            preference,
        } in entries
        {
            if row >= N || col >= N || row == col {
                continue;
            }
            let ratio = preference.ratio();
            matrix.entries[row][col] = NotNan::new(ratio.into_inner().recip()).unwrap();
            matrix.entries[col][row] = ratio;
        }
        matrix
    }

    pub fn get(&self, row: usize, col: usize) -> NotNan<f64> {
        self.entries[row][col]
    }

    pub fn row(&self, row: usize) -> &[NotNan<f64>; N] {
        &self.entries[row]
    }

    pub fn size(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for ComparisonMatrix<N> {
    fn default() -> Self {
        Self::equal_importance()
    }
}

impl<const N: usize> std::fmt::Debug for ComparisonMatrix<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|row| row.as_slice()))
            .finish()
    }
}
