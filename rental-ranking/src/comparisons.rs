use std::collections::BTreeMap;

use tracing::debug;

use ahp_core::matrix::Entry;
use ahp_core::{ComparisonMatrix, Preference};

use crate::criteria::{Criterion, CRITERIA_COUNT};

/// One user judgment: how `first` compares to `second` on the Saaty scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairwiseComparison {
    pub first: Criterion,
    pub second: Criterion,
    pub value: Preference,
}

/// The set of judgments collected from the user. At most one judgment is
/// held per unordered criterion pair; submitting a pair again replaces the
/// earlier judgment. Pairs are stored in catalog order, flipping the
/// preference sign when the submitted order was reversed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComparisonSet {
    judgments: BTreeMap<(Criterion, Criterion), Preference>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, comparison: PairwiseComparison) {
        let PairwiseComparison {
            first,
            second,
            value,
        } = comparison;
        if first == second {
            debug!(criterion = first.key(), "dropped self-comparison");
            return;
        }
        let (pair, value) = if first.index() < second.index() {
            ((first, second), value)
        } else {
            ((second, first), value.invert())
        };
        self.judgments.insert(pair, value);
    }

    /// Accept a judgment keyed by raw criterion identifiers, as stored by
    /// the comparison wizard. Unknown keys and out-of-range values are
    /// dropped without touching the set; returns whether the judgment was
    /// taken.
    pub fn insert_raw(&mut self, first: &str, second: &str, value: i8) -> bool {
        let (Some(first), Some(second)) = (Criterion::from_key(first), Criterion::from_key(second))
        else {
            debug!(first, second, "dropped comparison with unknown criterion key");
            return false;
        };
        let Some(value) = Preference::new(value) else {
            debug!(value, "dropped comparison with out-of-range value");
            return false;
        };
        if first == second {
            debug!(criterion = first.key(), "dropped self-comparison");
            return false;
        }
        self.insert(PairwiseComparison {
            first,
            second,
            value,
        });
        true
    }

    /// The stored judgment for a pair, oriented to the argument order.
    pub fn get(&self, first: Criterion, second: Criterion) -> Option<Preference> {
        if first.index() < second.index() {
            self.judgments.get(&(first, second)).copied()
        } else {
            self.judgments
                .get(&(second, first))
                .map(Preference::invert)
        }
    }

    pub fn len(&self) -> usize {
        self.judgments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.judgments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PairwiseComparison> + '_ {
        self.judgments
            .iter()
            .map(|(&(first, second), &value)| PairwiseComparison {
                first,
                second,
                value,
            })
    }

    /// Assemble the reciprocal comparison matrix over the criterion catalog.
    pub fn matrix(&self) -> ComparisonMatrix<CRITERIA_COUNT> {
        ComparisonMatrix::from_entries(self.iter().map(|comparison| Entry {
            row: comparison.first.index(),
            col: comparison.second.index(),
            preference: comparison.value,
        }))
    }
}
