pub mod comparisons;
pub mod criteria;
pub mod explain;
pub mod ranking;
pub mod scores;
#[cfg(test)]
mod test;

use arrayvec::ArrayVec;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

pub use ahp_core::{Consistency, Error, Preference, Score, Weight, WeightMethod};

pub use crate::comparisons::{ComparisonSet, PairwiseComparison};
pub use crate::criteria::{Criterion, CRITERIA_COUNT};
pub use crate::explain::{explain, Explanation, Reason};
pub use crate::ranking::PropertyRanking;
pub use crate::scores::{score_listings, CriteriaScores, Listing, RawTrace};

/// A property ready for ranking. `scores` is `None` until the upstream
/// preparation step has normalized the property's raw attributes; such
/// properties are filtered from the ranking, not failed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Property {
    pub id: u64,
    pub scores: Option<CriteriaScores>,
}

/// The derived priority of each criterion. Entries are positive and sum
/// to 1; the vector is recomputed from the comparison set on every run and
/// never edited directly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionWeights {
    pub price: Weight,
    pub location: Weight,
    pub size: Weight,
    pub condition: Weight,
    pub amenities: Weight,
    pub comfort: Weight,
    pub air_quality: Weight,
}

impl CriterionWeights {
    fn from_vector(weights: [Weight; CRITERIA_COUNT]) -> Self {
        let [price, location, size, condition, amenities, comfort, air_quality] = weights;
        Self {
            price,
            location,
            size,
            condition,
            amenities,
            comfort,
            air_quality,
        }
    }

    pub fn get(&self, criterion: Criterion) -> Weight {
        match criterion {
            Criterion::Price => self.price,
            Criterion::Location => self.location,
            Criterion::Size => self.size,
            Criterion::Condition => self.condition,
            Criterion::Amenities => self.amenities,
            Criterion::Comfort => self.comfort,
            Criterion::AirQuality => self.air_quality,
        }
    }

    /// Criteria ordered by descending weight, catalog order on ties.
    pub fn by_priority(&self) -> ArrayVec<(Criterion, Weight), CRITERIA_COUNT> {
        let weights: [Weight; CRITERIA_COUNT] = Criterion::ALL.map(|c| self.get(c));
        let mut sort = permutation::sort_by(&weights, |a, b| b.cmp(a));
        sort.apply_slice(&Criterion::ALL[..])
            .into_iter()
            .map(|criterion| (criterion, self.get(criterion)))
            .collect()
    }
}

/// One full engine run: weights, consistency verdict, and the ranked
/// properties. An immutable snapshot; a rerun builds a new value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AhpResult {
    pub weights: CriterionWeights,
    pub consistency: Consistency,
    pub rankings: Vec<PropertyRanking>,
    /// Number of properties that had prepared scores; smaller than the
    /// input list whenever some were filtered.
    pub property_count: usize,
    pub generated_at: DateTime<Utc>,
}

/// Run the engine: derive weights from the comparison set, check their
/// consistency, and rank the scored properties. Pure in everything but the
/// snapshot timestamp; identical inputs produce identical weights,
/// consistency, and rankings.
pub fn evaluate(
    properties: &[Property],
    comparisons: &ComparisonSet,
    method: WeightMethod,
) -> Result<AhpResult, Error> {
    let matrix = comparisons.matrix();
    let vector = ahp_core::derive_weights(&matrix, method);
    let consistency = ahp_core::consistency::evaluate(&matrix, &vector)?;
    if !consistency.acceptable {
        warn!(
            ratio = consistency.ratio,
            "pairwise judgments are contradictory, weights are unreliable",
        );
    }
    let weights = CriterionWeights::from_vector(vector);
    let rankings = ranking::rank(properties, &weights);
    Ok(AhpResult {
        weights,
        consistency,
        property_count: rankings.len(),
        rankings,
        generated_at: Utc::now(),
    })
}
