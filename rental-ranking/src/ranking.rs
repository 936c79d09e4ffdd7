use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use serde::Serialize;
use tracing::debug;

use ahp_core::Score;

use crate::criteria::{Criterion, CRITERIA_COUNT};
use crate::scores::CriteriaScores;
use crate::{CriterionWeights, Property};

/// The ranked outcome for one property. Contributions are on the 0-100
/// scale; strengths and weaknesses describe the property's raw scores,
/// independent of the current weighting.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRanking {
    pub id: u64,
    pub final_score: f64,
    pub contributions: BTreeMap<Criterion, f64>,
    /// Top three raw scores, best first.
    pub strengths: ArrayVec<Criterion, 3>,
    /// Bottom three raw scores, worst last.
    pub weaknesses: ArrayVec<Criterion, 3>,
}

/// Score and order the properties that have prepared criteria scores.
/// Properties without scores are left out; ties keep input order.
pub fn rank(properties: &[Property], weights: &CriterionWeights) -> Vec<PropertyRanking> {
    let mut rankings: Vec<PropertyRanking> = properties
        .iter()
        .filter_map(|property| {
            let Some(scores) = &property.scores else {
                debug!(property = property.id, "no prepared scores, left out of ranking");
                return None;
            };
            Some(score_property(property.id, scores, weights))
        })
        .collect();
    rankings.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
    rankings
}

fn score_property(id: u64, scores: &CriteriaScores, weights: &CriterionWeights) -> PropertyRanking {
    let mut contributions = BTreeMap::new();
    let mut final_score = 0.0;
    for criterion in Criterion::ALL {
        let contribution =
            scores.get(criterion).as_f64() * weights.get(criterion).as_f64() * 10.0;
        final_score += contribution;
        contributions.insert(criterion, contribution);
    }
    let (strengths, weaknesses) = extremes(scores);
    PropertyRanking {
        id,
        final_score,
        contributions,
        strengths,
        weaknesses,
    }
}

/// The three highest and three lowest raw scores. Stable sorts keep equal
/// scores in catalog order; the low triple is collected ascending and then
/// reversed so the worst criterion sits last.
fn extremes(scores: &CriteriaScores) -> (ArrayVec<Criterion, 3>, ArrayVec<Criterion, 3>) {
    let raw: [Score; CRITERIA_COUNT] = Criterion::ALL.map(|c| scores.get(c));

    let mut descending = permutation::sort_by(&raw, |a, b| b.cmp(a));
    let strengths = descending
        .apply_slice(&Criterion::ALL[..])
        .into_iter()
        .take(3)
        .collect();

    let mut ascending = permutation::sort_by(&raw, |a, b| a.cmp(b));
    let mut weaknesses: ArrayVec<Criterion, 3> = ascending
        .apply_slice(&Criterion::ALL[..])
        .into_iter()
        .take(3)
        .collect();
    weaknesses.reverse();

    (strengths, weaknesses)
}
