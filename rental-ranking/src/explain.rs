use arrayvec::ArrayVec;
use serde::Serialize;

use ahp_core::Score;

use crate::criteria::Criterion;
use crate::ranking::PropertyRanking;
use crate::scores::CriteriaScores;
use crate::CriterionWeights;

const HIGHLIGHT_CAP: usize = 4;
const IMPROVEMENT_CAP: usize = 3;

/// One human-readable reason in a property's explanation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reason {
    pub criterion: Criterion,
    pub score: Score,
    /// 1-based rank among the user's top-weighted criteria, when the reason
    /// concerns one of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<usize>,
    pub text: String,
}

/// Why a property ranks where it does, phrased against the user's own
/// priorities.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Explanation {
    pub highlights: Vec<Reason>,
    pub improvements: Vec<Reason>,
}

/// Derive the explanation for one ranked property. Checks the property
/// against the user's three top-weighted criteria, then adds at most one
/// extra strength and one extra weakness from the precomputed lists.
pub fn explain(
    ranking: &PropertyRanking,
    scores: &CriteriaScores,
    weights: &CriterionWeights,
) -> Explanation {
    let priorities: ArrayVec<Criterion, 3> = weights
        .by_priority()
        .into_iter()
        .take(3)
        .map(|(criterion, _)| criterion)
        .collect();

    let mut highlights = Vec::new();
    let mut improvements = Vec::new();
    for (position, &criterion) in priorities.iter().enumerate() {
        let score = scores.get(criterion);
        let priority = position + 1;
        if score.as_f64() >= 7.0 {
            highlights.push(Reason {
                criterion,
                score,
                priority: Some(priority),
                text: format!(
                    "{} scores {}/10 on your #{priority} priority",
                    criterion.label(),
                    score,
                ),
            });
        } else if score.as_f64() <= 4.0 {
            improvements.push(Reason {
                criterion,
                score,
                priority: Some(priority),
                text: format!(
                    "{} scores only {}/10 although it is your #{priority} priority",
                    criterion.label(),
                    score,
                ),
            });
        }
    }

    let extra_strength = ranking
        .strengths
        .iter()
        .find(|&&c| !priorities.contains(&c) && scores.get(c).as_f64() >= 8.0);
    if let Some(&criterion) = extra_strength {
        let score = scores.get(criterion);
        highlights.push(Reason {
            criterion,
            score,
            priority: None,
            text: format!("Also strong: {} at {}/10", criterion.label(), score),
        });
    }

    // worst weakness first; the precomputed list keeps it last
    let extra_weakness = ranking
        .weaknesses
        .iter()
        .rev()
        .find(|&&c| !priorities.contains(&c) && scores.get(c).as_f64() <= 3.0);
    if let Some(&criterion) = extra_weakness {
        let score = scores.get(criterion);
        improvements.push(Reason {
            criterion,
            score,
            priority: None,
            text: format!("Watch out for {}: {}/10", criterion.label(), score),
        });
    }

    highlights.truncate(HIGHLIGHT_CAP);
    improvements.truncate(IMPROVEMENT_CAP);
    Explanation {
        highlights,
        improvements,
    }
}
