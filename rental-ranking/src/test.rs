use proptest::{prelude::prop, prop_assert, prop_assert_eq, prop_compose, proptest};

use ahp_core::num::assert_within;

use crate::*;

fn comparison(first: Criterion, second: Criterion, value: i8) -> PairwiseComparison {
    PairwiseComparison {
        first,
        second,
        value: Preference::new(value).unwrap(),
    }
}

fn scores(values: [f64; CRITERIA_COUNT]) -> CriteriaScores {
    let [price, location, size, condition, amenities, comfort, air_quality] =
        values.map(|v| Score::new(v).unwrap());
    CriteriaScores {
        price,
        location,
        size,
        condition,
        amenities,
        comfort,
        air_quality,
        trace: None,
    }
}

fn scored(id: u64, values: [f64; CRITERIA_COUNT]) -> Property {
    Property {
        id,
        scores: Some(scores(values)),
    }
}

#[test]
fn resubmitting_a_pair_replaces_the_judgment() {
    let mut set = ComparisonSet::new();
    set.insert(comparison(Criterion::Price, Criterion::Location, -4));
    set.insert(comparison(Criterion::Location, Criterion::Price, -4));
    assert_eq!(set.len(), 1);
    // the second submission reversed the pair, so price now reads +4
    assert_eq!(
        set.get(Criterion::Price, Criterion::Location),
        Preference::new(4),
    );
    assert_eq!(
        set.get(Criterion::Location, Criterion::Price),
        Preference::new(-4),
    );
}

#[test]
fn raw_judgments_with_unknown_keys_are_dropped() {
    let mut set = ComparisonSet::new();
    assert!(!set.insert_raw("price", "view", 3));
    assert!(!set.insert_raw("garden", "location", -2));
    assert!(!set.insert_raw("price", "location", 9));
    assert!(!set.insert_raw("price", "price", 0));
    assert!(set.is_empty());

    assert!(set.insert_raw("price", "airQuality", -3));
    assert_eq!(set.len(), 1);
    assert_eq!(
        set.get(Criterion::Price, Criterion::AirQuality),
        Preference::new(-3),
    );
}

#[test]
fn matrix_reflects_the_judgment_orientation() {
    let mut set = ComparisonSet::new();
    set.insert(comparison(Criterion::Price, Criterion::Location, -4));
    let matrix = set.matrix();
    // price strongly more important: price row dominates the location column
    assert_within(matrix.get(0, 1).into_inner(), 5.0, 1e-12);
    assert_within(matrix.get(1, 0).into_inner(), 0.2, 1e-12);
}

#[test]
fn price_priority_dominates_the_weights() {
    let mut set = ComparisonSet::new();
    set.insert(comparison(Criterion::Price, Criterion::Location, -4));
    let result = evaluate(&[], &set, WeightMethod::GeometricMean).unwrap();

    let weights = result.weights;
    let (top, _) = weights.by_priority()[0];
    assert_eq!(top, Criterion::Price);
    assert!(weights.price > weights.location);
    assert!(result.consistency.acceptable);
}

#[test]
fn unscored_properties_are_filtered_not_failed() {
    let properties = [
        scored(1, [8.0, 6.0, 5.0, 5.0, 5.0, 5.0, 5.0]),
        Property {
            id: 2,
            scores: None,
        },
        scored(3, [4.0, 6.0, 5.0, 5.0, 5.0, 5.0, 5.0]),
    ];
    let result = evaluate(&properties, &ComparisonSet::new(), WeightMethod::default()).unwrap();
    assert_eq!(result.property_count, 2);
    assert_eq!(result.rankings.len(), 2);
    assert!(result.rankings.iter().all(|r| r.id != 2));
}

#[test]
fn uniform_weights_make_the_midpoint_fifty() {
    let properties = [scored(1, [5.0; CRITERIA_COUNT])];
    let result = evaluate(&properties, &ComparisonSet::new(), WeightMethod::default()).unwrap();
    let ranking = &result.rankings[0];
    assert_within(ranking.final_score, 50.0, 1e-9);
    for contribution in ranking.contributions.values() {
        assert_within(*contribution, 50.0 / CRITERIA_COUNT as f64, 1e-9);
    }
}

#[test]
fn ranking_is_descending_and_ties_keep_input_order() {
    let properties = [
        scored(10, [5.0; CRITERIA_COUNT]),
        scored(11, [9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0]),
        scored(12, [5.0; CRITERIA_COUNT]),
        scored(13, [2.0; CRITERIA_COUNT]),
    ];
    let result = evaluate(&properties, &ComparisonSet::new(), WeightMethod::default()).unwrap();
    let order: Vec<u64> = result.rankings.iter().map(|r| r.id).collect();
    assert_eq!(order, [11, 10, 12, 13]);
}

#[test]
fn strengths_and_weaknesses_describe_raw_scores() {
    let properties = [scored(1, [10.0, 9.0, 8.0, 5.0, 3.0, 2.0, 1.0])];
    let result = evaluate(&properties, &ComparisonSet::new(), WeightMethod::default()).unwrap();
    let ranking = &result.rankings[0];
    assert_eq!(
        ranking.strengths.as_slice(),
        [Criterion::Price, Criterion::Location, Criterion::Size],
    );
    // worst criterion sits last
    assert_eq!(
        ranking.weaknesses.as_slice(),
        [Criterion::Amenities, Criterion::Comfort, Criterion::AirQuality],
    );
}

#[test]
fn identical_inputs_produce_identical_results() {
    let listings = [
        Listing {
            price: Some("1.200 €".to_string()),
            distance_km: Some(3.2),
            size: Score::new(7.0),
            ..Default::default()
        },
        Listing {
            price: Some("950 €".to_string()),
            distance_km: Some(11.0),
            condition: Score::new(4.0),
            ..Default::default()
        },
    ];
    let properties: Vec<Property> = score_listings(&listings)
        .into_iter()
        .zip(1..)
        .map(|(scores, id)| Property {
            id,
            scores: Some(scores),
        })
        .collect();
    let mut set = ComparisonSet::new();
    set.insert(comparison(Criterion::Price, Criterion::Location, -4));
    set.insert(comparison(Criterion::Size, Criterion::Comfort, 2));

    let first = evaluate(&properties, &set, WeightMethod::GeometricMean).unwrap();
    let second = evaluate(&properties, &set, WeightMethod::GeometricMean).unwrap();
    assert_eq!(first.weights, second.weights);
    assert_eq!(first.consistency, second.consistency);
    assert_eq!(first.rankings, second.rankings);
    assert_eq!(first.property_count, second.property_count);
}

#[test]
fn explanation_follows_the_user_priorities() {
    let mut set = ComparisonSet::new();
    for other in [
        Criterion::Location,
        Criterion::Size,
        Criterion::Condition,
        Criterion::Amenities,
        Criterion::Comfort,
        Criterion::AirQuality,
    ] {
        set.insert(comparison(Criterion::Price, other, -4));
    }
    for other in [
        Criterion::Size,
        Criterion::Condition,
        Criterion::Amenities,
        Criterion::Comfort,
        Criterion::AirQuality,
    ] {
        set.insert(comparison(Criterion::Location, other, -2));
    }
    for other in [
        Criterion::Condition,
        Criterion::Amenities,
        Criterion::Comfort,
        Criterion::AirQuality,
    ] {
        set.insert(comparison(Criterion::Size, other, -1));
    }

    let properties = [scored(1, [9.0, 3.0, 5.0, 6.0, 5.0, 10.0, 2.0])];
    let result = evaluate(&properties, &set, WeightMethod::GeometricMean).unwrap();

    let priorities: Vec<Criterion> = result
        .weights
        .by_priority()
        .into_iter()
        .take(3)
        .map(|(c, _)| c)
        .collect();
    assert_eq!(
        priorities,
        [Criterion::Price, Criterion::Location, Criterion::Size],
    );

    let ranking = &result.rankings[0];
    let explanation = explain(ranking, ranking_scores(&properties[0]), &result.weights);

    let highlighted: Vec<Criterion> = explanation.highlights.iter().map(|r| r.criterion).collect();
    assert_eq!(highlighted, [Criterion::Price, Criterion::Comfort]);
    assert_eq!(explanation.highlights[0].priority, Some(1));
    assert_eq!(explanation.highlights[1].priority, None);

    let improvements: Vec<Criterion> =
        explanation.improvements.iter().map(|r| r.criterion).collect();
    assert_eq!(improvements, [Criterion::Location, Criterion::AirQuality]);
    assert_eq!(explanation.improvements[0].priority, Some(2));
    assert_eq!(explanation.improvements[1].priority, None);

    assert!(explanation.highlights.len() <= 4);
    assert!(explanation.improvements.len() <= 3);
}

fn ranking_scores(property: &Property) -> &CriteriaScores {
    property.scores.as_ref().unwrap()
}

#[test]
fn snapshot_serializes_with_camel_case_keys() {
    let properties = [scored(7, [8.0, 6.0, 5.0, 5.0, 5.0, 5.0, 4.0])];
    let mut set = ComparisonSet::new();
    set.insert(comparison(Criterion::Price, Criterion::AirQuality, -3));
    let result = evaluate(&properties, &set, WeightMethod::default()).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["weights"]["airQuality"].is_number());
    assert!(json["consistency"]["lambdaMax"].is_number());
    assert!(json["propertyCount"].is_number());
    assert!(json["generatedAt"].is_string());
    let ranking = &json["rankings"][0];
    assert!(ranking["finalScore"].is_number());
    assert!(ranking["contributions"]["price"].is_number());
    assert_eq!(ranking["id"], 7);
    assert!(ranking["strengths"][0].is_string());
}

prop_compose! {
    fn sub_score()(value in prop::option::of(1..=10_i32)) -> Option<Score> {
        value.map(|v| Score::new(f64::from(v)).unwrap())
    }
}
prop_compose! {
    fn listing()(
        price in prop::option::of(400..=4000_u32),
        distance_km in prop::option::of(0.0..60.0_f64),
        neighborhood in sub_score(),
        size in sub_score(),
        condition in sub_score(),
        amenities in sub_score(),
        comfort in sub_score(),
        air_quality in sub_score(),
    ) -> Listing {
        Listing {
            price: price.map(|p| format!("{p} €/month")),
            distance_km,
            neighborhood,
            size,
            condition,
            amenities,
            comfort,
            air_quality,
            ..Default::default()
        }
    }
}
prop_compose! {
    fn judgments()(judgments in prop::collection::vec(
        (0..CRITERIA_COUNT, 0..CRITERIA_COUNT, -8..=8_i8),
        0..=CRITERIA_COUNT * (CRITERIA_COUNT - 1) / 2,
    )) -> ComparisonSet {
        let mut set = ComparisonSet::new();
        for (first, second, value) in judgments {
            set.insert(PairwiseComparison {
                first: Criterion::ALL[first],
                second: Criterion::ALL[second],
                value: Preference::new(value).unwrap(),
            });
        }
        set
    }
}

proptest! {
    #[test]
    fn every_score_and_final_score_stays_in_bounds(
        listings in prop::collection::vec(listing(), 1..10),
        set in judgments(),
    ) {
        let prepared = score_listings(&listings);
        for scores in &prepared {
            for criterion in Criterion::ALL {
                let value = scores.get(criterion).as_f64();
                prop_assert!((1.0..=10.0).contains(&value));
            }
        }

        let properties: Vec<Property> = prepared
            .into_iter()
            .zip(0..)
            .map(|(scores, id)| Property { id, scores: Some(scores) })
            .collect();
        let result = evaluate(&properties, &set, WeightMethod::GeometricMean).unwrap();
        prop_assert_eq!(result.property_count, properties.len());
        for ranking in &result.rankings {
            prop_assert!(ranking.final_score >= 10.0 - 1e-9);
            prop_assert!(ranking.final_score <= 100.0 + 1e-9);
        }
    }
}
