use std::time::Instant;

use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use ahp_core::Score;
use rental_ranking::{
    evaluate, explain, score_listings, ComparisonSet, Criterion, Listing, Property, WeightMethod,
};

fn synthesize(rng: &mut SmallRng) -> Listing {
    fn sub_score(rng: &mut SmallRng) -> Option<Score> {
        rng.gen_bool(0.9)
            .then(|| Score::new(f64::from(rng.gen_range(1..=10))).unwrap())
    }

    Listing {
        price: rng
            .gen_bool(0.95)
            .then(|| format!("{} €/month", rng.gen_range(600..2800))),
        distance_km: rng.gen_bool(0.9).then(|| rng.gen_range(0.2..35.0)),
        neighborhood: sub_score(rng),
        size: sub_score(rng),
        condition: sub_score(rng),
        amenities: sub_score(rng),
        comfort: sub_score(rng),
        air_quality: sub_score(rng),
        square_meters: rng.gen_bool(0.8).then(|| rng.gen_range(25.0..140.0)),
        bedrooms: rng.gen_bool(0.8).then(|| rng.gen_range(1..=5)),
        aqi: rng.gen_bool(0.7).then(|| rng.gen_range(10..120)),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = SmallRng::from_entropy();

    let listings: Vec<Listing> = (0..12).map(|_| synthesize(&mut rng)).collect();
    let mut properties: Vec<Property> = score_listings(&listings)
        .into_iter()
        .zip(0..)
        .map(|(scores, id)| Property {
            id,
            scores: Some(scores),
        })
        .collect();
    // one property whose scores were never prepared upstream
    properties.push(Property {
        id: 99,
        scores: None,
    });

    let mut comparisons = ComparisonSet::new();
    comparisons.insert_raw("price", "location", -4);
    comparisons.insert_raw("price", "size", -2);
    comparisons.insert_raw("location", "airQuality", -2);
    comparisons.insert_raw("comfort", "condition", 1);
    for _ in 0..4 {
        let first = Criterion::ALL[rng.gen_range(0..Criterion::ALL.len())];
        let second = Criterion::ALL[rng.gen_range(0..Criterion::ALL.len())];
        comparisons.insert_raw(first.key(), second.key(), rng.gen_range(-8..=8));
    }

    let total_runs = 10_000;
    let mut result = evaluate(&properties, &comparisons, WeightMethod::GeometricMean)
        .expect("criterion catalog is covered by the random index table");
    let t0 = Instant::now();
    for _ in 0..total_runs {
        result = evaluate(&properties, &comparisons, WeightMethod::GeometricMean)
            .expect("criterion catalog is covered by the random index table");
    }
    println!(
        "avg_evaluate_μs: {:.2}",
        t0.elapsed().as_micros() as f64 / total_runs as f64
    );
    println!(
        "properties: {} ranked: {}",
        properties.len(),
        result.property_count
    );
    println!(
        "consistency_ratio: {:.4} acceptable: {}",
        result.consistency.ratio, result.consistency.acceptable
    );

    println!("weights:");
    for (criterion, weight) in result.weights.by_priority() {
        println!("  {:<11} {:.4}", criterion.key(), weight.as_f64());
    }

    println!("ranking:");
    for (position, ranking) in result.rankings.iter().enumerate() {
        let strengths: Vec<&str> = ranking.strengths.iter().map(|c| c.key()).collect();
        println!(
            "  {:>2}. property {:<3} score {:>5.1} strengths {}",
            position + 1,
            ranking.id,
            ranking.final_score,
            strengths.join(","),
        );
    }

    if let Some(top) = result.rankings.first() {
        let scores = properties
            .iter()
            .find(|p| p.id == top.id)
            .and_then(|p| p.scores.as_ref())
            .expect("ranked properties have scores");
        let explanation = explain(top, scores, &result.weights);
        println!("why property {} leads:", top.id);
        for reason in &explanation.highlights {
            println!("  + {}", reason.text);
        }
        for reason in &explanation.improvements {
            println!("  - {}", reason.text);
        }
    }
}
