use serde::Serialize;
use tracing::debug;

use ahp_core::Score;

use crate::criteria::Criterion;

/// Raw per-property attributes as collected upstream: the scraped price
/// text, the straight-line distance to the user's reference point, the AI
/// sub-assessments, and the provider-mapped air-quality score. All optional;
/// whatever is missing scores neutral.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Listing {
    pub price: Option<String>,
    pub distance_km: Option<f64>,
    pub neighborhood: Option<Score>,
    pub size: Option<Score>,
    pub condition: Option<Score>,
    pub amenities: Option<Score>,
    pub comfort: Option<Score>,
    pub air_quality: Option<Score>,
    pub square_meters: Option<f64>,
    pub bedrooms: Option<u8>,
    pub aqi: Option<u16>,
}

/// Raw inputs echoed alongside the normalized scores for transparency.
/// Never read by the scoring math.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrace {
    pub price_magnitude: Option<u64>,
    pub distance_km: Option<f64>,
    pub square_meters: Option<f64>,
    pub bedrooms: Option<u8>,
    pub aqi: Option<u16>,
}

/// The seven normalized scores of one property.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaScores {
    pub price: Score,
    pub location: Score,
    pub size: Score,
    pub condition: Score,
    pub amenities: Score,
    pub comfort: Score,
    pub air_quality: Score,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<RawTrace>,
}

impl CriteriaScores {
    pub fn get(&self, criterion: Criterion) -> Score {
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
}

/// Normalize a shortlist of listings onto the 1-10 scale, in input order.
/// Price is scored against the whole set, so this is a batch operation.
pub fn score_listings(listings: &[Listing]) -> Vec<CriteriaScores> {
    let range = price_range(listings);
    listings
        .iter()
        .map(|listing| score_listing(listing, range))
        .collect()
}

fn score_listing(listing: &Listing, price_range: Option<(u64, u64)>) -> CriteriaScores {
    let price_magnitude = listing.price.as_deref().and_then(parse_price);
    if let (Some(price), None) = (listing.price.as_deref(), price_magnitude) {
        debug!(price, "unparseable price, scoring neutral");
    }
    CriteriaScores {
        price: score_price(price_magnitude, price_range),
        location: score_location(listing.distance_km, listing.neighborhood),
        size: listing.size.unwrap_or(Score::NEUTRAL),
        condition: listing.condition.unwrap_or(Score::NEUTRAL),
        amenities: listing.amenities.unwrap_or(Score::NEUTRAL),
        comfort: listing.comfort.unwrap_or(Score::NEUTRAL),
        air_quality: listing.air_quality.unwrap_or(Score::NEUTRAL),
        trace: Some(RawTrace {
            price_magnitude,
            distance_km: listing.distance_km,
            square_meters: listing.square_meters,
            bedrooms: listing.bedrooms,
            aqi: listing.aqi,
        }),
    }
}

/// Extract the numeric magnitude from a scraped price string by keeping the
/// digits only ("€1,450/mo" parses as 1450).
pub fn parse_price(price: &str) -> Option<u64> {
    let digits: String = price.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

fn price_range(listings: &[Listing]) -> Option<(u64, u64)> {
    let magnitudes = listings
        .iter()
        .filter_map(|listing| listing.price.as_deref().and_then(parse_price));
    let (min, max) = magnitudes.fold(None, |range, magnitude| match range {
        None => Some((magnitude, magnitude)),
        Some((min, max)) => Some((min.min(magnitude), max.max(magnitude))),
    })?;
    Some((min, max))
}

/// Inverse min-max over the shortlist: the cheapest listing scores 10, the
/// most expensive 1. Degenerate ranges and unparseable prices score neutral.
fn score_price(magnitude: Option<u64>, range: Option<(u64, u64)>) -> Score {
    let (Some(magnitude), Some((min, max))) = (magnitude, range) else {
        return Score::NEUTRAL;
    };
    if min == max {
        return Score::NEUTRAL;
    }
    let position = (magnitude - min) as f64 / (max - min) as f64;
    Score::clamped((1.0 + 9.0 * (1.0 - position)).round())
}

/// Mean of the distance-decay score and the neighborhood assessment.
fn score_location(distance_km: Option<f64>, neighborhood: Option<Score>) -> Score {
    let distance = score_distance(distance_km);
    let neighborhood = neighborhood.unwrap_or(Score::NEUTRAL);
    Score::clamped(((distance.as_f64() + neighborhood.as_f64()) / 2.0).round())
}

/// Step decay over the straight-line distance to the reference point.
fn score_distance(distance_km: Option<f64>) -> Score {
    let Some(distance_km) = distance_km else {
        return Score::NEUTRAL;
    };
    let score = match distance_km {
        d if d <= 0.5 => 10,
        d if d <= 1.0 => 9,
        d if d <= 2.0 => 8,
        d if d <= 4.0 => 7,
        d if d <= 6.0 => 6,
        d if d <= 10.0 => 5,
        d if d <= 15.0 => 4,
        d if d <= 25.0 => 3,
        d if d <= 40.0 => 2,
        _ => 1,
    };
    Score::clamped(f64::from(score))
}
