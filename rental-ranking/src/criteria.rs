use serde::{Deserialize, Serialize};

pub const CRITERIA_COUNT: usize = 7;

/// The seven decision criteria. Declaration order is the catalog order and
/// fixes the comparison-matrix indices; it never changes at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    Price,
    Location,
    Size,
    Condition,
    Amenities,
    Comfort,
    AirQuality,
}

impl Criterion {
    pub const ALL: [Criterion; CRITERIA_COUNT] = [
        Criterion::Price,
        Criterion::Location,
        Criterion::Size,
        Criterion::Condition,
        Criterion::Amenities,
        Criterion::Comfort,
        Criterion::AirQuality,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Stable identifier used by upstream data and serialized output.
    pub fn key(&self) -> &'static str {
        match self {
            Criterion::Price => "price",
            Criterion::Location => "location",
            Criterion::Size => "size",
            Criterion::Condition => "condition",
            Criterion::Amenities => "amenities",
            Criterion::Comfort => "comfort",
            Criterion::AirQuality => "airQuality",
        }
    }

    pub fn from_key(key: &str) -> Option<Criterion> {
        Criterion::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Price => "Price",
            Criterion::Location => "Location",
            Criterion::Size => "Size",
            Criterion::Condition => "Condition",
            Criterion::Amenities => "Amenities",
            Criterion::Comfort => "Comfort",
            Criterion::AirQuality => "Air quality",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Criterion::Price => "Monthly rent relative to the rest of your shortlist",
            Criterion::Location => "Distance to your reference point and neighborhood quality",
            Criterion::Size => "Living area and number of rooms",
            Criterion::Condition => "State of the building and the interior",
            Criterion::Amenities => "Fittings such as kitchen, balcony, storage, parking",
            Criterion::Comfort => "Layout, light, and noise",
            Criterion::AirQuality => "Outdoor air quality at the address",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Criterion::Price => "banknote",
            Criterion::Location => "map-pin",
            Criterion::Size => "ruler",
            Criterion::Condition => "wrench",
            Criterion::Amenities => "sofa",
            Criterion::Comfort => "sun",
            Criterion::AirQuality => "wind",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
