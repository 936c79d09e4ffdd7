use ordered_float::NotNan;
use serde::Serialize;

/// A non-NaN f64 value in the range [1, 10]: the common scale every raw
/// criterion measurement is normalized onto before weighting.
#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score(NotNan<f64>);

impl Score {
    pub const MIN: Self = Self(unsafe { NotNan::new_unchecked(1.0) });
    pub const NEUTRAL: Self = Self(unsafe { NotNan::new_unchecked(5.0) });
    pub const MAX: Self = Self(unsafe { NotNan::new_unchecked(10.0) });

    pub fn new(value: f64) -> Option<Self> {
        let value = NotNan::new(value).ok()?;
        if *value < 1.0 || *value > 10.0 {
            return None;
        }
        Some(Self(value))
    }

    /// Force an already-computed value onto the scale. NaN falls back to the
    /// neutral score.
    pub fn clamped(value: f64) -> Self {
        NotNan::new(value.clamp(1.0, 10.0))
            .map(Self)
            .unwrap_or(Self::NEUTRAL)
    }

    pub fn as_f64(&self) -> f64 {
        self.0.into_inner()
    }
}

impl std::cmp::PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl std::cmp::Ord for Score {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl std::fmt::Debug for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{:.1}", self.0)
        }
    }
}

/// A non-NaN f64 value in the range [0, 1]. A derived weight vector has
/// entries summing to 1.
#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Weight(NotNan<f64>);

impl Weight {
    pub const ZERO: Self = Self(unsafe { NotNan::new_unchecked(0.0) });

    pub fn new(value: f64) -> Option<Self> {
        let value = NotNan::new(value).ok()?;
        if value.is_sign_negative() || *value > 1.0 {
            return None;
        }
        Some(Self(value))
    }

    pub fn as_f64(&self) -> f64 {
        self.0.into_inner()
    }

    pub fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }
}

impl std::cmp::PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl std::cmp::Ord for Weight {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl std::fmt::Debug for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[track_caller]
pub fn assert_within(value: f64, expected: f64, tolerance: f64) {
    let diff = (value - expected).abs();
    assert!(
        diff <= tolerance,
        "Expected value of {expected} +- {tolerance} but got {value} which is off by {diff}",
    );
}
