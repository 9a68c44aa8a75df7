use derive_more::{Display, Into};

const SLEEP_WEIGHT: f32 = 0.30;
const ENERGY_WEIGHT: f32 = 0.30;
const SORENESS_WEIGHT: f32 = 0.20;
const STRESS_WEIGHT: f32 = 0.20;

/// A subjective 1-5 rating from the daily check-in.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Result<Self, RatingError> {
        if !(1..=5).contains(&value) {
            return Err(RatingError::OutOfRange(value));
        }

        Ok(Self(value))
    }

    /// Rescale from [1, 5] to [0, 100].
    #[must_use]
    pub fn normalized(self) -> f32 {
        f32::from(self.0 - 1) / 4.0 * 100.0
    }

    /// Rescale and invert, for ratings where a higher value means worse
    /// readiness.
    #[must_use]
    pub fn inverted(self) -> f32 {
        100.0 - self.normalized()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RatingError {
    #[error("Rating must be in the range 1 to 5 ({0} is not)")]
    OutOfRange(u8),
}

#[derive(Debug, Display, Default, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReadinessScore(u8);

impl ReadinessScore {
    pub fn new(value: u8) -> Result<Self, ReadinessScoreError> {
        if value > 100 {
            return Err(ReadinessScoreError::OutOfRange(value));
        }

        Ok(Self(value))
    }

    /// Round and clamp to [0, 100].
    #[must_use]
    pub fn saturating(value: f32) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self(value.round().clamp(0.0, 100.0) as u8)
    }
}

impl From<ReadinessScore> for f32 {
    fn from(value: ReadinessScore) -> Self {
        f32::from(value.0)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ReadinessScoreError {
    #[error("Readiness score must be 100 or less ({0} > 100)")]
    OutOfRange(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessInput {
    pub sleep_quality: Rating,
    pub energy: Rating,
    pub soreness: Rating,
    pub stress: Rating,
}

/// The normalized factor values entering the weighted sum. Soreness and
/// stress are already inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadinessFactors {
    pub sleep_quality: f32,
    pub energy: f32,
    pub soreness: f32,
    pub stress: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readiness {
    pub score: ReadinessScore,
    pub factors: ReadinessFactors,
}

#[must_use]
pub fn calculate_readiness(input: &ReadinessInput) -> Readiness {
    let factors = ReadinessFactors {
        sleep_quality: input.sleep_quality.normalized(),
        energy: input.energy.normalized(),
        soreness: input.soreness.inverted(),
        stress: input.stress.inverted(),
    };

    let sum = factors.sleep_quality * SLEEP_WEIGHT
        + factors.energy * ENERGY_WEIGHT
        + factors.soreness * SORENESS_WEIGHT
        + factors.stress * STRESS_WEIGHT;

    Readiness {
        score: ReadinessScore::saturating(sum),
        factors,
    }
}
