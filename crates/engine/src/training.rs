use std::fmt;

use derive_more::{Display, Into};

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Clamp to the representable range, never rejecting.
    #[must_use]
    pub fn saturating(value: u32) -> Self {
        Self(value.min(999))
    }

    /// Multiply by a scaling factor, rounding to the nearest whole repetition.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self(
            (f32::from(self) * factor)
                .round()
                .clamp(0.0, 999.0) as u32,
        )
    }
}

impl From<Reps> for f32 {
    fn from(value: Reps) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let reps = value.0 as f32;
        reps
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        if (value * 10.0 % 1.0).abs() > f32::EPSILON {
            return Err(WeightError::InvalidResolution);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9")]
    OutOfRange,
    #[error("Weight must be a multiple of 0.1")]
    InvalidResolution,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Percent1RM(f32);

impl Percent1RM {
    pub const STEP: f32 = 2.5;
    pub const MAX: f32 = 150.0;

    pub fn new(value: f32) -> Result<Self, Percent1RMError> {
        if !(0.0..=Self::MAX).contains(&value) {
            return Err(Percent1RMError::OutOfRange);
        }

        let steps = value / Self::STEP;

        if (steps - steps.round()).abs() > 1e-4 {
            return Err(Percent1RMError::InvalidResolution);
        }

        Ok(Self(value))
    }

    /// Round to the nearest 2.5 step. Values beyond the representable range
    /// are clamped, never rejected.
    #[must_use]
    pub fn quantize(value: f32) -> Self {
        Self(((value / Self::STEP).round() * Self::STEP).clamp(0.0, Self::MAX))
    }

    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::quantize(self.0 * factor)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Percent1RMError {
    #[error("Percent of 1RM must be in the range 0.0 to 150.0")]
    OutOfRange,
    #[error("Percent of 1RM must be a multiple of 2.5")]
    InvalidResolution,
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rpe(u8);

impl Rpe {
    pub const MIN: Rpe = Rpe(10);
    pub const SIX: Rpe = Rpe(60);
    pub const SEVEN: Rpe = Rpe(70);
    pub const EIGHT: Rpe = Rpe(80);
    pub const NINE: Rpe = Rpe(90);
    pub const MAX: Rpe = Rpe(100);

    pub fn new(value: f32) -> Result<Self, RpeError> {
        if !(1.0..=10.0).contains(&value) {
            return Err(RpeError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (value * 10.0) as u8;

        if v % 5 != 0 {
            return Err(RpeError::InvalidResolution);
        }

        Ok(Self(v))
    }

    /// Round to the nearest 0.5 and clamp to the valid effort range, never
    /// rejecting.
    #[must_use]
    pub fn saturating(value: f32) -> Self {
        let tenths = ((value * 2.0).round() * 5.0).clamp(10.0, 100.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self(tenths as u8)
    }

    /// Multiply by a scaling factor, rounding to the nearest 0.5 and clamping
    /// to the valid effort range.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::saturating(f32::from(self) * factor)
    }
}

impl From<Rpe> for f32 {
    fn from(value: Rpe) -> Self {
        f32::from(value.0) / 10.0
    }
}

impl fmt::Display for Rpe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", f32::from(*self))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RpeError {
    #[error("RPE must be in the range 1.0 to 10.0")]
    OutOfRange,
    #[error("RPE must be a multiple of 0.5")]
    InvalidResolution,
}

#[derive(Debug, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Zone(u8);

impl Zone {
    pub const Z1: Zone = Zone(1);
    pub const Z2: Zone = Zone(2);
    pub const Z3: Zone = Zone(3);
    pub const Z4: Zone = Zone(4);
    pub const Z5: Zone = Zone(5);

    pub fn new(value: u8) -> Result<Self, ZoneError> {
        if !(1..=5).contains(&value) {
            return Err(ZoneError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Multiply the intensity by a scaling factor, rounding to the nearest
    /// zone and clamping to Z1-Z5.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        let intensity = (f32::from(self.0) * factor).round().clamp(1.0, 5.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self(intensity as u8)
    }
}

impl TryFrom<&str> for Zone {
    type Error = ZoneError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.strip_prefix('Z').map(str::parse::<u8>) {
            Some(Ok(parsed_value)) => Zone::new(parsed_value),
            _ => Err(ZoneError::ParseError),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z{}", self.0)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ZoneError {
    #[error("Zone must be in the range Z1 to Z5")]
    OutOfRange,
    #[error("Zone must have the form Z<1-5>")]
    ParseError,
}
