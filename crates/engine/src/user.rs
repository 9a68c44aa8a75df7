use std::{collections::BTreeMap, collections::BTreeSet, fmt, slice::Iter};

use chrono::{DateTime, NaiveDate, Utc};
use derive_more::{AsRef, Deref, Display, Into};
use uuid::Uuid;

use crate::{Equipment, Property, Weight};

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserID(Uuid);

impl UserID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for UserID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for UserID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: UserID,
    pub name: Name,
    pub units: Units,
    pub preferences: Preferences,
    /// Known one-rep maxima keyed by exercise id.
    pub strength_numbers: BTreeMap<String, Weight>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub goal: Goal,
    pub experience: ExperienceLevel,
    pub training_days: TrainingDays,
    pub time_availability: TimeAvailability,
    pub equipment: BTreeSet<Equipment>,
    pub adaptation_mode: AdaptationMode,
    pub readiness_scaling: bool,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Goal {
    Strength,
    Conditioning,
    Hybrid,
    General,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 4] = [
            Goal::Strength,
            Goal::Conditioning,
            Goal::Hybrid,
            Goal::General,
        ];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Strength => "Strength",
            Goal::Conditioning => "Conditioning",
            Goal::Hybrid => "Hybrid",
            Goal::General => "General Fitness",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for ExperienceLevel {
    fn iter() -> Iter<'static, ExperienceLevel> {
        static LEVELS: [ExperienceLevel; 3] = [
            ExperienceLevel::Beginner,
            ExperienceLevel::Intermediate,
            ExperienceLevel::Advanced,
        ];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum TimeAvailability {
    Short,
    Standard,
    Extended,
}

impl Property for TimeAvailability {
    fn iter() -> Iter<'static, TimeAvailability> {
        static TIERS: [TimeAvailability; 3] = [
            TimeAvailability::Short,
            TimeAvailability::Standard,
            TimeAvailability::Extended,
        ];
        TIERS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            TimeAvailability::Short => "Short",
            TimeAvailability::Standard => "Standard",
            TimeAvailability::Extended => "Extended",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AdaptationMode {
    Conservative,
    Automatic,
    Aggressive,
}

impl Property for AdaptationMode {
    fn iter() -> Iter<'static, AdaptationMode> {
        static MODES: [AdaptationMode; 3] = [
            AdaptationMode::Conservative,
            AdaptationMode::Automatic,
            AdaptationMode::Aggressive,
        ];
        MODES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            AdaptationMode::Conservative => "Conservative",
            AdaptationMode::Automatic => "Automatic",
            AdaptationMode::Aggressive => "Aggressive",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Units {
    Metric,
    Imperial,
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Units::Metric => "kg",
                Units::Imperial => "lb",
            }
        )
    }
}

/// Explicit configuration for plan generation. Built from a profile without
/// mutating it; the engine itself holds no ambient state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanParams {
    pub user_id: UserID,
    pub start: NaiveDate,
    pub goal: Goal,
    pub experience: ExperienceLevel,
    pub training_days: TrainingDays,
    pub time_availability: TimeAvailability,
    pub equipment: BTreeSet<Equipment>,
    pub units: Units,
    /// Known one-rep maxima keyed by exercise id.
    pub strength_numbers: BTreeMap<String, Weight>,
}

impl PlanParams {
    #[must_use]
    pub fn for_user(profile: &UserProfile, start: NaiveDate) -> Self {
        Self {
            user_id: profile.id,
            start,
            goal: profile.preferences.goal,
            experience: profile.preferences.experience,
            training_days: profile.preferences.training_days,
            time_availability: profile.preferences.time_availability,
            equipment: profile.preferences.equipment.clone(),
            units: profile.units,
            strength_numbers: profile.strength_numbers.clone(),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct TrainingDays(u8);

impl TrainingDays {
    pub fn new(value: u8) -> Result<Self, TrainingDaysError> {
        if !(3..=7).contains(&value) {
            return Err(TrainingDaysError::OutOfRange(value));
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TrainingDaysError {
    #[error("Weekly training days must be in the range 3 to 7 ({0} is not)")]
    OutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_user_id_nil() {
        assert!(UserID::nil().is_nil());
        assert_eq!(UserID::nil(), UserID::default());
    }

    #[rstest]
    #[case("Alice", Ok(Name("Alice".to_string())))]
    #[case("  Bob  ", Ok(Name("Bob".to_string())))]
    #[case("", Err(NameError::Empty))]
    #[case(
        "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        Err(NameError::TooLong(65))
    )]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[test]
    fn test_plan_params_for_user() {
        let profile = UserProfile {
            id: UserID::from(1),
            name: Name::new("Alice").unwrap(),
            units: Units::Metric,
            preferences: Preferences {
                goal: Goal::Hybrid,
                experience: ExperienceLevel::Intermediate,
                training_days: TrainingDays::new(4).unwrap(),
                time_availability: TimeAvailability::Standard,
                equipment: BTreeSet::from([Equipment::Barbell, Equipment::PullUpBar]),
                adaptation_mode: AdaptationMode::Automatic,
                readiness_scaling: true,
            },
            strength_numbers: BTreeMap::from([(
                "back-squat".to_string(),
                Weight::new(120.0).unwrap(),
            )]),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();

        let params = PlanParams::for_user(&profile, start);

        assert_eq!(params.user_id, profile.id);
        assert_eq!(params.start, start);
        assert_eq!(params.goal, Goal::Hybrid);
        assert_eq!(params.experience, ExperienceLevel::Intermediate);
        assert_eq!(params.training_days, TrainingDays::new(4).unwrap());
        assert_eq!(params.equipment, profile.preferences.equipment);
        assert_eq!(params.strength_numbers, profile.strength_numbers);
    }

    #[rstest]
    #[case(3, Ok(TrainingDays(3)))]
    #[case(7, Ok(TrainingDays(7)))]
    #[case(2, Err(TrainingDaysError::OutOfRange(2)))]
    #[case(8, Err(TrainingDaysError::OutOfRange(8)))]
    fn test_training_days_new(
        #[case] value: u8,
        #[case] expected: Result<TrainingDays, TrainingDaysError>,
    ) {
        assert_eq!(TrainingDays::new(value), expected);
    }

    #[rstest]
    #[case(Units::Metric, "kg")]
    #[case(Units::Imperial, "lb")]
    fn test_units_display(#[case] units: Units, #[case] expected: &str) {
        assert_eq!(units.to_string(), expected);
    }
}
