use std::{collections::BTreeSet, slice::Iter};

use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Deref;
use uuid::Uuid;

use crate::{Goal, Percent1RM, Property, Reps, Rpe, UserID, Zone};

/// Namespace for deriving plan entity identifiers. Generation must stay
/// deterministic, so identifiers are UUIDv5 values over this namespace
/// instead of random UUIDs.
const ID_NAMESPACE: Uuid = Uuid::from_u128(0x8e46_5d6b_52d3_4d9c_9b1a_7f02_36c4_55e1);

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlanDayID(Uuid);

impl PlanDayID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Identifier of the plan day owned by `user` on `date`. Stable across
    /// repeated generation with identical inputs.
    #[must_use]
    pub fn derive(user: UserID, date: NaiveDate) -> Self {
        let mut name = Vec::with_capacity(26);
        name.extend_from_slice(user.as_bytes());
        name.extend_from_slice(date.to_string().as_bytes());
        Self(Uuid::new_v5(&ID_NAMESPACE, &name))
    }
}

impl From<Uuid> for PlanDayID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PlanDayID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BlockID(Uuid);

impl BlockID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    #[must_use]
    pub fn derive(day: PlanDayID, index: usize) -> Self {
        let mut name = Vec::with_capacity(24);
        name.extend_from_slice(day.as_bytes());
        name.extend_from_slice(index.to_string().as_bytes());
        Self(Uuid::new_v5(&ID_NAMESPACE, &name))
    }
}

impl From<Uuid> for BlockID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for BlockID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Focus {
    Strength,
    Conditioning,
    Mixed,
    Rest,
}

impl Focus {
    /// Estimated session length for a day with this focus.
    #[must_use]
    pub fn duration_minutes(self) -> u32 {
        match self {
            Focus::Strength => 50,
            Focus::Conditioning => 35,
            Focus::Mixed => 60,
            Focus::Rest => 0,
        }
    }

    /// The workout goal a training day with this focus is generated for.
    #[must_use]
    pub fn goal(self) -> Option<Goal> {
        match self {
            Focus::Strength => Some(Goal::Strength),
            Focus::Conditioning => Some(Goal::Conditioning),
            Focus::Mixed => Some(Goal::Hybrid),
            Focus::Rest => None,
        }
    }
}

impl Property for Focus {
    fn iter() -> Iter<'static, Focus> {
        static FOCUSES: [Focus; 4] = [
            Focus::Strength,
            Focus::Conditioning,
            Focus::Mixed,
            Focus::Rest,
        ];
        FOCUSES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Focus::Strength => "Strength",
            Focus::Conditioning => "Conditioning",
            Focus::Mixed => "Mixed",
            Focus::Rest => "Rest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetPrescription {
    pub target_reps: Reps,
    pub target_percent_1rm: Option<Percent1RM>,
    pub target_rpe: Option<Rpe>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExercisePrescription {
    pub exercise_id: String,
    pub sets: Vec<SetPrescription>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConditioningMode {
    Interval,
    Steady,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditioningPrescription {
    pub mode: ConditioningMode,
    pub work_seconds: Option<u32>,
    pub rest_seconds: Option<u32>,
    pub rounds: Option<u32>,
    pub target_zone: Option<Zone>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    Warmup {
        items: Vec<String>,
    },
    Strength {
        main: ExercisePrescription,
        secondary: Vec<ExercisePrescription>,
    },
    Accessory {
        items: Vec<ExercisePrescription>,
    },
    Conditioning(ConditioningPrescription),
    Cooldown {
        items: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutBlock {
    pub id: BlockID,
    pub kind: BlockKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutPlanDay {
    pub id: PlanDayID,
    pub user_id: UserID,
    pub date: NaiveDate,
    /// Offset of this day within its cycle, 0 being the start day.
    pub day_index: u32,
    pub focus: Vec<Focus>,
    pub blocks: Vec<WorkoutBlock>,
    pub estimated_duration_minutes: u32,
    pub adjusted_for_readiness: bool,
    pub created_at: DateTime<Utc>,
}

impl WorkoutPlanDay {
    #[must_use]
    pub fn is_rest(&self) -> bool {
        self.blocks.is_empty()
    }

    #[must_use]
    pub fn exercises(&self) -> BTreeSet<&str> {
        self.blocks
            .iter()
            .flat_map(|block| match &block.kind {
                BlockKind::Strength { main, secondary } => std::iter::once(main)
                    .chain(secondary)
                    .map(|p| p.exercise_id.as_str())
                    .collect::<Vec<_>>(),
                BlockKind::Accessory { items } => {
                    items.iter().map(|p| p.exercise_id.as_str()).collect()
                }
                BlockKind::Warmup { .. }
                | BlockKind::Conditioning(_)
                | BlockKind::Cooldown { .. } => Vec::new(),
            })
            .collect()
    }

    #[must_use]
    pub fn num_sets(&self) -> usize {
        self.blocks
            .iter()
            .map(|block| match &block.kind {
                BlockKind::Strength { main, secondary } => {
                    main.sets.len() + secondary.iter().map(|p| p.sets.len()).sum::<usize>()
                }
                BlockKind::Accessory { items } => items.iter().map(|p| p.sets.len()).sum(),
                BlockKind::Warmup { .. }
                | BlockKind::Conditioning(_)
                | BlockKind::Cooldown { .. } => 0,
            })
            .sum()
    }
}
