use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Deref;
use uuid::Uuid;

use crate::{BlockID, Reps, UserID, Weight};

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionID(Uuid);

impl SessionID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SessionID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SessionID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletedSet {
    pub block_id: BlockID,
    pub exercise_id: String,
    pub set_index: u32,
    pub weight: Weight,
    pub reps: Reps,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSessionLog {
    pub id: SessionID,
    pub user_id: UserID,
    pub date: NaiveDate,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub completed_sets: Vec<CompletedSet>,
    pub conditioning_rounds: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl WorkoutSessionLog {
    #[must_use]
    pub fn exercises(&self) -> BTreeSet<&str> {
        self.completed_sets
            .iter()
            .map(|s| s.exercise_id.as_str())
            .collect()
    }

    #[must_use]
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.ended_at.map(|ended_at| ended_at - self.started_at)
    }
}
