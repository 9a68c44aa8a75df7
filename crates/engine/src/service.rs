use std::collections::BTreeMap;

use log::debug;

use crate::{
    AdaptationMode, PersonalRecord, PlanParams, Readiness, ReadinessInput, ReadinessScore,
    TrainingCycle, WorkoutPlanDay, WorkoutSessionLog, adaptation, catalog, catalog::Exercise,
    cycle, readiness, records,
};

/// Facade bundling the static exercise catalog with the engine's operations.
/// All methods are pure computations over their arguments; callers own the
/// resulting data.
pub struct Engine {
    exercises: &'static BTreeMap<&'static str, Exercise>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            exercises: catalog::exercises(),
        }
    }

    /// Use an alternative exercise catalog instead of the built-in one.
    #[must_use]
    pub fn with_exercises(exercises: &'static BTreeMap<&'static str, Exercise>) -> Self {
        Self { exercises }
    }

    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn calculate_readiness(&self, input: &ReadinessInput) -> Readiness {
        let readiness = readiness::calculate_readiness(input);
        debug!("readiness score {}", readiness.score);
        readiness
    }

    #[must_use]
    pub fn generate_microcycle(&self, params: &PlanParams) -> [WorkoutPlanDay; 7] {
        debug!(
            "generating microcycle starting {} with {} training days",
            params.start, params.training_days
        );
        cycle::generate_microcycle(params, self.exercises)
    }

    #[must_use]
    pub fn generate_training_cycle(&self, params: &PlanParams, weeks: u32) -> TrainingCycle {
        debug!("generating training cycle of {weeks} weeks starting {}", params.start);
        cycle::generate_training_cycle(params, weeks, self.exercises)
    }

    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn adjust_workout_for_today(
        &self,
        day: &WorkoutPlanDay,
        readiness: ReadinessScore,
        mode: AdaptationMode,
        scaling_enabled: bool,
    ) -> WorkoutPlanDay {
        debug!("adjusting workout of {} for readiness {readiness}", day.date);
        adaptation::adjust_workout_for_today(day, readiness, mode, scaling_enabled)
    }

    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn estimate_one_rep_max(&self, weight: f32, reps: u32) -> f32 {
        records::estimate_one_rep_max(weight, reps)
    }

    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn detect_new_prs(
        &self,
        session: &WorkoutSessionLog,
        existing_records: &[PersonalRecord],
    ) -> Vec<PersonalRecord> {
        let new_records = records::detect_new_prs(session, existing_records);
        debug!("detected {} new personal records", new_records.len());
        new_records
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
