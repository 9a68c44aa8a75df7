use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, Utc};
use log::debug;

use crate::{
    BlockID, BlockKind, ConditioningMode, ConditioningPrescription, Equipment, ExercisePrescription,
    ExperienceLevel, Focus, Goal, MovementPattern, Percent1RM, PlanDayID, Property, Reps, Rpe,
    SetPrescription, TimeAvailability, Units, UserID, Weight, WorkoutBlock, WorkoutPlanDay, Zone,
    catalog::Exercise,
};

const WARMUP_ITEMS: [&str; 4] = [
    "Jump rope or jog in place",
    "Arm circles",
    "Leg swings",
    "Bodyweight squats",
];

const COOLDOWN_ITEMS: [&str; 4] = [
    "Easy walk",
    "Quad stretch",
    "Hamstring stretch",
    "Deep breathing",
];

const ACCESSORY_SETS: usize = 3;
const ACCESSORY_REPS: u32 = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct DailyWorkoutParams {
    pub user_id: UserID,
    pub date: NaiveDate,
    pub goal: Goal,
    pub experience: ExperienceLevel,
    pub equipment: BTreeSet<Equipment>,
    pub units: Units,
    pub time_availability: TimeAvailability,
    /// Known one-rep maxima keyed by exercise id.
    pub strength_numbers: BTreeMap<String, Weight>,
}

/// Assemble one day's ordered block sequence. Exercise selection degrades to
/// equipment-free entries under restrictive equipment and never fails; blocks
/// without any selectable exercise are omitted.
#[must_use]
pub fn generate_daily_workout(
    params: &DailyWorkoutParams,
    exercises: &BTreeMap<&'static str, Exercise>,
) -> WorkoutPlanDay {
    let id = PlanDayID::derive(params.user_id, params.date);
    let focus = focus_of(params.goal);
    let mut used = BTreeSet::new();

    let mut kinds = Vec::with_capacity(5);
    kinds.push(BlockKind::Warmup {
        items: WARMUP_ITEMS.iter().map(ToString::to_string).collect(),
    });
    if let Some(kind) = strength_block(params, exercises, &mut used) {
        kinds.push(kind);
    }
    if let Some(kind) = accessory_block(params, exercises, &mut used) {
        kinds.push(kind);
    }
    kinds.push(BlockKind::Conditioning(conditioning(params.goal)));
    kinds.push(BlockKind::Cooldown {
        items: COOLDOWN_ITEMS.iter().map(ToString::to_string).collect(),
    });

    WorkoutPlanDay {
        id,
        user_id: params.user_id,
        date: params.date,
        day_index: 0,
        focus: vec![focus],
        blocks: kinds
            .into_iter()
            .enumerate()
            .map(|(index, kind)| WorkoutBlock {
                id: BlockID::derive(id, index),
                kind,
            })
            .collect(),
        estimated_duration_minutes: focus.duration_minutes(),
        adjusted_for_readiness: false,
        created_at: Utc::now(),
    }
}

fn focus_of(goal: Goal) -> Focus {
    match goal {
        Goal::Strength => Focus::Strength,
        Goal::Conditioning => Focus::Conditioning,
        Goal::Hybrid | Goal::General => Focus::Mixed,
    }
}

/// Movement patterns for the strength block, most important first. The first
/// selectable pattern provides the main lift, the following ones the
/// secondary lifts.
fn strength_patterns(goal: Goal) -> &'static [MovementPattern] {
    match goal {
        Goal::Strength => &[
            MovementPattern::Squat,
            MovementPattern::Push,
            MovementPattern::Hinge,
            MovementPattern::Pull,
        ],
        Goal::Conditioning => &[
            MovementPattern::Hinge,
            MovementPattern::Pull,
            MovementPattern::Squat,
            MovementPattern::Push,
        ],
        Goal::Hybrid => &[
            MovementPattern::Hinge,
            MovementPattern::Squat,
            MovementPattern::Push,
            MovementPattern::Pull,
        ],
        Goal::General => &[
            MovementPattern::Squat,
            MovementPattern::Hinge,
            MovementPattern::Push,
            MovementPattern::Pull,
        ],
    }
}

const ACCESSORY_PATTERNS: [MovementPattern; 4] = [
    MovementPattern::Lunge,
    MovementPattern::Core,
    MovementPattern::Carry,
    MovementPattern::Pull,
];

fn secondary_lift_count(experience: ExperienceLevel) -> usize {
    match experience {
        ExperienceLevel::Beginner => 1,
        ExperienceLevel::Intermediate => 2,
        ExperienceLevel::Advanced => 3,
    }
}

fn accessory_count(time_availability: TimeAvailability) -> usize {
    match time_availability {
        TimeAvailability::Short => 2,
        TimeAvailability::Standard => 3,
        TimeAvailability::Extended => 4,
    }
}

struct SetScheme {
    sets: usize,
    reps: Reps,
    percent_1rm: Percent1RM,
    rpe: Rpe,
}

impl SetScheme {
    fn new(sets: usize, reps: u32, percent_1rm: f32, rpe: f32) -> Self {
        Self {
            sets,
            reps: Reps::saturating(reps),
            percent_1rm: Percent1RM::quantize(percent_1rm),
            rpe: Rpe::saturating(rpe),
        }
    }
}

fn main_scheme(goal: Goal, experience: ExperienceLevel) -> SetScheme {
    let (sets, reps, percent_1rm, rpe) = match (goal, experience) {
        (Goal::Strength, ExperienceLevel::Beginner) => (3, 5, 70.0, 7.0),
        (Goal::Strength, ExperienceLevel::Intermediate) => (4, 5, 77.5, 7.5),
        (Goal::Strength, ExperienceLevel::Advanced) => (5, 3, 85.0, 8.0),
        (Goal::Conditioning, ExperienceLevel::Beginner) => (3, 10, 57.5, 6.0),
        (Goal::Conditioning, ExperienceLevel::Intermediate) => (3, 8, 65.0, 6.5),
        (Goal::Conditioning, ExperienceLevel::Advanced) => (4, 8, 67.5, 7.0),
        (Goal::Hybrid, ExperienceLevel::Beginner) => (3, 8, 65.0, 6.5),
        (Goal::Hybrid, ExperienceLevel::Intermediate) => (4, 6, 72.5, 7.0),
        (Goal::Hybrid, ExperienceLevel::Advanced) => (5, 5, 77.5, 7.5),
        (Goal::General, ExperienceLevel::Beginner) => (3, 8, 62.5, 6.0),
        (Goal::General, ExperienceLevel::Intermediate) => (3, 6, 70.0, 7.0),
        (Goal::General, ExperienceLevel::Advanced) => (4, 5, 75.0, 7.5),
    };
    SetScheme::new(sets, reps, percent_1rm, rpe)
}

fn secondary_scheme(experience: ExperienceLevel) -> SetScheme {
    let (sets, reps) = match experience {
        ExperienceLevel::Beginner => (2, 8),
        ExperienceLevel::Intermediate => (3, 8),
        ExperienceLevel::Advanced => (3, 6),
    };
    SetScheme::new(sets, reps, 65.0, 6.5)
}

/// Pick an unused exercise of the given movement pattern, preferring loaded
/// lifts over bodyweight ones.
fn select_exercise<'a>(
    exercises: &'a BTreeMap<&'static str, Exercise>,
    pattern: MovementPattern,
    owned: &BTreeSet<Equipment>,
    used: &BTreeSet<&'static str>,
) -> Option<&'a Exercise> {
    let usable = exercises
        .values()
        .filter(|e| e.pattern == pattern && !used.contains(e.id) && e.usable_with(owned))
        .collect::<Vec<_>>();

    if let Some(exercise) = usable.iter().find(|e| !e.equipment.is_empty()).copied() {
        return Some(exercise);
    }

    let fallback = usable.into_iter().next();
    if let Some(exercise) = fallback {
        debug!(
            "no loaded {} exercise usable, falling back to {}",
            pattern.name(),
            exercise.id
        );
    }
    fallback
}

/// Strength sets target a percentage of the one-rep maximum when one is
/// known for the lift, a subjective effort otherwise.
fn prescription(
    exercise: &Exercise,
    scheme: &SetScheme,
    strength_numbers: &BTreeMap<String, Weight>,
) -> ExercisePrescription {
    let known_1rm = strength_numbers.contains_key(exercise.id);
    ExercisePrescription {
        exercise_id: exercise.id.to_string(),
        sets: vec![
            SetPrescription {
                target_reps: scheme.reps,
                target_percent_1rm: known_1rm.then_some(scheme.percent_1rm),
                target_rpe: (!known_1rm).then_some(scheme.rpe),
            };
            scheme.sets
        ],
    }
}

fn strength_block(
    params: &DailyWorkoutParams,
    exercises: &BTreeMap<&'static str, Exercise>,
    used: &mut BTreeSet<&'static str>,
) -> Option<BlockKind> {
    let mut lifts = strength_patterns(params.goal).iter().filter_map(|&pattern| {
        let exercise = select_exercise(exercises, pattern, &params.equipment, used)?;
        used.insert(exercise.id);
        Some(exercise)
    });

    let main = prescription(
        lifts.next()?,
        &main_scheme(params.goal, params.experience),
        &params.strength_numbers,
    );
    let secondary = lifts
        .take(secondary_lift_count(params.experience))
        .map(|e| {
            prescription(
                e,
                &secondary_scheme(params.experience),
                &params.strength_numbers,
            )
        })
        .collect();

    Some(BlockKind::Strength { main, secondary })
}

fn accessory_block(
    params: &DailyWorkoutParams,
    exercises: &BTreeMap<&'static str, Exercise>,
    used: &mut BTreeSet<&'static str>,
) -> Option<BlockKind> {
    let items = ACCESSORY_PATTERNS
        .iter()
        .filter_map(|&pattern| {
            let exercise = select_exercise(exercises, pattern, &params.equipment, used)?;
            used.insert(exercise.id);
            Some(ExercisePrescription {
                exercise_id: exercise.id.to_string(),
                sets: vec![
                    SetPrescription {
                        target_reps: Reps::saturating(ACCESSORY_REPS),
                        target_percent_1rm: None,
                        target_rpe: None,
                    };
                    ACCESSORY_SETS
                ],
            })
        })
        .take(accessory_count(params.time_availability))
        .collect::<Vec<_>>();

    (!items.is_empty()).then_some(BlockKind::Accessory { items })
}

fn conditioning(goal: Goal) -> ConditioningPrescription {
    match goal {
        Goal::Strength => ConditioningPrescription {
            mode: ConditioningMode::Steady,
            work_seconds: Some(600),
            rest_seconds: None,
            rounds: None,
            target_zone: Some(Zone::Z2),
            notes: Some("Easy effort, nasal breathing".to_string()),
        },
        Goal::Conditioning => ConditioningPrescription {
            mode: ConditioningMode::Interval,
            work_seconds: Some(60),
            rest_seconds: Some(60),
            rounds: Some(10),
            target_zone: Some(Zone::Z4),
            notes: None,
        },
        Goal::Hybrid => ConditioningPrescription {
            mode: ConditioningMode::Interval,
            work_seconds: Some(90),
            rest_seconds: Some(90),
            rounds: Some(6),
            target_zone: Some(Zone::Z3),
            notes: None,
        },
        Goal::General => ConditioningPrescription {
            mode: ConditioningMode::Steady,
            work_seconds: Some(1200),
            rest_seconds: None,
            rounds: None,
            target_zone: Some(Zone::Z2),
            notes: Some("Any modality, conversational pace".to_string()),
        },
    }
}
