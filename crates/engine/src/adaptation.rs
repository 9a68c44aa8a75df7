use crate::{
    AdaptationMode, BlockKind, ConditioningPrescription, ExercisePrescription, ReadinessScore,
    SetPrescription, WorkoutBlock, WorkoutPlanDay,
};

/// Rep targets at or above this value are time-like (holds, carries) and are
/// left unscaled.
const REP_SCALING_LIMIT: u32 = 20;

/// Accessory volume reacts at half the strength of the load scaler.
const VOLUME_DAMPING: f32 = 0.5;

fn base_scaler(readiness: ReadinessScore) -> f32 {
    let score = f32::from(readiness);
    if score < 40.0 {
        0.75
    } else if score < 60.0 {
        0.90
    } else if score <= 80.0 {
        1.00
    } else {
        1.10
    }
}

fn mode_multiplier(mode: AdaptationMode) -> f32 {
    match mode {
        AdaptationMode::Conservative => 0.90,
        AdaptationMode::Automatic => 1.00,
        AdaptationMode::Aggressive => 1.15,
    }
}

/// Rescale a day's numeric prescriptions by readiness. The input is never
/// mutated; the returned day is a new value with `adjusted_for_readiness`
/// set. With scaling disabled the day is returned value-equal and unflagged.
/// Every transform re-derives from the argument, so adapting the original
/// day twice equals adapting it once.
#[must_use]
pub fn adjust_workout_for_today(
    day: &WorkoutPlanDay,
    readiness: ReadinessScore,
    mode: AdaptationMode,
    scaling_enabled: bool,
) -> WorkoutPlanDay {
    if !scaling_enabled {
        return day.clone();
    }

    let scaler = base_scaler(readiness) * mode_multiplier(mode);
    let volume_scaler = (scaler - 1.0).mul_add(VOLUME_DAMPING, 1.0);

    WorkoutPlanDay {
        blocks: day
            .blocks
            .iter()
            .map(|block| scaled_block(block, scaler, volume_scaler))
            .collect(),
        adjusted_for_readiness: true,
        ..day.clone()
    }
}

fn scaled_block(block: &WorkoutBlock, scaler: f32, volume_scaler: f32) -> WorkoutBlock {
    let kind = match &block.kind {
        BlockKind::Warmup { .. } | BlockKind::Cooldown { .. } => block.kind.clone(),
        BlockKind::Strength { main, secondary } => BlockKind::Strength {
            main: scaled_prescription(main, scaler, scaler),
            secondary: secondary
                .iter()
                .map(|prescription| scaled_prescription(prescription, scaler, scaler))
                .collect(),
        },
        BlockKind::Accessory { items } => BlockKind::Accessory {
            items: items
                .iter()
                .map(|prescription| scaled_prescription(prescription, scaler, volume_scaler))
                .collect(),
        },
        BlockKind::Conditioning(conditioning) => {
            BlockKind::Conditioning(ConditioningPrescription {
                target_zone: conditioning.target_zone.map(|zone| zone.scaled(scaler)),
                ..conditioning.clone()
            })
        }
    };

    WorkoutBlock { id: block.id, kind }
}

fn scaled_prescription(
    prescription: &ExercisePrescription,
    load_scaler: f32,
    rep_scaler: f32,
) -> ExercisePrescription {
    ExercisePrescription {
        exercise_id: prescription.exercise_id.clone(),
        sets: prescription
            .sets
            .iter()
            .map(|set| scaled_set(set, load_scaler, rep_scaler))
            .collect(),
    }
}

fn scaled_set(set: &SetPrescription, load_scaler: f32, rep_scaler: f32) -> SetPrescription {
    SetPrescription {
        target_reps: if u32::from(set.target_reps) < REP_SCALING_LIMIT {
            set.target_reps.scaled(rep_scaler)
        } else {
            set.target_reps
        },
        target_percent_1rm: set
            .target_percent_1rm
            .map(|percent| percent.scaled(load_scaler)),
        target_rpe: set.target_rpe.map(|rpe| rpe.scaled(load_scaler)),
    }
}
