use std::{
    collections::{BTreeMap, BTreeSet},
    sync::LazyLock,
};

use crate::{Equipment, MovementPattern, MuscleID};

#[derive(Clone, Debug)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub pattern: MovementPattern,
    pub equipment: &'static [Equipment],
    pub muscles: &'static [MuscleID],
}

impl Exercise {
    /// An exercise is usable when it requires no equipment or when any of its
    /// required equipment is owned.
    #[must_use]
    pub fn usable_with(&self, owned: &BTreeSet<Equipment>) -> bool {
        self.equipment.is_empty() || self.equipment.iter().any(|e| owned.contains(e))
    }
}

pub static EXERCISES: LazyLock<BTreeMap<&'static str, Exercise>> =
    LazyLock::new(|| ENTRIES.iter().map(|e| (e.id, e.clone())).collect());

#[must_use]
pub fn exercises() -> &'static BTreeMap<&'static str, Exercise> {
    &EXERCISES
}

#[must_use]
pub fn exercise(id: &str) -> Option<&'static Exercise> {
    EXERCISES.get(id)
}

const ENTRIES: [Exercise; 30] = [
    Exercise {
        id: "ab-rollout",
        name: "Ab Rollout",
        pattern: MovementPattern::Core,
        equipment: &[Equipment::Barbell],
        muscles: &[MuscleID::Abs],
    },
    Exercise {
        id: "air-squat",
        name: "Air Squat",
        pattern: MovementPattern::Squat,
        equipment: &[],
        muscles: &[MuscleID::Quads, MuscleID::Glutes],
    },
    Exercise {
        id: "back-squat",
        name: "Barbell Back Squat",
        pattern: MovementPattern::Squat,
        equipment: &[Equipment::Barbell],
        muscles: &[MuscleID::Quads, MuscleID::Glutes, MuscleID::ErectorSpinae],
    },
    Exercise {
        id: "band-row",
        name: "Resistance Band Row",
        pattern: MovementPattern::Pull,
        equipment: &[Equipment::ResistanceBand],
        muscles: &[MuscleID::Lats, MuscleID::Biceps],
    },
    Exercise {
        id: "barbell-row",
        name: "Barbell Row",
        pattern: MovementPattern::Pull,
        equipment: &[Equipment::Barbell],
        muscles: &[MuscleID::Lats, MuscleID::Traps, MuscleID::Biceps],
    },
    Exercise {
        id: "bear-crawl",
        name: "Bear Crawl",
        pattern: MovementPattern::Carry,
        equipment: &[],
        muscles: &[MuscleID::Abs, MuscleID::FrontDelts, MuscleID::Quads],
    },
    Exercise {
        id: "bench-press",
        name: "Barbell Bench Press",
        pattern: MovementPattern::Push,
        equipment: &[Equipment::Barbell],
        muscles: &[MuscleID::Pecs, MuscleID::FrontDelts, MuscleID::Triceps],
    },
    Exercise {
        id: "bulgarian-split-squat",
        name: "Bulgarian Split Squat",
        pattern: MovementPattern::Lunge,
        equipment: &[Equipment::Dumbbell, Equipment::Box],
        muscles: &[MuscleID::Quads, MuscleID::Glutes],
    },
    Exercise {
        id: "cable-crunch",
        name: "Cable Crunch",
        pattern: MovementPattern::Core,
        equipment: &[Equipment::Cable],
        muscles: &[MuscleID::Abs],
    },
    Exercise {
        id: "deadlift",
        name: "Barbell Deadlift",
        pattern: MovementPattern::Hinge,
        equipment: &[Equipment::Barbell],
        muscles: &[
            MuscleID::ErectorSpinae,
            MuscleID::Glutes,
            MuscleID::Hamstrings,
        ],
    },
    Exercise {
        id: "dumbbell-bench-press",
        name: "Dumbbell Bench Press",
        pattern: MovementPattern::Push,
        equipment: &[Equipment::Dumbbell],
        muscles: &[MuscleID::Pecs, MuscleID::FrontDelts, MuscleID::Triceps],
    },
    Exercise {
        id: "dumbbell-row",
        name: "Dumbbell Row",
        pattern: MovementPattern::Pull,
        equipment: &[Equipment::Dumbbell],
        muscles: &[MuscleID::Lats, MuscleID::Biceps],
    },
    Exercise {
        id: "farmers-carry",
        name: "Farmer's Carry",
        pattern: MovementPattern::Carry,
        equipment: &[Equipment::Dumbbell, Equipment::Kettlebell],
        muscles: &[MuscleID::Forearms, MuscleID::Traps, MuscleID::Abs],
    },
    Exercise {
        id: "front-squat",
        name: "Barbell Front Squat",
        pattern: MovementPattern::Squat,
        equipment: &[Equipment::Barbell],
        muscles: &[MuscleID::Quads, MuscleID::Abs],
    },
    Exercise {
        id: "glute-bridge",
        name: "Glute Bridge",
        pattern: MovementPattern::Hinge,
        equipment: &[],
        muscles: &[MuscleID::Glutes, MuscleID::Hamstrings],
    },
    Exercise {
        id: "goblet-squat",
        name: "Goblet Squat",
        pattern: MovementPattern::Squat,
        equipment: &[Equipment::Dumbbell, Equipment::Kettlebell],
        muscles: &[MuscleID::Quads, MuscleID::Glutes],
    },
    Exercise {
        id: "hanging-leg-raise",
        name: "Hanging Leg Raise",
        pattern: MovementPattern::Core,
        equipment: &[Equipment::PullUpBar],
        muscles: &[MuscleID::Abs],
    },
    Exercise {
        id: "kettlebell-swing",
        name: "Kettlebell Swing",
        pattern: MovementPattern::Hinge,
        equipment: &[Equipment::Kettlebell],
        muscles: &[
            MuscleID::Glutes,
            MuscleID::Hamstrings,
            MuscleID::ErectorSpinae,
        ],
    },
    Exercise {
        id: "lat-pulldown",
        name: "Lat Pulldown",
        pattern: MovementPattern::Pull,
        equipment: &[Equipment::Cable, Equipment::Machine],
        muscles: &[MuscleID::Lats, MuscleID::Biceps],
    },
    Exercise {
        id: "leg-press",
        name: "Leg Press",
        pattern: MovementPattern::Squat,
        equipment: &[Equipment::Machine],
        muscles: &[MuscleID::Quads, MuscleID::Glutes],
    },
    Exercise {
        id: "overhead-press",
        name: "Barbell Overhead Press",
        pattern: MovementPattern::Push,
        equipment: &[Equipment::Barbell],
        muscles: &[MuscleID::FrontDelts, MuscleID::SideDelts, MuscleID::Triceps],
    },
    Exercise {
        id: "plank",
        name: "Plank",
        pattern: MovementPattern::Core,
        equipment: &[],
        muscles: &[MuscleID::Abs],
    },
    Exercise {
        id: "prone-y-raise",
        name: "Prone Y Raise",
        pattern: MovementPattern::Pull,
        equipment: &[],
        muscles: &[MuscleID::RearDelts, MuscleID::Traps],
    },
    Exercise {
        id: "pull-up",
        name: "Pull Up",
        pattern: MovementPattern::Pull,
        equipment: &[Equipment::PullUpBar],
        muscles: &[MuscleID::Lats, MuscleID::Biceps],
    },
    Exercise {
        id: "push-up",
        name: "Push Up",
        pattern: MovementPattern::Push,
        equipment: &[],
        muscles: &[MuscleID::Pecs, MuscleID::FrontDelts, MuscleID::Triceps],
    },
    Exercise {
        id: "reverse-lunge",
        name: "Reverse Lunge",
        pattern: MovementPattern::Lunge,
        equipment: &[],
        muscles: &[MuscleID::Quads, MuscleID::Glutes],
    },
    Exercise {
        id: "romanian-deadlift",
        name: "Barbell Romanian Deadlift",
        pattern: MovementPattern::Hinge,
        equipment: &[Equipment::Barbell],
        muscles: &[
            MuscleID::Hamstrings,
            MuscleID::Glutes,
            MuscleID::ErectorSpinae,
        ],
    },
    Exercise {
        id: "suitcase-carry",
        name: "Suitcase Carry",
        pattern: MovementPattern::Carry,
        equipment: &[Equipment::Kettlebell, Equipment::Dumbbell],
        muscles: &[MuscleID::Abs, MuscleID::Forearms, MuscleID::Traps],
    },
    Exercise {
        id: "trap-bar-deadlift",
        name: "Trap Bar Deadlift",
        pattern: MovementPattern::Hinge,
        equipment: &[Equipment::TrapBar],
        muscles: &[MuscleID::Quads, MuscleID::Glutes, MuscleID::ErectorSpinae],
    },
    Exercise {
        id: "walking-lunge",
        name: "Walking Lunge",
        pattern: MovementPattern::Lunge,
        equipment: &[Equipment::Dumbbell],
        muscles: &[MuscleID::Quads, MuscleID::Glutes],
    },
];
