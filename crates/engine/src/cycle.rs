use std::collections::BTreeMap;

use chrono::{Duration, Utc};

use crate::{
    DailyWorkoutParams, Focus, PlanDayID, PlanParams, TrainingDays, WorkoutPlanDay,
    catalog::Exercise, generate_daily_workout,
};

/// Weekly focus pattern keyed by training-day count.
#[must_use]
pub fn focus_pattern(training_days: TrainingDays) -> [Focus; 7] {
    use Focus::{Conditioning, Mixed, Rest, Strength};

    match u8::from(training_days) {
        3 => [Mixed, Rest, Strength, Rest, Conditioning, Rest, Rest],
        4 => [Mixed, Strength, Rest, Conditioning, Rest, Mixed, Rest],
        5 => [Strength, Mixed, Conditioning, Strength, Mixed, Rest, Rest],
        _ => [Strength, Mixed, Conditioning, Strength, Mixed, Conditioning, Rest],
    }
}

/// Expand one calendar week into exactly seven day records, one per offset
/// from the start date. Training days delegate to the daily generator with
/// the focus mapped to a workout goal, rest days are synthesized with empty
/// blocks.
#[must_use]
pub fn generate_microcycle(
    params: &PlanParams,
    exercises: &BTreeMap<&'static str, Exercise>,
) -> [WorkoutPlanDay; 7] {
    let pattern = focus_pattern(params.training_days);

    std::array::from_fn(|offset| {
        #[allow(clippy::cast_possible_truncation)]
        let day_index = offset as u32;
        let date = params.start + Duration::days(i64::from(day_index));
        let focus = pattern[offset];

        match focus.goal() {
            Some(goal) => {
                let mut day = generate_daily_workout(
                    &DailyWorkoutParams {
                        user_id: params.user_id,
                        date,
                        goal,
                        experience: params.experience,
                        equipment: params.equipment.clone(),
                        units: params.units,
                        time_availability: params.time_availability,
                        strength_numbers: params.strength_numbers.clone(),
                    },
                    exercises,
                );
                day.id = PlanDayID::derive(params.user_id, date);
                day.date = date;
                day.day_index = day_index;
                day.focus = vec![focus];
                day.estimated_duration_minutes = focus.duration_minutes();
                day
            }
            None => WorkoutPlanDay {
                id: PlanDayID::derive(params.user_id, date),
                user_id: params.user_id,
                date,
                day_index,
                focus: vec![Focus::Rest],
                blocks: Vec::new(),
                estimated_duration_minutes: 0,
                adjusted_for_readiness: false,
                created_at: Utc::now(),
            },
        }
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingCycle {
    pub weeks: Vec<[WorkoutPlanDay; 7]>,
}

/// Stack microcycles across weeks. Week *i* starts seven times *i* days
/// after the overall start date; parameters are identical every week.
/// Flattening the weeks into a single sequence is the caller's concern.
#[must_use]
pub fn generate_training_cycle(
    params: &PlanParams,
    weeks: u32,
    exercises: &BTreeMap<&'static str, Exercise>,
) -> TrainingCycle {
    TrainingCycle {
        weeks: (0..weeks)
            .map(|week| {
                let params = PlanParams {
                    start: params.start + Duration::days(7 * i64::from(week)),
                    ..params.clone()
                };
                generate_microcycle(&params, exercises)
            })
            .collect(),
    }
}

/// The non-rest days of a plan, in calendar order.
#[must_use]
pub fn training_days_of(days: &[WorkoutPlanDay]) -> Vec<&WorkoutPlanDay> {
    days.iter().filter(|day| !day.is_rest()).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Equipment, ExperienceLevel, Goal, TimeAvailability, Units, UserID, catalog};

    use super::*;

    fn params(training_days: u8) -> PlanParams {
        PlanParams {
            user_id: UserID::from(1),
            start: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            goal: Goal::Hybrid,
            experience: ExperienceLevel::Intermediate,
            training_days: TrainingDays::new(training_days).unwrap(),
            time_availability: TimeAvailability::Standard,
            equipment: BTreeSet::from([Equipment::Barbell]),
            units: Units::Metric,
            strength_numbers: BTreeMap::new(),
        }
    }

    #[rstest]
    #[case(
        3,
        [Focus::Mixed, Focus::Rest, Focus::Strength, Focus::Rest, Focus::Conditioning, Focus::Rest, Focus::Rest]
    )]
    #[case(
        4,
        [Focus::Mixed, Focus::Strength, Focus::Rest, Focus::Conditioning, Focus::Rest, Focus::Mixed, Focus::Rest]
    )]
    #[case(
        5,
        [Focus::Strength, Focus::Mixed, Focus::Conditioning, Focus::Strength, Focus::Mixed, Focus::Rest, Focus::Rest]
    )]
    #[case(
        6,
        [Focus::Strength, Focus::Mixed, Focus::Conditioning, Focus::Strength, Focus::Mixed, Focus::Conditioning, Focus::Rest]
    )]
    #[case(
        7,
        [Focus::Strength, Focus::Mixed, Focus::Conditioning, Focus::Strength, Focus::Mixed, Focus::Conditioning, Focus::Rest]
    )]
    fn test_focus_pattern(#[case] training_days: u8, #[case] expected: [Focus; 7]) {
        assert_eq!(
            focus_pattern(TrainingDays::new(training_days).unwrap()),
            expected
        );
    }

    #[rstest]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    #[case(6)]
    #[case(7)]
    fn test_generate_microcycle_shape(#[case] training_days: u8) {
        let params = params(training_days);
        let days = generate_microcycle(&params, catalog::exercises());

        for (offset, day) in days.iter().enumerate() {
            assert_eq!(day.day_index as usize, offset);
            assert_eq!(
                day.date,
                params.start + Duration::days(i64::try_from(offset).unwrap())
            );
            assert_eq!(day.user_id, params.user_id);
            assert_eq!(day.id, PlanDayID::derive(params.user_id, day.date));
            assert_eq!(
                day.focus,
                vec![focus_pattern(params.training_days)[offset]]
            );
        }
    }

    #[test]
    fn test_generate_microcycle_rest_days() {
        let days = generate_microcycle(&params(3), catalog::exercises());

        for offset in [1, 3, 5, 6] {
            assert!(days[offset].is_rest());
            assert_eq!(days[offset].blocks, vec![]);
            assert_eq!(days[offset].estimated_duration_minutes, 0);
            assert_eq!(days[offset].focus, vec![Focus::Rest]);
        }
    }

    #[test]
    fn test_generate_microcycle_training_days() {
        let days = generate_microcycle(&params(3), catalog::exercises());

        assert_eq!(days[0].focus, vec![Focus::Mixed]);
        assert_eq!(days[0].estimated_duration_minutes, 60);
        assert_eq!(days[2].focus, vec![Focus::Strength]);
        assert_eq!(days[2].estimated_duration_minutes, 50);
        assert_eq!(days[4].focus, vec![Focus::Conditioning]);
        assert_eq!(days[4].estimated_duration_minutes, 35);

        for offset in [0, 2, 4] {
            assert!(!days[offset].is_rest());
            assert!(!days[offset].adjusted_for_readiness);
        }
    }

    #[rstest]
    #[case(3, 3)]
    #[case(4, 4)]
    #[case(5, 5)]
    #[case(6, 6)]
    #[case(7, 6)]
    fn test_training_days_of(#[case] training_days: u8, #[case] expected: usize) {
        let days = generate_microcycle(&params(training_days), catalog::exercises());

        assert_eq!(training_days_of(&days).len(), expected);
    }

    #[test]
    fn test_generate_training_cycle() {
        let params = params(4);
        let cycle = generate_training_cycle(&params, 3, catalog::exercises());

        assert_eq!(cycle.weeks.len(), 3);

        for (week, days) in cycle.weeks.iter().enumerate() {
            assert_eq!(
                days[0].date,
                params.start + Duration::days(7 * i64::try_from(week).unwrap())
            );
            assert_eq!(days[0].day_index, 0);
        }

        let first_week_ids = cycle.weeks[0].iter().map(|day| day.id).collect::<Vec<_>>();
        let second_week_ids = cycle.weeks[1].iter().map(|day| day.id).collect::<Vec<_>>();
        assert!(
            first_week_ids
                .iter()
                .all(|id| !second_week_ids.contains(id))
        );
    }

    #[test]
    fn test_deterministic_generation() {
        let params = params(5);

        let first = generate_microcycle(&params, catalog::exercises());
        let second = generate_microcycle(&params, catalog::exercises());

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.blocks, b.blocks);
        }
    }
}
