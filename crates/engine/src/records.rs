use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{BlockID, CompletedSet, SessionID, WorkoutSessionLog};

const EPLEY_DIVISOR: f32 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalRecord {
    pub exercise_id: String,
    pub estimated_one_rep_max: f32,
    pub session_id: SessionID,
    pub block_id: BlockID,
    pub set_index: u32,
    pub achieved_at: DateTime<Utc>,
}

/// Epley estimate of the one-rep maximum. No load lifted means no estimate.
#[must_use]
pub fn estimate_one_rep_max(weight: f32, reps: u32) -> f32 {
    if weight <= 0.0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let reps = reps as f32;

    weight * (1.0 + reps / EPLEY_DIVISOR)
}

/// Compare the best set per exercise in `session` against the best previously
/// recorded estimate and return one new record per exercise that improved.
/// The result is ordered by exercise id.
#[must_use]
pub fn detect_new_prs(
    session: &WorkoutSessionLog,
    existing_records: &[PersonalRecord],
) -> Vec<PersonalRecord> {
    let mut best_known: BTreeMap<&str, f32> = BTreeMap::new();
    for record in existing_records {
        let best = best_known
            .entry(record.exercise_id.as_str())
            .or_insert(record.estimated_one_rep_max);
        if record.estimated_one_rep_max > *best {
            *best = record.estimated_one_rep_max;
        }
    }

    let mut best_sets: BTreeMap<&str, (&CompletedSet, f32)> = BTreeMap::new();
    for set in &session.completed_sets {
        let estimate = estimate_one_rep_max(f32::from(set.weight), u32::from(set.reps));
        match best_sets.get(set.exercise_id.as_str()) {
            Some((_, best_estimate)) if *best_estimate >= estimate => {}
            _ => {
                best_sets.insert(set.exercise_id.as_str(), (set, estimate));
            }
        }
    }

    best_sets
        .into_iter()
        .filter(|(exercise_id, (_, estimate))| {
            *estimate > best_known.get(exercise_id).copied().unwrap_or(0.0)
        })
        .map(|(exercise_id, (set, estimate))| PersonalRecord {
            exercise_id: exercise_id.to_string(),
            estimated_one_rep_max: estimate,
            session_id: session.id,
            block_id: set.block_id,
            set_index: set.set_index,
            achieved_at: set.completed_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::{NaiveDate, TimeZone};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Reps, Weight};

    use super::*;

    fn session(sets: Vec<CompletedSet>) -> WorkoutSessionLog {
        let started_at = Utc.with_ymd_and_hms(2024, 4, 1, 17, 0, 0).unwrap();

        WorkoutSessionLog {
            id: 1.into(),
            user_id: 2.into(),
            date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            started_at,
            ended_at: None,
            completed_sets: sets,
            conditioning_rounds: None,
            created_at: started_at,
        }
    }

    fn set(exercise_id: &str, set_index: u32, weight: f32, reps: u32) -> CompletedSet {
        CompletedSet {
            block_id: 1.into(),
            exercise_id: exercise_id.to_string(),
            set_index,
            weight: Weight::new(weight).unwrap(),
            reps: Reps::new(reps).unwrap(),
            completed_at: Utc.with_ymd_and_hms(2024, 4, 1, 17, 30, 0).unwrap(),
        }
    }

    fn record(exercise_id: &str, estimated_one_rep_max: f32) -> PersonalRecord {
        PersonalRecord {
            exercise_id: exercise_id.to_string(),
            estimated_one_rep_max,
            session_id: 9.into(),
            block_id: 9.into(),
            set_index: 0,
            achieved_at: Utc.with_ymd_and_hms(2024, 3, 1, 17, 0, 0).unwrap(),
        }
    }

    #[rstest]
    #[case(100.0, 1, 103.333_336)]
    #[case(100.0, 5, 116.666_67)]
    #[case(60.0, 10, 80.0)]
    #[case(0.0, 5, 0.0)]
    #[case(0.0, 0, 0.0)]
    fn test_estimate_one_rep_max(#[case] weight: f32, #[case] reps: u32, #[case] expected: f32) {
        assert_approx_eq!(estimate_one_rep_max(weight, reps), expected);
    }

    #[test]
    fn test_estimate_one_rep_max_exceeds_weight() {
        for reps in 1..30 {
            assert!(estimate_one_rep_max(100.0, reps) > 100.0);
        }
    }

    #[test]
    fn test_detect_new_prs_without_existing_records() {
        let prs = detect_new_prs(
            &session(vec![
                set("back-squat", 0, 100.0, 5),
                set("bench-press", 0, 80.0, 5),
            ]),
            &[],
        );

        assert_eq!(prs.len(), 2);
        assert_eq!(prs[0].exercise_id, "back-squat");
        assert_eq!(prs[1].exercise_id, "bench-press");
        assert!(prs.iter().all(|pr| pr.estimated_one_rep_max > 0.0));
    }

    #[test]
    fn test_detect_new_prs_best_set_wins() {
        let prs = detect_new_prs(
            &session(vec![
                set("back-squat", 0, 100.0, 5),
                set("back-squat", 1, 110.0, 3),
                set("back-squat", 2, 90.0, 8),
            ]),
            &[],
        );

        assert_eq!(prs.len(), 1);
        assert_eq!(prs[0].set_index, 1);
        assert_approx_eq!(prs[0].estimated_one_rep_max, 121.0);
    }

    #[test]
    fn test_detect_new_prs_strict_improvement() {
        let existing = [record("back-squat", 121.0)];

        assert_eq!(
            detect_new_prs(&session(vec![set("back-squat", 0, 110.0, 3)]), &existing),
            vec![]
        );

        let prs = detect_new_prs(&session(vec![set("back-squat", 0, 115.0, 3)]), &existing);
        assert_eq!(prs.len(), 1);
        assert_approx_eq!(prs[0].estimated_one_rep_max, 126.5);
    }

    #[test]
    fn test_detect_new_prs_takes_best_existing_record() {
        let existing = [record("back-squat", 130.0), record("back-squat", 100.0)];

        assert_eq!(
            detect_new_prs(&session(vec![set("back-squat", 0, 110.0, 5)]), &existing),
            vec![]
        );
    }

    #[test]
    fn test_detect_new_prs_ignores_unloaded_sets() {
        assert_eq!(
            detect_new_prs(&session(vec![set("air-squat", 0, 0.0, 20)]), &[]),
            vec![]
        );
    }
}
