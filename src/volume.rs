//! Volume accounting: set volume and per-muscle distribution
//!
//! Volume is reps × weight for a set, summed across sets and exercises, then
//! spread over the muscles an exercise engages by engagement percentage.
//! Everything here is pure; bad input degrades to zero volume instead of
//! failing, so an interactive caller never sees an error from this layer.

use std::collections::HashMap;

use crate::models::{Exercise, LoggedExercise, Muscle, MuscleEngagement, PlannedExercise};

/// Volume of a single set: reps × weight.
///
/// Negative or non-finite input is a zero-volume no-op. The logging UI clamps
/// both values, but not every caller goes through the logging flow.
pub fn set_volume(reps: f64, weight: f64) -> f64 {
  if !reps.is_finite() || !weight.is_finite() || reps < 0.0 || weight < 0.0 {
    return 0.0;
  }
  reps * weight
}

/// Total volume of one exercise across its logged sets.
pub fn exercise_volume(logged: &LoggedExercise) -> f64 {
  logged
    .sets
    .iter()
    .map(|s| set_volume(s.reps as f64, s.weight))
    .sum()
}

/// Spread an exercise's total volume across the muscles it engages.
///
/// Engagement percentages are independent per muscle and need not sum to 100.
pub fn distribute(exercise_volume: f64, engagements: &[MuscleEngagement]) -> HashMap<Muscle, f64> {
  let mut volumes = HashMap::new();
  for engagement in engagements {
    let muscle_volume = exercise_volume * (engagement.percentage / 100.0);
    *volumes.entry(engagement.muscle).or_insert(0.0) += muscle_volume;
  }
  volumes
}

/// Per-muscle volume for a whole session of logged exercises.
///
/// Exercise ids are resolved against the library; an unknown id skips that
/// logged exercise rather than failing the session.
pub fn session_muscle_volume(
  exercises: &[LoggedExercise],
  library: &[Exercise],
) -> HashMap<Muscle, f64> {
  let mut totals: HashMap<Muscle, f64> = HashMap::new();

  for logged in exercises {
    let exercise = match library.iter().find(|e| e.id == logged.exercise_id) {
      Some(e) => e,
      None => {
        tracing::warn!(exercise_id = %logged.exercise_id, "unknown exercise id, skipping");
        continue;
      }
    };

    let total = exercise_volume(logged);
    for (muscle, volume) in distribute(total, &exercise.engagements) {
      *totals.entry(muscle).or_insert(0.0) += volume;
    }
  }

  totals
}

/// Per-muscle volume for a set of planned (not yet logged) exercises.
///
/// Purely hypothetical: nothing is logged and no state changes.
pub fn planned_muscle_volume(planned: &[PlannedExercise]) -> HashMap<Muscle, f64> {
  let mut totals: HashMap<Muscle, f64> = HashMap::new();

  for plan in planned {
    let total = set_volume(plan.reps as f64, plan.weight) * plan.sets.max(0) as f64;
    for (muscle, volume) in distribute(total, &plan.exercise.engagements) {
      *totals.entry(muscle).or_insert(0.0) += volume;
    }
  }

  totals
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
