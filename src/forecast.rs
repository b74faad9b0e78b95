//! Forward forecasting of planned, not-yet-logged work
//!
//! Answers "if I did this workout right now, what would it cost each muscle."
//! Pure and idempotent: no wall clock, no mutable shared state; identical
//! inputs always produce identical output. Time projection is the recovery
//! model's job, not this one's.

use std::collections::HashMap;

use crate::baseline::{fatigue_percent, BaselineStore};
use crate::models::{ForecastedMuscleState, Muscle, PlannedExercise};
use crate::volume::planned_muscle_volume;

/// Project fatigue for every muscle in the system after a set of planned
/// exercises.
///
/// `current_fatigue` maps muscles to their present fatigue percentage;
/// missing entries read as 0. Returns one record per muscle, including those
/// with zero impact, so a planning UI can render the full body.
pub fn forecast(
  planned: &[PlannedExercise],
  baselines: &BaselineStore,
  current_fatigue: &HashMap<Muscle, f64>,
) -> Vec<ForecastedMuscleState> {
  let added = planned_muscle_volume(planned);

  Muscle::all()
    .iter()
    .map(|muscle| {
      let current = current_fatigue
        .get(muscle)
        .copied()
        .unwrap_or(0.0)
        .clamp(0.0, 100.0);
      let volume_added = added.get(muscle).copied().unwrap_or(0.0);
      let baseline_used = baselines.effective(*muscle);

      let forecasted = (current + fatigue_percent(volume_added, baseline_used)).min(100.0);

      ForecastedMuscleState {
        muscle: *muscle,
        current_fatigue_percent: current,
        forecasted_fatigue_percent: forecasted,
        volume_added,
        baseline_used,
      }
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
