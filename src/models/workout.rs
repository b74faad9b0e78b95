use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::exercise::{Category, Exercise, Muscle, Variation};

/// A single logged set.
///
/// The logging UI clamps weight to [0, 500] and reps to [1, 50]; the engine
/// still tolerates out-of-range input by treating it as zero volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoggedSet {
  pub reps: i64,
  pub weight: f64,
  /// Weight equals the lifter's bodyweight at logging time
  #[serde(default)]
  pub is_bodyweight: bool,
  #[serde(default)]
  pub to_failure: bool,
}

impl LoggedSet {
  pub fn new(reps: i64, weight: f64) -> Self {
    Self {
      reps,
      weight,
      is_bodyweight: false,
      to_failure: false,
    }
  }
}

/// An exercise id plus its logged sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedExercise {
  pub exercise_id: String,
  pub sets: Vec<LoggedSet>,
}

/// A completed workout. Append-only history; never mutated after creation.
///
/// `muscle_fatigue_history` is the per-muscle fatigue contribution computed at
/// completion time and seeds the recovery model for each trained muscle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
  pub id: i64,
  pub name: String,
  pub category: Category,
  pub variation: Variation,
  pub started_at: DateTime<Utc>,
  pub ended_at: DateTime<Utc>,
  pub exercises: Vec<LoggedExercise>,
  pub muscle_fatigue_history: HashMap<Muscle, f64>,
}

/// A workout about to be completed (without id and derived fatigue map)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkoutSession {
  pub name: String,
  pub category: Category,
  pub variation: Variation,
  pub started_at: DateTime<Utc>,
  pub ended_at: DateTime<Utc>,
  pub exercises: Vec<LoggedExercise>,
}

/// A proposed but not-yet-logged exercise, used for what-if forecasting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedExercise {
  pub exercise: Exercise,
  pub sets: i64,
  pub reps: i64,
  pub weight: f64,
}

impl PlannedExercise {
  pub fn new(exercise: Exercise, sets: i64, reps: i64, weight: f64) -> Self {
    Self {
      exercise,
      sets,
      reps,
      weight,
    }
  }
}
