use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::exercise::Muscle;

/// Time-varying per-muscle state. Derived on read from logged sessions plus
/// the current time; the same shape is accepted from an external service that
/// supplies precomputed values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuscleState {
  pub current_fatigue_percent: f64,
  pub last_trained: Option<DateTime<Utc>>,
  pub days_elapsed: Option<f64>,
  pub days_until_recovered: f64,
}

impl MuscleState {
  /// State for a muscle with no training history: fully recovered.
  pub fn fresh() -> Self {
    Self {
      current_fatigue_percent: 0.0,
      last_trained: None,
      days_elapsed: None,
      days_until_recovered: 0.0,
    }
  }
}

/// Projected state of one muscle after a planned (not yet logged) workout.
/// Ephemeral; produced per planning request and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastedMuscleState {
  pub muscle: Muscle,
  pub current_fatigue_percent: f64,
  pub forecasted_fatigue_percent: f64,
  pub volume_added: f64,
  pub baseline_used: f64,
}
