//! Recovery model: time-based decay of post-session fatigue
//!
//! A just-trained fatigue level maps linearly to a recovery-days estimate
//! (1 day at 0% fatigue, 7 days at 100%). Elapsed time is then rescaled onto a
//! 5-unit curve and mapped through a stepped plateau, so recovery accelerates
//! early and flattens near completion. This stepped curve is the single
//! canonical recovery function; externally precomputed state arrives through
//! the same [`MuscleState`] shape and is never re-derived with a second
//! formula.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::models::{Muscle, MuscleState, WorkoutSession};

/// Days to full recovery from a post-session fatigue level: linear from
/// 1 day (0% fatigue) to 7 days (100% fatigue). A design choice, not a
/// physiological law; reproduced exactly for compatibility.
pub fn recovery_days(fatigue_percent: f64) -> f64 {
  let fatigue = fatigue_percent.clamp(0.0, 100.0);
  1.0 + (fatigue / 100.0) * 6.0
}

/// Recovery percentage after `days_since` days, given the estimated total
/// recovery window. Elapsed time is rescaled onto a 5-unit curve and stepped:
/// recovery comes fast at first and plateaus near the end.
pub fn recovery_percent(days_since: f64, recovery_days: f64) -> f64 {
  if recovery_days <= 0.0 {
    return 100.0;
  }
  let scaled_days = (days_since.max(0.0) / recovery_days) * 5.0;

  match scaled_days {
    d if d >= 5.0 => 100.0,
    d if d >= 4.0 => 98.0,
    d if d >= 3.0 => 90.0,
    d if d >= 2.0 => 75.0,
    d if d >= 1.0 => 50.0,
    _ => 10.0,
  }
}

/// Currently observed fatigue, given the fatigue recorded at training time and
/// the days elapsed since.
pub fn current_fatigue_percent(fatigue_at_training: f64, days_since: f64) -> f64 {
  let window = recovery_days(fatigue_at_training);
  100.0 - recovery_percent(days_since, window)
}

/// Days remaining until the muscle is fully recovered; 0 once the recovery
/// window has passed.
pub fn days_until_recovered(fatigue_at_training: f64, days_since: f64) -> f64 {
  (recovery_days(fatigue_at_training) - days_since.max(0.0)).max(0.0)
}

/// Derive the current state of one muscle from its most recent recorded
/// fatigue contribution. `None` history means never trained: fully recovered.
pub fn muscle_state(
  last: Option<(f64, DateTime<Utc>)>,
  now: DateTime<Utc>,
) -> MuscleState {
  let (fatigue_at_training, last_trained) = match last {
    Some(entry) => entry,
    None => return MuscleState::fresh(),
  };

  let days_elapsed = ((now - last_trained).num_seconds() as f64 / 86_400.0).max(0.0);

  MuscleState {
    current_fatigue_percent: current_fatigue_percent(fatigue_at_training, days_elapsed),
    last_trained: Some(last_trained),
    days_elapsed: Some(days_elapsed),
    days_until_recovered: days_until_recovered(fatigue_at_training, days_elapsed),
  }
}

/// Rebuild the current state of every muscle from the append-only session
/// history. Ground truth is the logged sessions; this is recomputed on read,
/// never stored.
pub fn derive_muscle_states(
  sessions: &[WorkoutSession],
  now: DateTime<Utc>,
) -> HashMap<Muscle, MuscleState> {
  let mut latest: HashMap<Muscle, (f64, DateTime<Utc>)> = HashMap::new();

  for session in sessions {
    for (muscle, fatigue) in &session.muscle_fatigue_history {
      let entry = latest.entry(*muscle);
      match entry {
        std::collections::hash_map::Entry::Occupied(mut o) => {
          if session.ended_at > o.get().1 {
            o.insert((*fatigue, session.ended_at));
          }
        }
        std::collections::hash_map::Entry::Vacant(v) => {
          v.insert((*fatigue, session.ended_at));
        }
      }
    }
  }

  Muscle::all()
    .iter()
    .map(|m| (*m, muscle_state(latest.get(m).copied(), now)))
    .collect()
}

/// Flatten per-muscle states into the fatigue-percentage map the scorers
/// consume. Missing muscles read as 0% fatigued.
pub fn fatigue_map(states: &HashMap<Muscle, MuscleState>) -> HashMap<Muscle, f64> {
  states
    .iter()
    .map(|(m, s)| (*m, s.current_fatigue_percent))
    .collect()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
