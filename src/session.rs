//! Session completion pipeline and workout history persistence
//!
//! Completing a workout converts its logged sets into per-muscle volume,
//! records each muscle's fatigue contribution against the baseline that was
//! in effect when the session was performed, and only then lets the baseline
//! store observe the new volumes. Sessions are append-only ground truth;
//! everything time-varying is re-derived from them.

use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};
use std::collections::HashMap;
use std::str::FromStr;

use crate::baseline::{fatigue_percent, BaselineStore, NewBaselineEvent};
use crate::db::StoreError;
use crate::models::{
  Category, Exercise, LoggedExercise, Muscle, NewWorkoutSession, Variation, WorkoutSession,
};
use crate::volume::session_muscle_volume;

/// Result of completing a workout: the immutable session record plus any
/// new-baseline events for user-facing acknowledgment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedSession {
  pub session: WorkoutSession,
  pub events: Vec<NewBaselineEvent>,
}

/// Complete a workout session.
///
/// Fatigue contributions are computed against the pre-session effective
/// baselines; a session that exceeds a learned max clamps at 100% and raises
/// the baseline for the next one. `id` is assigned by the store on insert;
/// callers completing without persistence get 0.
pub fn complete_session(
  new: NewWorkoutSession,
  library: &[Exercise],
  baselines: &mut BaselineStore,
) -> CompletedSession {
  let volumes = session_muscle_volume(&new.exercises, library);

  let mut muscle_fatigue_history = HashMap::new();
  let mut events = Vec::new();

  for (muscle, volume) in volumes {
    let baseline = baselines.effective(muscle);
    muscle_fatigue_history.insert(muscle, fatigue_percent(volume, baseline));

    if let Some(event) = baselines.observe_session_volume(muscle, volume) {
      events.push(event);
    }
  }

  CompletedSession {
    session: WorkoutSession {
      id: 0,
      name: new.name,
      category: new.category,
      variation: new.variation,
      started_at: new.started_at,
      ended_at: new.ended_at,
      exercises: new.exercises,
      muscle_fatigue_history,
    },
    events,
  }
}

// ---------------------------------------------------------------------------
// Database Operations
// ---------------------------------------------------------------------------

/// Persist a completed session; returns it with the store-assigned id.
pub async fn insert_session(
  pool: &SqlitePool,
  session: &WorkoutSession,
) -> Result<WorkoutSession, StoreError> {
  let exercises_json = serde_json::to_string(&session.exercises)
    .map_err(|e| StoreError::Corrupt(e.to_string()))?;
  let fatigue_json = serialize_fatigue_map(&session.muscle_fatigue_history)?;

  let result = sqlx::query(
    r#"
    INSERT INTO workout_sessions
      (name, category, variation, started_at, ended_at, exercises_json, muscle_fatigue_json)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
    "#,
  )
  .bind(&session.name)
  .bind(session.category.to_string())
  .bind(session.variation.to_string())
  .bind(session.started_at)
  .bind(session.ended_at)
  .bind(&exercises_json)
  .bind(&fatigue_json)
  .execute(pool)
  .await?;

  let mut stored = session.clone();
  stored.id = result.last_insert_rowid();
  Ok(stored)
}

/// Load the full session history, oldest first.
pub async fn load_sessions(pool: &SqlitePool) -> Result<Vec<WorkoutSession>, StoreError> {
  let rows = sqlx::query(
    r#"
    SELECT id, name, category, variation, started_at, ended_at,
           exercises_json, muscle_fatigue_json
    FROM workout_sessions
    ORDER BY started_at ASC
    "#,
  )
  .fetch_all(pool)
  .await?;

  let mut sessions = Vec::new();
  for row in rows {
    let category_str: String = row.get("category");
    let variation_str: String = row.get("variation");
    let exercises_json: String = row.get("exercises_json");
    let fatigue_json: String = row.get("muscle_fatigue_json");

    let exercises: Vec<LoggedExercise> = serde_json::from_str(&exercises_json)
      .map_err(|e| StoreError::Corrupt(e.to_string()))?;

    sessions.push(WorkoutSession {
      id: row.get("id"),
      name: row.get("name"),
      category: Category::from_str(&category_str).map_err(StoreError::Corrupt)?,
      variation: Variation::from_str(&variation_str).map_err(StoreError::Corrupt)?,
      started_at: row.get("started_at"),
      ended_at: row.get("ended_at"),
      exercises,
      muscle_fatigue_history: deserialize_fatigue_map(&fatigue_json)?,
    });
  }

  Ok(sessions)
}

fn serialize_fatigue_map(map: &HashMap<Muscle, f64>) -> Result<String, StoreError> {
  let by_name: HashMap<&str, f64> = map.iter().map(|(m, f)| (m.as_str(), *f)).collect();
  serde_json::to_string(&by_name).map_err(|e| StoreError::Corrupt(e.to_string()))
}

fn deserialize_fatigue_map(json: &str) -> Result<HashMap<Muscle, f64>, StoreError> {
  let by_name: HashMap<String, f64> =
    serde_json::from_str(json).map_err(|e| StoreError::Corrupt(e.to_string()))?;

  let mut map = HashMap::new();
  for (name, fatigue) in by_name {
    let muscle = Muscle::from_str(&name).map_err(StoreError::Corrupt)?;
    map.insert(muscle, fatigue);
  }
  Ok(map)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
