//! Test utilities and helpers for integration and unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Mock data factories
//! - Test fixtures
//! - Helper assertions

use crate::models::{
  Category, Difficulty, Equipment, Exercise, LoggedExercise, LoggedSet, Muscle, MuscleEngagement,
  NewWorkoutSession, Variation, WorkoutSession,
};
use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use std::collections::HashMap;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  // Run migrations
  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Seed the database with test workout sessions, one per day counting back
/// from now. Returns the IDs of the created sessions.
pub async fn seed_test_sessions(pool: &SqlitePool, count: usize) -> Vec<i64> {
  let mut session_ids = Vec::new();

  for i in 0..count {
    let days_ago = (count - i) as i64;
    let started_at = Utc::now() - Duration::days(days_ago);
    let ended_at = started_at + Duration::minutes(45);

    let exercises = vec![LoggedExercise {
      exercise_id: "bench_press".to_string(),
      sets: vec![LoggedSet::new(10, 50.0 + i as f64)],
    }];
    let exercises_json =
      serde_json::to_string(&exercises).expect("Failed to serialize test exercises");

    let fatigue: HashMap<&str, f64> = HashMap::from([
      (Muscle::Pectoralis.as_str(), 20.0 + i as f64),
      (Muscle::Triceps.as_str(), 10.0),
    ]);
    let fatigue_json =
      serde_json::to_string(&fatigue).expect("Failed to serialize test fatigue map");

    let result = sqlx::query(
      r#"
      INSERT INTO workout_sessions (
        name, category, variation, started_at, ended_at,
        exercises_json, muscle_fatigue_json
      )
      VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
      "#,
    )
    .bind(format!("Test Push Day {}", i))
    .bind(Category::Push.to_string())
    .bind(Variation::A.to_string())
    .bind(started_at)
    .bind(ended_at)
    .bind(exercises_json)
    .bind(fatigue_json)
    .execute(pool)
    .await
    .expect("Failed to insert test session");

    session_ids.push(result.last_insert_rowid());
  }

  session_ids
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Create a mock bodyweight exercise with the given muscle engagements
pub fn mock_exercise(id: &str, engagements: &[(Muscle, f64)]) -> Exercise {
  mock_exercise_with_equipment(id, engagements, &[Equipment::Bodyweight])
}

/// Create a mock exercise with explicit equipment requirements
pub fn mock_exercise_with_equipment(
  id: &str,
  engagements: &[(Muscle, f64)],
  equipment: &[Equipment],
) -> Exercise {
  Exercise {
    id: id.to_string(),
    name: id.to_string(),
    category: Category::Push,
    equipment: equipment.to_vec(),
    difficulty: Difficulty::Intermediate,
    engagements: engagements
      .iter()
      .map(|(muscle, pct)| MuscleEngagement::new(*muscle, *pct))
      .collect(),
    variation: Variation::A,
  }
}

/// A small fixed exercise library covering the engine contract scenarios
pub fn mock_library() -> Vec<Exercise> {
  vec![
    mock_exercise_with_equipment(
      "bench_press",
      &[
        (Muscle::Pectoralis, 85.0),
        (Muscle::Triceps, 40.0),
        (Muscle::Deltoids, 30.0),
      ],
      &[Equipment::Barbell, Equipment::Bench],
    ),
    mock_exercise_with_equipment(
      "overhead_press",
      &[(Muscle::Deltoids, 80.0), (Muscle::Triceps, 45.0)],
      &[Equipment::Barbell],
    ),
    mock_exercise_with_equipment(
      "squat",
      &[
        (Muscle::Quadriceps, 90.0),
        (Muscle::Glutes, 80.0),
        (Muscle::Core, 45.0),
      ],
      &[Equipment::Barbell],
    ),
    mock_exercise_with_equipment(
      "barbell_row",
      &[
        (Muscle::Lats, 75.0),
        (Muscle::Biceps, 55.0),
        (Muscle::LowerBack, 40.0),
      ],
      &[Equipment::Barbell],
    ),
  ]
}

/// Create a mock completed session ending at the given time, with the given
/// per-muscle fatigue contributions already recorded
pub fn mock_session(
  id: i64,
  ended_at: DateTime<Utc>,
  fatigue: &[(Muscle, f64)],
) -> WorkoutSession {
  WorkoutSession {
    id,
    name: format!("Test Session {}", id),
    category: Category::Push,
    variation: Variation::A,
    started_at: ended_at - Duration::minutes(45),
    ended_at,
    exercises: Vec::new(),
    muscle_fatigue_history: fatigue.iter().copied().collect(),
  }
}

/// Create a mock not-yet-persisted session around the given logged exercises
pub fn mock_new_session(exercises: Vec<LoggedExercise>) -> NewWorkoutSession {
  let ended_at = Utc::now();
  NewWorkoutSession {
    name: "Test Workout".to_string(),
    category: Category::Push,
    variation: Variation::A,
    started_at: ended_at - Duration::minutes(45),
    ended_at,
    exercises,
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    // Verify key tables exist
    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('workout_sessions', 'muscle_baselines')"
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert!(tables.len() >= 2, "Expected at least 2 tables, got {}", tables.len());

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_sessions_returns_correct_count() {
    let pool = setup_test_db().await;

    let ids = seed_test_sessions(&pool, 4).await;
    assert_eq!(ids.len(), 4);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workout_sessions")
      .fetch_one(&pool)
      .await
      .expect("Failed to count sessions");

    assert_eq!(count, 4);

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_factories_create_valid_data() {
    let exercise = mock_exercise("push_up", &[(Muscle::Pectoralis, 70.0)]);
    assert_eq!(exercise.id, "push_up");
    assert_eq!(exercise.equipment, vec![Equipment::Bodyweight]);
    assert!(exercise.engages(Muscle::Pectoralis));

    let library = mock_library();
    assert!(library.iter().any(|e| e.id == "bench_press"));
    assert!(library.iter().any(|e| e.id == "squat"));

    let session = mock_session(7, Utc::now(), &[(Muscle::Lats, 60.0)]);
    assert_eq!(session.id, 7);
    assert_eq!(session.muscle_fatigue_history[&Muscle::Lats], 60.0);
    assert!(session.started_at < session.ended_at);

    let new = mock_new_session(Vec::new());
    assert!(new.started_at < new.ended_at);
  }
}
