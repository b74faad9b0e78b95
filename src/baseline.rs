//! Muscle capacity baselines and fatigue-from-volume conversion
//!
//! Each muscle carries a capacity baseline: a system-learned observed maximum
//! session volume, optionally overridden by the user. Session volume expressed
//! as a fraction of the effective baseline (clamped to [0, 100]) is the
//! muscle's fatigue contribution for that session.
//!
//! Key principles:
//! - The learned max only moves up; lowering it takes an explicit reset
//! - Baseline resolution: override, then learned max, then the default
//! - The "new baseline" notification is a returned value, never a side effect

use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};
use std::collections::HashMap;
use std::str::FromStr;

use crate::db::StoreError;
use crate::models::Muscle;

/// Capacity assumed for a muscle with no learned max and no override.
///
/// The single canonical default; every caller resolves through
/// [`MuscleBaseline::effective`] rather than carrying its own constant.
pub const DEFAULT_BASELINE: f64 = 5000.0;

/// Accepted range for user baseline overrides.
pub const OVERRIDE_MIN: f64 = 100.0;
pub const OVERRIDE_MAX: f64 = 1_000_000.0;

/// Per-muscle capacity record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuscleBaseline {
  pub user_override: Option<f64>,
  pub system_learned_max: f64,
}

impl Default for MuscleBaseline {
  fn default() -> Self {
    Self {
      user_override: None,
      system_learned_max: 0.0,
    }
  }
}

impl MuscleBaseline {
  /// Effective baseline: override wins, then a positive learned max, then the
  /// default constant.
  pub fn effective(&self) -> f64 {
    match self.user_override {
      Some(value) => value,
      None if self.system_learned_max > 0.0 => self.system_learned_max,
      None => DEFAULT_BASELINE,
    }
  }
}

/// Emitted when a session volume exceeds a muscle's learned max. Consumed by
/// the UI to acknowledge the new baseline with the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewBaselineEvent {
  pub muscle: Muscle,
  pub previous_max: f64,
  pub new_max: f64,
  pub session_volume: f64,
}

/// In-memory map of muscle capacity records.
///
/// The only mutable state in the engine. All mutation goes through
/// [`observe_session_volume`](Self::observe_session_volume),
/// [`set_override`](Self::set_override), and [`reset`](Self::reset).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaselineStore {
  baselines: HashMap<Muscle, MuscleBaseline>,
}

impl BaselineStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_records(baselines: HashMap<Muscle, MuscleBaseline>) -> Self {
    Self { baselines }
  }

  /// The stored record for a muscle; zero-state when never observed.
  pub fn get(&self, muscle: Muscle) -> MuscleBaseline {
    self.baselines.get(&muscle).copied().unwrap_or_default()
  }

  /// Resolved effective baseline for a muscle.
  pub fn effective(&self, muscle: Muscle) -> f64 {
    self.get(muscle).effective()
  }

  pub fn records(&self) -> &HashMap<Muscle, MuscleBaseline> {
    &self.baselines
  }

  /// Record an observed session volume. The learned max ratchets upward only;
  /// when it moves, the returned event carries the old and new values for
  /// user-facing acknowledgment.
  pub fn observe_session_volume(
    &mut self,
    muscle: Muscle,
    volume: f64,
  ) -> Option<NewBaselineEvent> {
    if !volume.is_finite() || volume <= 0.0 {
      return None;
    }

    let record = self.baselines.entry(muscle).or_default();
    if volume <= record.system_learned_max {
      return None;
    }

    let previous_max = record.system_learned_max;
    record.system_learned_max = volume.round();

    tracing::info!(
      muscle = %muscle,
      previous_max,
      new_max = record.system_learned_max,
      "new muscle baseline observed"
    );

    Some(NewBaselineEvent {
      muscle,
      previous_max,
      new_max: record.system_learned_max,
      session_volume: volume,
    })
  }

  /// Direct user edit of the override. `None` clears it; a value outside
  /// [`OVERRIDE_MIN`, `OVERRIDE_MAX`] (or non-finite) is a silent no-change.
  pub fn set_override(&mut self, muscle: Muscle, value: Option<f64>) {
    match value {
      None => {
        self.baselines.entry(muscle).or_default().user_override = None;
      }
      Some(v) if v.is_finite() && (OVERRIDE_MIN..=OVERRIDE_MAX).contains(&v) => {
        self.baselines.entry(muscle).or_default().user_override = Some(v);
      }
      Some(_) => {
        // Out of range: keep the prior value
      }
    }
  }

  /// Explicit user-initiated escape hatch; the only path that lowers a
  /// learned max.
  pub fn reset(&mut self, muscle: Muscle) {
    self.baselines.insert(
      muscle,
      MuscleBaseline {
        user_override: None,
        system_learned_max: DEFAULT_BASELINE,
      },
    );
  }
}

/// ---------------------------------------------------------------------------
/// Fatigue Accumulator
/// ---------------------------------------------------------------------------

/// Session volume expressed as a percentage of the baseline, clamped to
/// [0, 100]. A non-positive baseline substitutes [`DEFAULT_BASELINE`] so the
/// ratio is always finite.
pub fn fatigue_percent(volume: f64, baseline: f64) -> f64 {
  let volume = if volume.is_finite() && volume > 0.0 {
    volume
  } else {
    return 0.0;
  };
  let baseline = if baseline.is_finite() && baseline > 0.0 {
    baseline
  } else {
    DEFAULT_BASELINE
  };

  ((volume / baseline) * 100.0).clamp(0.0, 100.0)
}

// ---------------------------------------------------------------------------
// Database Operations
// ---------------------------------------------------------------------------

/// Load all persisted baseline records
pub async fn load_baselines(pool: &SqlitePool) -> Result<BaselineStore, StoreError> {
  let rows = sqlx::query(
    "SELECT muscle, system_learned_max, user_override FROM muscle_baselines",
  )
  .fetch_all(pool)
  .await?;

  let mut baselines = HashMap::new();
  for row in rows {
    let muscle_str: String = row.get("muscle");
    let muscle = Muscle::from_str(&muscle_str).map_err(StoreError::Corrupt)?;
    baselines.insert(
      muscle,
      MuscleBaseline {
        system_learned_max: row.get("system_learned_max"),
        user_override: row.get("user_override"),
      },
    );
  }

  Ok(BaselineStore::from_records(baselines))
}

/// Persist one muscle's baseline record.
///
/// The learned max is written with a monotonic guard so that a concurrent
/// session completion can never lower the stored value or lose an update.
pub async fn save_baseline(
  pool: &SqlitePool,
  muscle: Muscle,
  record: &MuscleBaseline,
) -> Result<(), StoreError> {
  sqlx::query(
    r#"
    INSERT INTO muscle_baselines (muscle, system_learned_max, user_override, updated_at)
    VALUES (?1, ?2, ?3, CURRENT_TIMESTAMP)
    ON CONFLICT(muscle) DO UPDATE SET
      system_learned_max = MAX(system_learned_max, excluded.system_learned_max),
      user_override = excluded.user_override,
      updated_at = CURRENT_TIMESTAMP
    "#,
  )
  .bind(muscle.as_str())
  .bind(record.system_learned_max)
  .bind(record.user_override)
  .execute(pool)
  .await?;

  Ok(())
}

/// Persist every record in the store.
pub async fn save_all_baselines(
  pool: &SqlitePool,
  store: &BaselineStore,
) -> Result<(), StoreError> {
  for (muscle, record) in store.records() {
    save_baseline(pool, *muscle, record).await?;
  }
  Ok(())
}

/// Persist a reset, overwriting the learned max unconditionally. This is the
/// one write that bypasses the monotonic guard.
pub async fn save_baseline_reset(pool: &SqlitePool, muscle: Muscle) -> Result<(), StoreError> {
  sqlx::query(
    r#"
    INSERT INTO muscle_baselines (muscle, system_learned_max, user_override, updated_at)
    VALUES (?1, ?2, NULL, CURRENT_TIMESTAMP)
    ON CONFLICT(muscle) DO UPDATE SET
      system_learned_max = excluded.system_learned_max,
      user_override = NULL,
      updated_at = CURRENT_TIMESTAMP
    "#,
  )
  .bind(muscle.as_str())
  .bind(DEFAULT_BASELINE)
  .execute(pool)
  .await?;

  Ok(())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
