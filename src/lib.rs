//! Per-muscle fatigue modeling for strength training.
//!
//! The engine converts logged sets into per-muscle volume, scores fatigue
//! against adaptive capacity baselines, decays it over time through a stepped
//! recovery curve, and uses the resulting fatigue map to forecast planned
//! workouts and rank exercises. Session history is the append-only ground
//! truth; everything time-varying is re-derived from it on read.

pub mod baseline;
pub mod db;
pub mod efficiency;
pub mod forecast;
pub mod library;
pub mod models;
pub mod recommendation;
pub mod recovery;
pub mod session;
pub mod volume;

#[cfg(test)]
pub mod test_utils;

pub use baseline::{BaselineStore, MuscleBaseline, NewBaselineEvent, DEFAULT_BASELINE};
pub use db::{DbPool, StoreError};
pub use efficiency::{EfficiencyBadge, EfficiencyScore};
pub use models::{
  Category, Difficulty, Equipment, EquipmentItem, Exercise, ForecastedMuscleState,
  LoggedExercise, LoggedSet, Muscle, MuscleEngagement, MuscleState, NewWorkoutSession,
  PlannedExercise, Variation, WorkoutSession,
};
pub use recommendation::{ExerciseRecommendation, RecommendationStatus};
pub use session::CompletedSession;
