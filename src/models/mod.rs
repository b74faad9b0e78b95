pub mod exercise;
pub mod recovery;
pub mod workout;

pub use exercise::{
  Category, Difficulty, Equipment, EquipmentItem, Exercise, Muscle, MuscleEngagement, Variation,
};
pub use recovery::{ForecastedMuscleState, MuscleState};
pub use workout::{LoggedExercise, LoggedSet, NewWorkoutSession, PlannedExercise, WorkoutSession};
