//! Default exercise library
//!
//! A read-only catalog loaded once at startup. Every engine component takes
//! the library as a plain slice, so an alternate catalog (or a test fixture)
//! can be swapped in without touching the engine.

use crate::models::{
  Category, Difficulty, Equipment, Exercise, Muscle, MuscleEngagement, Variation,
};

fn exercise(
  id: &str,
  name: &str,
  category: Category,
  equipment: &[Equipment],
  difficulty: Difficulty,
  engagements: &[(Muscle, f64)],
  variation: Variation,
) -> Exercise {
  Exercise {
    id: id.to_string(),
    name: name.to_string(),
    category,
    equipment: equipment.to_vec(),
    difficulty,
    engagements: engagements
      .iter()
      .map(|(m, pct)| MuscleEngagement::new(*m, *pct))
      .collect(),
    variation,
  }
}

/// Build the default exercise library.
pub fn default_library() -> Vec<Exercise> {
  use Category::{Legs, Pull, Push};
  use Difficulty::*;
  use Equipment::*;
  use Muscle::*;
  use Variation::{A, B};

  vec![
    // Push
    exercise(
      "bench_press",
      "Barbell Bench Press",
      Push,
      &[Barbell, Bench],
      Intermediate,
      &[(Pectoralis, 85.0), (Triceps, 40.0), (Deltoids, 30.0)],
      A,
    ),
    exercise(
      "incline_dumbbell_press",
      "Incline Dumbbell Press",
      Push,
      &[Dumbbell, Bench],
      Intermediate,
      &[(Pectoralis, 75.0), (Deltoids, 45.0), (Triceps, 35.0)],
      B,
    ),
    exercise(
      "overhead_press",
      "Overhead Press",
      Push,
      &[Barbell],
      Intermediate,
      &[(Deltoids, 80.0), (Triceps, 45.0), (Core, 25.0)],
      A,
    ),
    exercise(
      "lateral_raise",
      "Dumbbell Lateral Raise",
      Push,
      &[Dumbbell],
      Beginner,
      &[(Deltoids, 70.0), (Traps, 20.0)],
      B,
    ),
    exercise(
      "chest_fly",
      "Dumbbell Chest Fly",
      Push,
      &[Dumbbell, Bench],
      Beginner,
      &[(Pectoralis, 80.0), (Deltoids, 20.0)],
      B,
    ),
    exercise(
      "push_up",
      "Push-Up",
      Push,
      &[Bodyweight],
      Beginner,
      &[(Pectoralis, 70.0), (Triceps, 45.0), (Deltoids, 30.0), (Core, 25.0)],
      A,
    ),
    exercise(
      "tricep_pushdown",
      "Cable Tricep Pushdown",
      Push,
      &[Cable],
      Beginner,
      &[(Triceps, 80.0)],
      A,
    ),
    // Pull
    exercise(
      "barbell_row",
      "Barbell Row",
      Pull,
      &[Barbell],
      Intermediate,
      &[(Lats, 75.0), (Biceps, 55.0), (LowerBack, 40.0), (Traps, 35.0)],
      A,
    ),
    exercise(
      "pull_up",
      "Pull-Up",
      Pull,
      &[PullUpBar],
      Advanced,
      &[(Lats, 85.0), (Biceps, 60.0), (Core, 25.0)],
      A,
    ),
    exercise(
      "lat_pulldown",
      "Lat Pulldown",
      Pull,
      &[Cable, Machine],
      Beginner,
      &[(Lats, 80.0), (Biceps, 50.0)],
      B,
    ),
    exercise(
      "dumbbell_curl",
      "Dumbbell Curl",
      Pull,
      &[Dumbbell],
      Beginner,
      &[(Biceps, 80.0), (Forearms, 30.0)],
      A,
    ),
    exercise(
      "face_pull",
      "Cable Face Pull",
      Pull,
      &[Cable],
      Beginner,
      &[(Deltoids, 55.0), (Traps, 50.0)],
      B,
    ),
    exercise(
      "deadlift",
      "Deadlift",
      Pull,
      &[Barbell],
      Advanced,
      &[
        (LowerBack, 75.0),
        (Glutes, 70.0),
        (Hamstrings, 65.0),
        (Traps, 45.0),
        (Forearms, 40.0),
        (Core, 35.0),
      ],
      B,
    ),
    // Legs
    exercise(
      "back_squat",
      "Barbell Back Squat",
      Legs,
      &[Barbell],
      Intermediate,
      &[(Quadriceps, 90.0), (Glutes, 75.0), (Core, 40.0), (Hamstrings, 30.0)],
      A,
    ),
    exercise(
      "romanian_deadlift",
      "Romanian Deadlift",
      Legs,
      &[Barbell],
      Intermediate,
      &[(Hamstrings, 85.0), (Glutes, 70.0), (LowerBack, 45.0)],
      B,
    ),
    exercise(
      "walking_lunge",
      "Walking Lunge",
      Legs,
      &[Dumbbell],
      Beginner,
      &[(Quadriceps, 75.0), (Glutes, 65.0), (Core, 30.0)],
      B,
    ),
    exercise(
      "leg_press",
      "Leg Press",
      Legs,
      &[Machine],
      Beginner,
      &[(Quadriceps, 85.0), (Glutes, 55.0)],
      A,
    ),
    exercise(
      "calf_raise",
      "Standing Calf Raise",
      Legs,
      &[Dumbbell],
      Beginner,
      &[(Calves, 90.0)],
      A,
    ),
    // Core
    exercise(
      "plank",
      "Plank",
      Category::Core,
      &[Bodyweight],
      Beginner,
      &[(Core, 75.0), (Deltoids, 20.0)],
      A,
    ),
    exercise(
      "hanging_leg_raise",
      "Hanging Leg Raise",
      Category::Core,
      &[PullUpBar],
      Intermediate,
      &[(Core, 80.0), (Forearms, 30.0)],
      B,
    ),
    exercise(
      "russian_twist",
      "Russian Twist",
      Category::Core,
      &[Kettlebell],
      Beginner,
      &[(Core, 70.0)],
      B,
    ),
  ]
}

/// Look up an exercise by id.
pub fn find_exercise<'a>(library: &'a [Exercise], id: &str) -> Option<&'a Exercise> {
  library.iter().find(|e| e.id == id)
}
