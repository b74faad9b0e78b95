use serde::{Deserialize, Serialize};

/// The closed set of muscle groups tracked by the engine.
///
/// Every per-muscle map in the crate is keyed by this enum; muscles an
/// exercise does not engage implicitly accumulate zero volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Muscle {
  Pectoralis,
  Deltoids,
  Triceps,
  Biceps,
  Forearms,
  Traps,
  Lats,
  LowerBack,
  Core,
  Glutes,
  Quadriceps,
  Hamstrings,
  Calves,
}

impl Muscle {
  /// All muscle groups, for iteration. Order is stable and used for output.
  pub fn all() -> &'static [Muscle] {
    &[
      Muscle::Pectoralis,
      Muscle::Deltoids,
      Muscle::Triceps,
      Muscle::Biceps,
      Muscle::Forearms,
      Muscle::Traps,
      Muscle::Lats,
      Muscle::LowerBack,
      Muscle::Core,
      Muscle::Glutes,
      Muscle::Quadriceps,
      Muscle::Hamstrings,
      Muscle::Calves,
    ]
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Muscle::Pectoralis => "pectoralis",
      Muscle::Deltoids => "deltoids",
      Muscle::Triceps => "triceps",
      Muscle::Biceps => "biceps",
      Muscle::Forearms => "forearms",
      Muscle::Traps => "traps",
      Muscle::Lats => "lats",
      Muscle::LowerBack => "lower_back",
      Muscle::Core => "core",
      Muscle::Glutes => "glutes",
      Muscle::Quadriceps => "quadriceps",
      Muscle::Hamstrings => "hamstrings",
      Muscle::Calves => "calves",
    }
  }

  /// Display name for UI-facing output
  pub fn label(&self) -> &'static str {
    match self {
      Muscle::Pectoralis => "Pectoralis",
      Muscle::Deltoids => "Deltoids",
      Muscle::Triceps => "Triceps",
      Muscle::Biceps => "Biceps",
      Muscle::Forearms => "Forearms",
      Muscle::Traps => "Traps",
      Muscle::Lats => "Lats",
      Muscle::LowerBack => "Lower back",
      Muscle::Core => "Core",
      Muscle::Glutes => "Glutes",
      Muscle::Quadriceps => "Quadriceps",
      Muscle::Hamstrings => "Hamstrings",
      Muscle::Calves => "Calves",
    }
  }
}

impl std::fmt::Display for Muscle {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for Muscle {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Muscle::all()
      .iter()
      .find(|m| m.as_str() == s)
      .copied()
      .ok_or_else(|| format!("Unknown muscle: {}", s))
  }
}

/// How strongly an exercise stresses one muscle, independent of the others.
///
/// Percentages across an exercise are not required to sum to 100; a compound
/// lift may stress several muscles at up to 100% each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuscleEngagement {
  pub muscle: Muscle,
  pub percentage: f64,
}

impl MuscleEngagement {
  pub fn new(muscle: Muscle, percentage: f64) -> Self {
    Self { muscle, percentage }
  }
}

/// Workout split category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
  Push,
  Pull,
  Legs,
  Core,
}

impl std::fmt::Display for Category {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Category::Push => write!(f, "push"),
      Category::Pull => write!(f, "pull"),
      Category::Legs => write!(f, "legs"),
      Category::Core => write!(f, "core"),
    }
  }
}

impl std::str::FromStr for Category {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "push" => Ok(Category::Push),
      "pull" => Ok(Category::Pull),
      "legs" => Ok(Category::Legs),
      "core" => Ok(Category::Core),
      _ => Err(format!("Unknown category: {}", s)),
    }
  }
}

/// A/B variation tag for alternating workout days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variation {
  A,
  B,
}

impl std::fmt::Display for Variation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Variation::A => write!(f, "A"),
      Variation::B => write!(f, "B"),
    }
  }
}

impl std::str::FromStr for Variation {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "A" => Ok(Variation::A),
      "B" => Ok(Variation::B),
      _ => Err(format!("Unknown variation: {}", s)),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
  Bodyweight,
  Barbell,
  Dumbbell,
  Kettlebell,
  Bench,
  PullUpBar,
  ResistanceBand,
  Cable,
  Machine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
  Beginner,
  Intermediate,
  Advanced,
}

/// An exercise definition from the static library. Immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
  pub id: String,
  pub name: String,
  pub category: Category,
  pub equipment: Vec<Equipment>,
  pub difficulty: Difficulty,
  pub engagements: Vec<MuscleEngagement>,
  pub variation: Variation,
}

impl Exercise {
  /// Engagement percentage for one muscle; 0 when the exercise does not
  /// train it.
  pub fn engagement_pct(&self, muscle: Muscle) -> f64 {
    self
      .engagements
      .iter()
      .find(|e| e.muscle == muscle)
      .map(|e| e.percentage)
      .unwrap_or(0.0)
  }

  pub fn engages(&self, muscle: Muscle) -> bool {
    self.engagements.iter().any(|e| e.muscle == muscle && e.percentage > 0.0)
  }
}

/// One entry of the user's equipment inventory.
///
/// Only the Recommendation Scorer's availability gate reads this; an exercise
/// is available when every required equipment type has quantity > 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
  pub equipment: Equipment,
  pub quantity: i64,
}
