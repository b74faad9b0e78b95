//! Whole-exercise ranking by training opportunity
//!
//! Ranks exercises across all engaged muscles rather than for one target:
//! freshness of the primary movers, penalized by the single worst fatigue
//! among anything the exercise touches, gated by equipment availability.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Equipment, EquipmentItem, Exercise, Muscle};

/// An engagement at or above this percentage makes the muscle a primary mover.
pub const PRIMARY_ENGAGEMENT_PCT: f64 = 50.0;
/// Fatigue above this on any engaged muscle marks it a limiting factor.
pub const LIMITING_FATIGUE_PCT: f64 = 66.0;
/// Weight applied to the worst engaged-muscle fatigue in the opportunity score.
pub const MAX_FATIGUE_PENALTY: f64 = 0.5;

/// Status classification for a recommended exercise, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationStatus {
  Excellent,
  Good,
  Suboptimal,
  NotRecommended,
}

impl RecommendationStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      RecommendationStatus::Excellent => "excellent",
      RecommendationStatus::Good => "good",
      RecommendationStatus::Suboptimal => "suboptimal",
      RecommendationStatus::NotRecommended => "not-recommended",
    }
  }
}

/// One ranked exercise with its scoring breakdown and explanatory text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseRecommendation {
  pub exercise_id: String,
  pub name: String,
  pub opportunity_score: f64,
  pub avg_freshness: f64,
  pub max_fatigue: f64,
  pub status: RecommendationStatus,
  pub limiting_muscle: Option<Muscle>,
  pub reason: String,
}

fn fatigue_of(fatigue: &HashMap<Muscle, f64>, muscle: Muscle) -> f64 {
  fatigue.get(&muscle).copied().unwrap_or(0.0).clamp(0.0, 100.0)
}

/// Whether the user's inventory covers every equipment requirement.
/// Bodyweight is always on hand; everything else needs quantity > 0.
pub fn equipment_available(exercise: &Exercise, inventory: &[EquipmentItem]) -> bool {
  exercise.equipment.iter().all(|required| {
    *required == Equipment::Bodyweight
      || inventory
        .iter()
        .any(|item| item.equipment == *required && item.quantity > 0)
  })
}

/// Score a single exercise's training opportunity against the current
/// fatigue map. Equipment is not consulted here; see [`recommend`].
pub fn score_opportunity(
  exercise: &Exercise,
  fatigue: &HashMap<Muscle, f64>,
) -> ExerciseRecommendation {
  let engaged: Vec<Muscle> = exercise
    .engagements
    .iter()
    .filter(|e| e.percentage > 0.0)
    .map(|e| e.muscle)
    .collect();

  let primary: Vec<Muscle> = exercise
    .engagements
    .iter()
    .filter(|e| e.percentage >= PRIMARY_ENGAGEMENT_PCT)
    .map(|e| e.muscle)
    .collect();

  // Freshness reads from the primary movers; an exercise with no engagement
  // at or above the primary threshold falls back to everything it touches
  let freshness_muscles: &[Muscle] = if primary.is_empty() { &engaged } else { &primary };
  let avg_freshness = if freshness_muscles.is_empty() {
    100.0
  } else {
    freshness_muscles
      .iter()
      .map(|m| 100.0 - fatigue_of(fatigue, *m))
      .sum::<f64>()
      / freshness_muscles.len() as f64
  };

  // Worst fatigue across everything engaged, primary or not
  let (limiting_muscle, max_fatigue) = engaged
    .iter()
    .map(|m| (*m, fatigue_of(fatigue, *m)))
    .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    .map(|(m, f)| (Some(m).filter(|_| f > LIMITING_FATIGUE_PCT), f))
    .unwrap_or((None, 0.0));

  let opportunity_score = avg_freshness - max_fatigue * MAX_FATIGUE_PENALTY;

  let has_limiter = limiting_muscle.is_some();
  let status = if !has_limiter && avg_freshness >= 90.0 {
    RecommendationStatus::Excellent
  } else if !has_limiter && avg_freshness >= 70.0 {
    RecommendationStatus::Good
  } else if avg_freshness >= 50.0 {
    RecommendationStatus::Suboptimal
  } else {
    RecommendationStatus::NotRecommended
  };

  let reason = match (status, limiting_muscle) {
    (RecommendationStatus::Excellent, _) => "All primary movers fresh".to_string(),
    (RecommendationStatus::Good, _) => "Primary movers mostly recovered".to_string(),
    (_, Some(muscle)) => format!("{} still {}% fatigued", muscle.label(), max_fatigue.round()),
    (RecommendationStatus::Suboptimal, None) => "Primary movers partially fatigued".to_string(),
    (RecommendationStatus::NotRecommended, None) => "Primary movers need recovery".to_string(),
  };

  ExerciseRecommendation {
    exercise_id: exercise.id.clone(),
    name: exercise.name.clone(),
    opportunity_score,
    avg_freshness,
    max_fatigue,
    status,
    limiting_muscle,
    reason,
  }
}

/// Rank every available library exercise by opportunity, best first.
/// Exercises the user lacks equipment for are filtered out entirely.
pub fn recommend(
  library: &[Exercise],
  fatigue: &HashMap<Muscle, f64>,
  inventory: &[EquipmentItem],
) -> Vec<ExerciseRecommendation> {
  let mut recommendations: Vec<ExerciseRecommendation> = library
    .iter()
    .filter(|e| equipment_available(e, inventory))
    .map(|e| score_opportunity(e, fatigue))
    .collect();

  recommendations.sort_by(|a, b| {
    b.opportunity_score
      .partial_cmp(&a.opportunity_score)
      .unwrap_or(std::cmp::Ordering::Equal)
  });
  recommendations
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assert_approx_eq;
  use crate::test_utils::{mock_exercise, mock_exercise_with_equipment};

  fn full_inventory() -> Vec<EquipmentItem> {
    vec![
      EquipmentItem { equipment: Equipment::Barbell, quantity: 1 },
      EquipmentItem { equipment: Equipment::Dumbbell, quantity: 2 },
      EquipmentItem { equipment: Equipment::Bench, quantity: 1 },
      EquipmentItem { equipment: Equipment::PullUpBar, quantity: 1 },
    ]
  }

  #[test]
  fn test_fresh_exercise_is_excellent() {
    let bench = mock_exercise(
      "bench_press",
      &[(Muscle::Pectoralis, 85.0), (Muscle::Triceps, 40.0)],
    );
    let rec = score_opportunity(&bench, &HashMap::new());

    assert_eq!(rec.status, RecommendationStatus::Excellent);
    assert_eq!(rec.avg_freshness, 100.0);
    assert_eq!(rec.max_fatigue, 0.0);
    assert_eq!(rec.opportunity_score, 100.0);
    assert_eq!(rec.limiting_muscle, None);
  }

  #[test]
  fn test_fatigued_secondary_penalizes_score() {
    // Primary pec is fresh, but 80% triceps fatigue drags the score down
    let bench = mock_exercise(
      "bench_press",
      &[(Muscle::Pectoralis, 85.0), (Muscle::Triceps, 40.0)],
    );
    let fatigue = HashMap::from([(Muscle::Triceps, 80.0)]);

    let rec = score_opportunity(&bench, &fatigue);

    // avg_freshness over primaries only (pec) = 100; penalty 80 * 0.5
    assert_eq!(rec.avg_freshness, 100.0);
    assert_eq!(rec.max_fatigue, 80.0);
    assert_approx_eq!(rec.opportunity_score, 60.0, 1e-9);
    // Limiter present but freshness >= 50 -> suboptimal
    assert_eq!(rec.status, RecommendationStatus::Suboptimal);
    assert_eq!(rec.limiting_muscle, Some(Muscle::Triceps));
  }

  #[test]
  fn test_status_boundaries() {
    let squat = mock_exercise(
      "squat",
      &[(Muscle::Quadriceps, 90.0), (Muscle::Glutes, 80.0)],
    );

    // Both primaries at 10% -> freshness 90, no limiter -> excellent
    let fatigue = HashMap::from([(Muscle::Quadriceps, 10.0), (Muscle::Glutes, 10.0)]);
    assert_eq!(
      score_opportunity(&squat, &fatigue).status,
      RecommendationStatus::Excellent
    );

    // Both at 25% -> freshness 75, no limiter -> good
    let fatigue = HashMap::from([(Muscle::Quadriceps, 25.0), (Muscle::Glutes, 25.0)]);
    assert_eq!(
      score_opportunity(&squat, &fatigue).status,
      RecommendationStatus::Good
    );

    // One primary past the limiting threshold, freshness still >= 50
    let fatigue = HashMap::from([(Muscle::Quadriceps, 70.0), (Muscle::Glutes, 10.0)]);
    let rec = score_opportunity(&squat, &fatigue);
    assert_eq!(rec.status, RecommendationStatus::Suboptimal);
    assert_eq!(rec.limiting_muscle, Some(Muscle::Quadriceps));

    // Everything wrecked -> not recommended
    let fatigue = HashMap::from([(Muscle::Quadriceps, 90.0), (Muscle::Glutes, 85.0)]);
    assert_eq!(
      score_opportunity(&squat, &fatigue).status,
      RecommendationStatus::NotRecommended
    );
  }

  #[test]
  fn test_no_primary_engagements_falls_back_to_all_engaged() {
    let carry = mock_exercise(
      "farmers_carry",
      &[(Muscle::Forearms, 45.0), (Muscle::Traps, 40.0)],
    );
    let fatigue = HashMap::from([(Muscle::Forearms, 40.0)]);

    let rec = score_opportunity(&carry, &fatigue);
    // Freshness over both engaged muscles: (60 + 100) / 2
    assert_approx_eq!(rec.avg_freshness, 80.0, 1e-9);
  }

  #[test]
  fn test_equipment_gate_filters_exercises() {
    let library = vec![
      mock_exercise_with_equipment(
        "bench_press",
        &[(Muscle::Pectoralis, 85.0)],
        &[Equipment::Barbell, Equipment::Bench],
      ),
      mock_exercise_with_equipment(
        "cable_fly",
        &[(Muscle::Pectoralis, 80.0)],
        &[Equipment::Cable],
      ),
      mock_exercise_with_equipment(
        "push_up",
        &[(Muscle::Pectoralis, 70.0)],
        &[Equipment::Bodyweight],
      ),
    ];

    let recs = recommend(&library, &HashMap::new(), &full_inventory());

    // No cable machine in the inventory
    let ids: Vec<&str> = recs.iter().map(|r| r.exercise_id.as_str()).collect();
    assert!(ids.contains(&"bench_press"));
    assert!(ids.contains(&"push_up"));
    assert!(!ids.contains(&"cable_fly"));
  }

  #[test]
  fn test_equipment_gate_requires_positive_quantity() {
    let row = mock_exercise_with_equipment(
      "barbell_row",
      &[(Muscle::Lats, 75.0)],
      &[Equipment::Barbell],
    );

    let empty_rack = vec![EquipmentItem { equipment: Equipment::Barbell, quantity: 0 }];
    assert!(!equipment_available(&row, &empty_rack));

    let stocked = vec![EquipmentItem { equipment: Equipment::Barbell, quantity: 1 }];
    assert!(equipment_available(&row, &stocked));
  }

  #[test]
  fn test_bodyweight_always_available() {
    let push_up = mock_exercise_with_equipment(
      "push_up",
      &[(Muscle::Pectoralis, 70.0)],
      &[Equipment::Bodyweight],
    );
    assert!(equipment_available(&push_up, &[]));
  }

  #[test]
  fn test_recommendations_sorted_by_opportunity_descending() {
    let library = vec![
      mock_exercise("bench_press", &[(Muscle::Pectoralis, 85.0), (Muscle::Triceps, 40.0)]),
      mock_exercise("squat", &[(Muscle::Quadriceps, 90.0), (Muscle::Glutes, 80.0)]),
      mock_exercise("barbell_row", &[(Muscle::Lats, 75.0), (Muscle::Biceps, 55.0)]),
    ];
    // Push day was yesterday; legs are fresh
    let fatigue = HashMap::from([
      (Muscle::Pectoralis, 70.0),
      (Muscle::Triceps, 50.0),
      (Muscle::Biceps, 20.0),
    ]);

    let recs = recommend(&library, &fatigue, &full_inventory());

    assert_eq!(recs.len(), 3);
    assert!(recs[0].opportunity_score >= recs[1].opportunity_score);
    assert!(recs[1].opportunity_score >= recs[2].opportunity_score);
    assert_eq!(recs[0].exercise_id, "squat");
    assert_eq!(recs.last().unwrap().exercise_id, "bench_press");
  }
}
