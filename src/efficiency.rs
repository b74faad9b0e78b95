//! Exercise-efficiency scoring with bottleneck detection
//!
//! For a chosen target muscle, scores how much target stimulus an exercise
//! delivers before a different, already-more-fatigued supporting muscle limits
//! the set. The supporting muscle with the least remaining capacity (weighted
//! by engagement) is the bottleneck.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Exercise, Muscle};

/// Efficiency above this is an "Efficient" pick.
pub const EFFICIENT_THRESHOLD: f64 = 5.0;
/// Efficiency below this is a "Poor choice"; between the two is "Limited".
pub const LIMITED_THRESHOLD: f64 = 2.0;

/// Badge shown next to a scored candidate. Thresholds are exact for
/// compatibility with existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyBadge {
  Efficient,
  Limited,
  PoorChoice,
}

impl EfficiencyBadge {
  pub fn from_score(score: f64) -> Self {
    if score > EFFICIENT_THRESHOLD {
      EfficiencyBadge::Efficient
    } else if score >= LIMITED_THRESHOLD {
      EfficiencyBadge::Limited
    } else {
      EfficiencyBadge::PoorChoice
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      EfficiencyBadge::Efficient => "Efficient",
      EfficiencyBadge::Limited => "Limited",
      EfficiencyBadge::PoorChoice => "Poor choice",
    }
  }

  /// Color key consumed by the exercise-selection UI
  pub fn color(&self) -> &'static str {
    match self {
      EfficiencyBadge::Efficient => "green",
      EfficiencyBadge::Limited => "yellow",
      EfficiencyBadge::PoorChoice => "red",
    }
  }
}

/// A scored candidate exercise for one target muscle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EfficiencyScore {
  pub exercise_id: String,
  pub target: Muscle,
  pub target_score: f64,
  pub bottleneck: Option<Muscle>,
  pub bottleneck_score: Option<f64>,
  pub efficiency: f64,
  pub badge: EfficiencyBadge,
}

fn fatigue_of(fatigue: &HashMap<Muscle, f64>, muscle: Muscle) -> f64 {
  fatigue.get(&muscle).copied().unwrap_or(0.0).clamp(0.0, 100.0)
}

/// The supporting muscle with the minimum engagement-weighted remaining
/// capacity, or `None` when the exercise has no supporting muscles.
pub fn find_bottleneck_muscle(
  exercise: &Exercise,
  target: Muscle,
  fatigue: &HashMap<Muscle, f64>,
) -> Option<(Muscle, f64)> {
  exercise
    .engagements
    .iter()
    .filter(|e| e.muscle != target && e.percentage > 0.0)
    .map(|e| {
      let capacity_remaining = 100.0 - fatigue_of(fatigue, e.muscle);
      (e.muscle, e.percentage * capacity_remaining)
    })
    .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}

/// Score one candidate exercise for a target muscle. `None` when the exercise
/// does not engage the target at all.
pub fn score_exercise(
  exercise: &Exercise,
  target: Muscle,
  fatigue: &HashMap<Muscle, f64>,
) -> Option<EfficiencyScore> {
  let target_pct = exercise.engagement_pct(target);
  if target_pct <= 0.0 {
    return None;
  }

  let target_capacity_remaining = 100.0 - fatigue_of(fatigue, target);
  let target_score = target_pct * target_capacity_remaining;

  let bottleneck = find_bottleneck_muscle(exercise, target, fatigue);

  let efficiency = match bottleneck {
    // A fully spent supporting muscle blocks the set outright
    Some((_, score)) if score <= 0.0 => 0.0,
    Some((_, score)) => target_score / score,
    None => target_score,
  };

  Some(EfficiencyScore {
    exercise_id: exercise.id.clone(),
    target,
    target_score,
    bottleneck: bottleneck.map(|(m, _)| m),
    bottleneck_score: bottleneck.map(|(_, s)| s),
    efficiency,
    badge: EfficiencyBadge::from_score(efficiency),
  })
}

/// Score and rank every library exercise that engages the target muscle,
/// best first.
pub fn rank_for_target(
  library: &[Exercise],
  target: Muscle,
  fatigue: &HashMap<Muscle, f64>,
) -> Vec<EfficiencyScore> {
  let mut scores: Vec<EfficiencyScore> = library
    .iter()
    .filter_map(|e| score_exercise(e, target, fatigue))
    .collect();

  scores.sort_by(|a, b| {
    b.efficiency
      .partial_cmp(&a.efficiency)
      .unwrap_or(std::cmp::Ordering::Equal)
  });
  scores
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
