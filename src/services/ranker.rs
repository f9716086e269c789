use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::{Dish, RecommendationResult, RecommendedDish};

/// Number of dishes returned per recommendation
pub const TOP_K: usize = 5;

/// Rounds a score for presentation
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Orders candidates by score and keeps the best `k` distinct dishes.
///
/// `scores` is parallel to `candidates`. Sorting uses the unrounded score and
/// is stable, so equal scores keep catalog order. After sorting, a candidate is
/// skipped when its id or its normalized name has already been kept; the same
/// dish shows up under several ids in older catalog revisions.
pub fn rank(candidates: &[Dish], scores: &[f64], k: usize) -> RecommendationResult {
    debug_assert_eq!(candidates.len(), scores.len());

    let mut order: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    order.sort_by(|a, b| compare_desc(a.1, b.1));

    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();
    let mut dishes = Vec::with_capacity(k.min(order.len()));

    for (index, score) in order {
        if dishes.len() == k {
            break;
        }

        let Some(dish) = candidates.get(index) else {
            continue;
        };

        let name = dish.normalized_name();
        if seen_ids.contains(&dish.dish_id) || seen_names.contains(&name) {
            tracing::debug!(
                dish_id = dish.dish_id,
                name = %dish.name,
                "Skipping duplicate dish"
            );
            continue;
        }

        seen_ids.insert(dish.dish_id);
        seen_names.insert(name);
        dishes.push(RecommendedDish {
            dish_id: dish.dish_id,
            name: dish.name.clone(),
            score: round_score(score),
        });
    }

    RecommendationResult { dishes }
}

/// Descending comparison that pushes NaN to the end
fn compare_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    }
}
