use std::cmp::Ordering;

use log::debug;

use crate::models::{CartItem, Category, Profile};
use crate::planner::categorize::{CategoryMap, build_index};
use crate::planner::config::PlannerConfig;

/// Score each goal category by how under-stocked it is.
///
/// `score = weight - present / total_present`, with the total floored at 1.
/// Sorted by score descending; ties keep goal table order.
pub fn score_categories(
    index: &CategoryMap,
    profile: &Profile,
    config: &PlannerConfig,
) -> Vec<(Category, f64)> {
    let total_present = index.total().max(1) as f64;

    let mut scores: Vec<(Category, f64)> = config
        .goal_weights(profile.goal)
        .iter()
        .map(|w| {
            let present_frac = index.count(w.category) as f64 / total_present;
            (w.category, w.weight - present_frac)
        })
        .collect();

    scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scores
}

/// Suggest up to `top_n` items to buy.
///
/// Categories are walked in need order, proposing their fallback items;
/// the configured cart staples fill any remaining room. Nothing already
/// in the pantry is suggested and no item appears twice.
pub fn suggest_cart<S: AsRef<str>>(
    pantry: &[S],
    profile: &Profile,
    config: &PlannerConfig,
    top_n: usize,
) -> Vec<CartItem> {
    let index = build_index(pantry, config);
    let in_pantry = |item: &str| pantry.iter().any(|p| p.as_ref() == item);

    let mut suggestions: Vec<String> = Vec::new();
    let propose = |item: &String, suggestions: &mut Vec<String>| {
        if suggestions.len() < top_n && !in_pantry(item) && !suggestions.contains(item) {
            suggestions.push(item.clone());
        }
    };

    for (category, score) in score_categories(&index, profile, config) {
        if suggestions.len() >= top_n {
            break;
        }
        debug!("Cart need {} = {:.3}", category, score);
        for item in config.fallbacks_for(category) {
            propose(item, &mut suggestions);
        }
    }

    for item in &config.cart_staples {
        propose(item, &mut suggestions);
    }

    suggestions.into_iter().map(CartItem::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;

    fn profile(goal: Goal) -> Profile {
        Profile::new("Test", 30, 170, goal)
    }

    #[test]
    fn test_scores_sorted_descending() {
        let config = PlannerConfig::default();
        let index = build_index(&["rice", "bread", "spinach"], &config);
        let scores = score_categories(&index, &profile(Goal::BalancedDiet), &config);

        assert_eq!(scores.len(), 5);
        assert_eq!(scores[0].0, Category::Protein);
        assert!(scores.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn test_ties_keep_table_order() {
        let config = PlannerConfig::default();
        let index = build_index::<&str>(&[], &config);
        let scores = score_categories(&index, &profile(Goal::BalancedDiet), &config);

        let order: Vec<Category> = scores.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![
                Category::Carb,
                Category::Protein,
                Category::Vegetable,
                Category::Dairy,
                Category::HealthyFat
            ]
        );
    }

    #[test]
    fn test_empty_pantry_fills_top_n() {
        let config = PlannerConfig::default();
        let cart = suggest_cart::<&str>(&[], &profile(Goal::BalancedDiet), &config, 8);

        let items: Vec<&str> = cart.iter().map(|c| c.item.as_str()).collect();
        assert_eq!(
            items,
            vec!["rice", "bread", "oats", "eggs", "chicken", "tofu", "paneer", "spinach"]
        );
        assert!(cart.iter().all(|c| c.qty == 1));
    }

    #[test]
    fn test_staples_never_exceed_top_n() {
        let config = PlannerConfig::default();
        let cart = suggest_cart(&["quinoa"], &profile(Goal::MuscleGain), &config, 2);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_zero_top_n() {
        let config = PlannerConfig::default();
        let cart = suggest_cart(&["rice"], &profile(Goal::WeightLoss), &config, 0);
        assert!(cart.is_empty());
    }
}
