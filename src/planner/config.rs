use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Category, Goal};
use crate::planner::constants::{
    CART_STAPLES, CATEGORY_FALLBACKS, CATEGORY_HINTS, CATEGORY_KEYWORDS, DEFAULT_TOP_N,
    GOAL_WEIGHTS, MEAL_STAPLES,
};

/// Keywords that place an ingredient into a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

/// Generic shopping items proposed for a missing category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFallback {
    pub category: Category,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeight {
    pub category: Category,
    pub weight: f64,
}

/// Category weights associated with one goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProfile {
    pub goal: Goal,
    pub weights: Vec<CategoryWeight>,
}

/// Lookup tables driving categorization, meal generation and cart scoring.
///
/// Order matters in every list: keyword rules are matched first to last,
/// then hints, and fallbacks and staples are proposed first to last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub keywords: Vec<KeywordRule>,
    pub hints: Vec<KeywordRule>,
    pub category_fallbacks: Vec<CategoryFallback>,
    pub goal_profiles: Vec<GoalProfile>,
    pub meal_staples: Vec<String>,
    pub cart_staples: Vec<String>,
    pub top_n: usize,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn keyword_rules(table: &[(Category, &[&str])]) -> Vec<KeywordRule> {
    table
        .iter()
        .map(|(category, keywords)| KeywordRule {
            category: *category,
            keywords: owned(keywords),
        })
        .collect()
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            keywords: keyword_rules(CATEGORY_KEYWORDS),
            hints: keyword_rules(CATEGORY_HINTS),
            category_fallbacks: CATEGORY_FALLBACKS
                .iter()
                .map(|(category, items)| CategoryFallback {
                    category: *category,
                    items: owned(items),
                })
                .collect(),
            goal_profiles: GOAL_WEIGHTS
                .iter()
                .map(|(goal, weights)| GoalProfile {
                    goal: *goal,
                    weights: weights
                        .iter()
                        .map(|(category, weight)| CategoryWeight {
                            category: *category,
                            weight: *weight,
                        })
                        .collect(),
                })
                .collect(),
            meal_staples: owned(MEAL_STAPLES),
            cart_staples: owned(CART_STAPLES),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl PlannerConfig {
    /// Load tables from a JSON file. Missing fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Weights for a goal, falling back to the balanced diet table.
    pub fn goal_weights(&self, goal: Goal) -> &[CategoryWeight] {
        self.goal_profiles
            .iter()
            .find(|p| p.goal == goal)
            .or_else(|| {
                self.goal_profiles
                    .iter()
                    .find(|p| p.goal == Goal::BalancedDiet)
            })
            .map(|p| p.weights.as_slice())
            .unwrap_or(&[])
    }

    /// Fallback shopping items for a category (empty if none configured).
    pub fn fallbacks_for(&self, category: Category) -> &[String] {
        self.category_fallbacks
            .iter()
            .find(|f| f.category == category)
            .map(|f| f.items.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_tables() {
        let config = PlannerConfig::default();
        assert_eq!(config.keywords.len(), 8);
        assert_eq!(config.keywords[0].category, Category::Protein);
        assert_eq!(config.hints.len(), 2);
        assert_eq!(config.hints[0].category, Category::Dairy);
        assert_eq!(config.top_n, 8);
        assert_eq!(config.meal_staples.len(), 6);
        assert_eq!(config.fallbacks_for(Category::Fruit), ["banana", "apple"]);
        assert!(config.fallbacks_for(Category::Beverage).is_empty());
    }

    #[test]
    fn test_goal_weights_fall_back_to_balanced() {
        let mut config = PlannerConfig::default();
        config.goal_profiles.retain(|p| p.goal != Goal::MuscleGain);

        let weights = config.goal_weights(Goal::MuscleGain);
        assert_eq!(weights, config.goal_weights(Goal::BalancedDiet));
        assert_eq!(weights[1].category, Category::Carb);
    }

    #[test]
    fn test_load_partial_config() {
        let json = r#"{"top_n": 3, "cart_staples": ["quinoa"]}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = PlannerConfig::load(file.path()).unwrap();
        assert_eq!(config.top_n, 3);
        assert_eq!(config.cart_staples, vec!["quinoa"]);
        assert_eq!(config.keywords, PlannerConfig::default().keywords);
        assert_eq!(config.hints, PlannerConfig::default().hints);
    }

    #[test]
    fn test_load_replaces_hints() {
        let json = r#"{"keywords": [], "hints": [{"category": "fruit", "keywords": ["kiwi"]}]}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = PlannerConfig::load(file.path()).unwrap();
        assert!(config.keywords.is_empty());
        assert_eq!(config.hints.len(), 1);
        assert_eq!(config.hints[0].category, Category::Fruit);
    }
}
