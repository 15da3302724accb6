pub mod cart;
pub mod categorize;
pub mod config;
pub mod constants;
pub mod meals;

pub use cart::{score_categories, suggest_cart};
pub use categorize::{CategoryMap, build_index, categorize};
pub use config::{CategoryFallback, CategoryWeight, GoalProfile, KeywordRule, PlannerConfig};
pub use constants::*;
pub use meals::{generate_plan, pick_ingredients};
