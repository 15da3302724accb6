use crate::models::{Category, Goal, Slot};

/// Keyword table in priority order. The first category with a keyword
/// contained in the ingredient wins, so "potato" is a carb.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Protein,
        &[
            "chicken", "egg", "eggs", "paneer", "tofu", "fish", "salmon", "tuna", "lentil", "dal",
            "beans", "chickpea", "turkey", "mutton",
        ],
    ),
    (
        Category::Carb,
        &[
            "rice", "bread", "roti", "noodles", "pasta", "oats", "chapati", "potato", "idli", "dosa",
        ],
    ),
    (
        Category::Vegetable,
        &[
            "spinach", "carrot", "tomato", "onion", "potato", "broccoli", "capsicum", "peas",
            "cucumber", "cabbage",
        ],
    ),
    (
        Category::Fruit,
        &["apple", "banana", "orange", "berries", "mango", "grapes"],
    ),
    (
        Category::Dairy,
        &["milk", "yogurt", "curd", "cheese", "butter"],
    ),
    (
        Category::HealthyFat,
        &[
            "olive oil", "oil", "ghee", "nuts", "peanut", "almond", "walnut", "seeds",
        ],
    ),
    (
        Category::Condiment,
        &["salt", "pepper", "spice", "turmeric", "garam masala", "soy sauce"],
    ),
    (Category::Beverage, &["tea", "coffee"]),
];

/// Last-chance hints checked when no keyword table entry matches.
pub const CATEGORY_HINTS: &[(Category, &[&str])] = &[
    (Category::Dairy, &["milk", "yogurt", "cheese", "paneer"]),
    (
        Category::HealthyFat,
        &["oil", "ghee", "nuts", "almond", "walnut", "seeds"],
    ),
];

/// Generic items proposed for a category the pantry lacks.
pub const CATEGORY_FALLBACKS: &[(Category, &[&str])] = &[
    (Category::Protein, &["eggs", "chicken", "tofu", "paneer"]),
    (Category::Carb, &["rice", "bread", "oats"]),
    (Category::Vegetable, &["spinach", "tomato", "carrot"]),
    (Category::Fruit, &["banana", "apple"]),
    (Category::Dairy, &["milk", "yogurt"]),
    (Category::HealthyFat, &["nuts", "olive oil"]),
];

/// Relative category emphasis per goal. Weights need not sum to 1.
pub const GOAL_WEIGHTS: &[(Goal, &[(Category, f64)])] = &[
    (
        Goal::WeightLoss,
        &[
            (Category::Protein, 0.35),
            (Category::Carb, 0.30),
            (Category::Vegetable, 0.25),
            (Category::Dairy, 0.05),
            (Category::HealthyFat, 0.05),
        ],
    ),
    (
        Goal::MuscleGain,
        &[
            (Category::Protein, 0.40),
            (Category::Carb, 0.35),
            (Category::Vegetable, 0.15),
            (Category::Dairy, 0.05),
            (Category::HealthyFat, 0.05),
        ],
    ),
    (
        Goal::BalancedDiet,
        &[
            (Category::Protein, 0.30),
            (Category::Carb, 0.35),
            (Category::Vegetable, 0.25),
            (Category::Dairy, 0.05),
            (Category::HealthyFat, 0.05),
        ],
    ),
];

/// Filler used when a meal cannot be completed from the pantry.
pub const MEAL_STAPLES: &[&str] = &["bread", "rice", "oats", "milk", "egg", "banana"];

/// Filler used when category fallbacks do not fill the shopping list.
pub const CART_STAPLES: &[&str] = &["rice", "bread", "eggs", "milk", "spinach", "nuts", "oats"];

/// Default shopping list length.
pub const DEFAULT_TOP_N: usize = 8;

/// Inclusive range of ingredients drawn for a snack.
pub const SNACK_PICKS: (usize, usize) = (1, 2);

/// Inclusive range of ingredients drawn for breakfast, lunch and dinner.
pub const MEAL_PICKS: (usize, usize) = (2, 3);

/// Categories a slot draws from first, in order.
///
/// The goal reorders breakfast, lunch and dinner; snacks ignore it.
pub fn preferred_categories(slot: Slot, goal: Goal) -> &'static [Category] {
    match (slot, goal) {
        (Slot::Breakfast, Goal::WeightLoss) => &[Category::Protein, Category::Carb],
        (Slot::Breakfast, _) => &[Category::Carb, Category::Protein],
        (Slot::Lunch, Goal::MuscleGain) => &[Category::Protein, Category::Vegetable],
        (Slot::Lunch, _) => &[Category::Carb, Category::Vegetable],
        (Slot::Dinner, Goal::WeightLoss) => &[Category::Vegetable, Category::Protein],
        (Slot::Dinner, _) => &[Category::Protein, Category::Vegetable],
        (Slot::Snack, _) => &[Category::Fruit, Category::Dairy, Category::HealthyFat],
    }
}

/// Inclusive bounds on the ingredient count for a slot.
pub fn pick_bounds(slot: Slot) -> (usize, usize) {
    match slot {
        Slot::Snack => SNACK_PICKS,
        _ => MEAL_PICKS,
    }
}
