use std::fmt;

use serde::{Deserialize, Serialize};

/// Nutritional bucket an ingredient is sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Protein,
    Carb,
    Vegetable,
    Fruit,
    Dairy,
    HealthyFat,
    Condiment,
    Beverage,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Protein => "protein",
            Category::Carb => "carb",
            Category::Vegetable => "vegetable",
            Category::Fruit => "fruit",
            Category::Dairy => "dairy",
            Category::HealthyFat => "healthy_fat",
            Category::Condiment => "condiment",
            Category::Beverage => "beverage",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&Category::HealthyFat).unwrap();
        assert_eq!(json, "\"healthy_fat\"");
        assert_eq!(Category::HealthyFat.to_string(), "healthy_fat");
    }
}
