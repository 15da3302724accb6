use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Dietary goal steering both meal composition and shopping suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    #[default]
    BalancedDiet,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::WeightLoss, Goal::MuscleGain, Goal::BalancedDiet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::BalancedDiet => "balanced_diet",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "weight_loss" => Ok(Goal::WeightLoss),
            "2" | "muscle_gain" => Ok(Goal::MuscleGain),
            "3" | "balanced_diet" => Ok(Goal::BalancedDiet),
            other => Err(PlannerError::InvalidInput(format!("Unknown goal: {}", other))),
        }
    }
}

/// The person the plan is generated for. Immutable once collected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub height_cm: u32,
    #[serde(default)]
    pub goal: Goal,
}

impl Profile {
    pub fn new(name: impl Into<String>, age: u32, height_cm: u32, goal: Goal) -> Self {
        Self {
            name: name.into(),
            age,
            height_cm,
            goal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_from_str() {
        assert_eq!("1".parse::<Goal>().unwrap(), Goal::WeightLoss);
        assert_eq!("Muscle_Gain".parse::<Goal>().unwrap(), Goal::MuscleGain);
        assert!("keto".parse::<Goal>().is_err());
    }

    #[test]
    fn test_profile_json_shape() {
        let profile = Profile::new("Asha", 30, 165, Goal::WeightLoss);
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["goal"], "weight_loss");
        assert_eq!(value["height_cm"], 165);
    }

    #[test]
    fn test_missing_goal_defaults_to_balanced() {
        let json = r#"{"name": "Sam", "age": 25, "height_cm": 170}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.goal, Goal::BalancedDiet);
    }
}
