use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Day of the planning week, ordered Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Meal occasion within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Slot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Breakfast, Slot::Lunch, Slot::Dinner, Slot::Snack];

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Breakfast => "Breakfast",
            Slot::Lunch => "Lunch",
            Slot::Dinner => "Dinner",
            Slot::Snack => "Snack",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single generated meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub ingredients: Vec<String>,
}

impl Meal {
    /// Build a meal, naming it after the slot and its first two ingredients.
    pub fn new(slot: Slot, ingredients: Vec<String>) -> Self {
        let main = if ingredients.is_empty() {
            "Simple Meal".to_string()
        } else {
            ingredients
                .iter()
                .take(2)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        Self {
            name: format!("{}: {}", slot, main),
            ingredients,
        }
    }
}

/// Seven days of four meals each.
///
/// Serializes as `{day: {slot: meal}}` with days and slots in calendar order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekPlan {
    days: BTreeMap<Day, BTreeMap<Slot, Meal>>,
}

impl WeekPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day: Day, slot: Slot, meal: Meal) {
        self.days.entry(day).or_default().insert(slot, meal);
    }

    pub fn meal(&self, day: Day, slot: Slot) -> Option<&Meal> {
        self.days.get(&day).and_then(|slots| slots.get(&slot))
    }

    /// Iterate `(day, slot, meal)` in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Day, Slot, &Meal)> {
        self.days
            .iter()
            .flat_map(|(day, slots)| slots.iter().map(move |(slot, meal)| (*day, *slot, meal)))
    }

    /// Number of meals in the plan.
    pub fn len(&self) -> usize {
        self.days.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
