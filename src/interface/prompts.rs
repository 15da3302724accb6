use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::{Goal, Profile, parse_pantry};

/// Prompt for a non-empty name, asking again until one is given.
pub fn prompt_name() -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("Name")
            .allow_empty(true)
            .interact_text()?;

        let name = input.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
        println!("Please enter a name.");
    }
}

/// Prompt for a whole number with a default, re-asking on bad input.
pub fn prompt_number(prompt: &str, default: u32) -> Result<u32> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;

        match parse_number(&input) {
            Ok(n) => return Ok(n),
            Err(e) => println!("{}", e),
        }
    }
}

fn parse_number(input: &str) -> Result<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Please enter a valid integer.".to_string()))
}

/// Prompt for a dietary goal. Defaults to a balanced diet.
pub fn prompt_goal() -> Result<Goal> {
    let options: Vec<String> = Goal::ALL.iter().map(|g| g.to_string()).collect();
    let default = Goal::ALL
        .iter()
        .position(|g| *g == Goal::default())
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Choose goal")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(Goal::ALL.get(selection).copied().unwrap_or_default())
}

/// Collect a full profile. A preset goal skips the goal prompt.
pub fn collect_profile(goal: Option<Goal>) -> Result<Profile> {
    println!("User Profile Setup");
    let name = prompt_name()?;
    let age = prompt_number("Age", 25)?;
    let height_cm = prompt_number("Height (cm)", 170)?;
    let goal = match goal {
        Some(goal) => goal,
        None => prompt_goal()?,
    };

    println!("Profile for {} (goal: {})", name, goal);
    println!();
    Ok(Profile::new(name, age, height_cm, goal))
}

/// Collect the pantry as a normalized, deduplicated list.
pub fn collect_pantry() -> Result<Vec<String>> {
    println!("Pantry Input");
    println!("Enter a comma-separated list of ingredients you have (e.g. rice, eggs, spinach, milk).");

    let raw: String = Input::new()
        .with_prompt("Pantry items")
        .allow_empty(true)
        .interact_text()?;

    let pantry = parse_pantry(&raw);
    if pantry.is_empty() {
        println!("No items entered. Meals will use staples and the shopping list will be longer.");
    } else {
        println!("Registered {} pantry items.", pantry.len());
    }
    println!();
    Ok(pantry)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
