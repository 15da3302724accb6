use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::PlannerError;
use crate::models::Goal;

/// Meal Planner — builds a weekly meal plan from your pantry and suggests what to buy.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding user.json, meals.json and cart.json.
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// JSON file overriding the built-in category and goal tables.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Collect profile and pantry, then generate a plan and shopping list.
    Plan {
        /// Seed for reproducible plans.
        #[arg(long)]
        seed: Option<u64>,

        /// Maximum number of shopping suggestions.
        #[arg(long)]
        top_n: Option<usize>,

        /// Goal to plan for (weight_loss, muscle_gain, balanced_diet or 1/2/3).
        /// Skips the goal prompt and overrides a saved profile's goal.
        #[arg(short, long, value_parser = parse_goal)]
        goal: Option<Goal>,
    },

    /// Show the saved plan and shopping list.
    Show,

    /// Write the saved shopping list as CSV.
    ExportCart {
        /// Output CSV path.
        #[arg(short, long, default_value = "shopping_list.csv")]
        output: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            seed: None,
            top_n: None,
            goal: None,
        }
    }
}

fn parse_goal(s: &str) -> Result<Goal, String> {
    s.parse().map_err(|e: PlannerError| e.to_string())
}
