use std::path::Path;

use clap::Parser;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use meal_planner_rs::cli::{Cli, Command};
use meal_planner_rs::{Goal, Profile};
use meal_planner_rs::error::Result;
use meal_planner_rs::interface::{
    collect_pantry, collect_profile, display_cart, display_week_plan, prompt_yes_no,
};
use meal_planner_rs::planner::{PlannerConfig, generate_plan, suggest_cart};
use meal_planner_rs::state::{StateStore, export_cart_csv};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = StateStore::new(&cli.dir);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { seed, top_n, goal } => {
            let config = load_config(cli.config.as_deref())?;
            cmd_plan(&store, &config, seed, top_n, goal)
        }
        Command::Show => cmd_show(&store),
        Command::ExportCart { output } => cmd_export_cart(&store, &output),
    }
}

fn load_config(path: Option<&Path>) -> Result<PlannerConfig> {
    match path {
        Some(path) => {
            info!("Loading planner tables from {}", path.display());
            PlannerConfig::load(path)
        }
        None => Ok(PlannerConfig::default()),
    }
}

/// Collect inputs, generate the plan and cart, save and display them.
fn cmd_plan(
    store: &StateStore,
    config: &PlannerConfig,
    seed: Option<u64>,
    top_n: Option<usize>,
    goal: Option<Goal>,
) -> Result<()> {
    println!("Adaptive Meal Planner");
    println!();

    let profile = match store.load_profile()? {
        Some(saved) if confirm_saved_profile(&saved)? => Profile {
            goal: goal.unwrap_or(saved.goal),
            ..saved
        },
        _ => collect_profile(goal)?,
    };
    store.save_profile(&profile)?;

    let pantry = collect_pantry()?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!("Generating plan for goal {}", profile.goal);
    let plan = generate_plan(&pantry, &profile, config, &mut rng);
    store.save_plan(&plan)?;

    let cart = suggest_cart(&pantry, &profile, config, top_n.unwrap_or(config.top_n));
    store.save_cart(&cart)?;

    println!(
        "Files saved in {}: user.json, meals.json, cart.json",
        store.dir().display()
    );
    display_week_plan(&plan);
    display_cart(&cart);
    Ok(())
}

fn confirm_saved_profile(profile: &Profile) -> Result<bool> {
    prompt_yes_no(
        &format!("Use saved profile for {} (goal: {})?", profile.name, profile.goal),
        true,
    )
}

/// Display the saved plan and cart.
fn cmd_show(store: &StateStore) -> Result<()> {
    let plan = store.load_plan()?;
    let cart = store.load_cart()?;

    if let Some(profile) = store.load_profile()? {
        println!("Plan for {} (goal: {})", profile.name, profile.goal);
    }
    display_week_plan(&plan);
    display_cart(&cart);
    Ok(())
}

/// Export the saved cart as CSV.
fn cmd_export_cart(store: &StateStore, output: &Path) -> Result<()> {
    let cart = store.load_cart()?;
    export_cart_csv(output, &cart)?;
    println!("Exported {} items to {}", cart.len(), output.display());
    Ok(())
}
