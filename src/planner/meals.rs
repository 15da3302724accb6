use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{Category, Day, Meal, Profile, Slot, WeekPlan};
use crate::planner::categorize::{CategoryMap, build_index};
use crate::planner::config::PlannerConfig;
use crate::planner::constants::{pick_bounds, preferred_categories};

fn push_unique(chosen: &mut Vec<String>, item: &str) {
    if !chosen.iter().any(|c| c == item) {
        chosen.push(item.to_string());
    }
}

/// Select up to `picks` distinct ingredients for one meal.
///
/// Preferred categories are drained in order, each bucket in shuffled
/// order, stopping as soon as `picks` is reached. Any shortfall is filled
/// from the whole pantry (shuffled) and finally from `staples` in order.
/// The result keeps selection order.
pub fn pick_ingredients<R: Rng>(
    index: &CategoryMap,
    prefer: &[Category],
    picks: usize,
    staples: &[String],
    rng: &mut R,
) -> Vec<String> {
    let mut chosen: Vec<String> = Vec::with_capacity(picks);

    for category in prefer {
        let mut candidates: Vec<&String> = index.items(*category).iter().collect();
        candidates.shuffle(rng);
        while chosen.len() < picks {
            match candidates.pop() {
                Some(item) => push_unique(&mut chosen, item),
                None => break,
            }
        }
    }

    if chosen.len() < picks {
        let mut all_items: Vec<&String> = index.all_items().collect();
        all_items.shuffle(rng);
        for item in all_items {
            if chosen.len() >= picks {
                break;
            }
            push_unique(&mut chosen, item);
        }
    }

    for staple in staples {
        if chosen.len() >= picks {
            break;
        }
        push_unique(&mut chosen, staple);
    }

    chosen
}

/// Generate a seven-day plan with four meals per day.
///
/// Every (day, slot) pair is filled independently. An empty pantry still
/// yields a full plan built from the configured staples.
pub fn generate_plan<S, R>(
    pantry: &[S],
    profile: &Profile,
    config: &PlannerConfig,
    rng: &mut R,
) -> WeekPlan
where
    S: AsRef<str>,
    R: Rng,
{
    let index = build_index(pantry, config);
    let mut plan = WeekPlan::new();

    for day in Day::ALL {
        for slot in Slot::ALL {
            let (lo, hi) = pick_bounds(slot);
            let picks = rng.gen_range(lo..=hi);
            let prefer = preferred_categories(slot, profile.goal);

            let ingredients = pick_ingredients(&index, prefer, picks, &config.meal_staples, rng);
            debug!(
                "{} {}: picked {}/{} -> {:?}",
                day,
                slot,
                ingredients.len(),
                picks,
                ingredients
            );
            plan.insert(day, slot, Meal::new(slot, ingredients));
        }
    }

    plan
}
