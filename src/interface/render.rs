use crate::models::{CartItem, Day, Slot, WeekPlan};

/// Display the week plan, one block per day.
pub fn display_week_plan(plan: &WeekPlan) {
    if plan.is_empty() {
        println!("No meal plan generated.");
        return;
    }

    println!();
    println!("=== 7-Day Meal Plan ===");

    for day in Day::ALL {
        println!();
        println!("-- {} --", day);
        for slot in Slot::ALL {
            match plan.meal(day, slot) {
                Some(meal) => {
                    let ingredients = if meal.ingredients.is_empty() {
                        "-".to_string()
                    } else {
                        meal.ingredients.join(", ")
                    };
                    println!(
                        "  {:<9}: {} | Ingredients: {}",
                        slot.as_str(),
                        meal.name,
                        ingredients
                    );
                }
                None => println!("  {:<9}: -", slot.as_str()),
            }
        }
    }
    println!();
}

/// Display the suggested shopping list.
pub fn display_cart(cart: &[CartItem]) {
    println!("=== Suggested Shopping ===");
    if cart.is_empty() {
        println!("No suggestions. Your pantry looks balanced for your goal.");
    } else {
        for item in cart {
            println!(" - {}  x{}", item.item, item.qty);
        }
    }
    println!();
}
