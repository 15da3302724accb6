mod cart;
mod category;
mod meal;
mod pantry;
mod profile;

pub use cart::CartItem;
pub use category::Category;
pub use meal::{Day, Meal, Slot, WeekPlan};
pub use pantry::{normalize_item, parse_pantry};
pub use profile::{Goal, Profile};
