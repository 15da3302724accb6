mod persistence;
mod store;

pub use persistence::{export_cart_csv, load_json, load_json_or_none, save_json};
pub use store::{CART_FILE, PLAN_FILE, PROFILE_FILE, StateStore};
