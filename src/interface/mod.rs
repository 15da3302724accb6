pub mod prompts;
pub mod render;

pub use prompts::{
    collect_pantry, collect_profile, prompt_goal, prompt_name, prompt_number, prompt_yes_no,
};
pub use render::{display_cart, display_week_plan};
