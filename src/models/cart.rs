use serde::{Deserialize, Serialize};

/// One line of the suggested shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub item: String,
    pub qty: u32,
}

impl CartItem {
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            qty: 1,
        }
    }
}
