use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;
use crate::models::{CartItem, Profile, WeekPlan};
use crate::state::persistence::{load_json, load_json_or_none, save_json};

pub const PROFILE_FILE: &str = "user.json";
pub const PLAN_FILE: &str = "meals.json";
pub const CART_FILE: &str = "cart.json";

/// Flat-file state for one user, kept in a single directory.
///
/// Each save overwrites the previous file.
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn profile_path(&self) -> PathBuf {
        self.dir.join(PROFILE_FILE)
    }

    pub fn plan_path(&self) -> PathBuf {
        self.dir.join(PLAN_FILE)
    }

    pub fn cart_path(&self) -> PathBuf {
        self.dir.join(CART_FILE)
    }

    pub fn save_profile(&self, profile: &Profile) -> Result<()> {
        save_json(self.profile_path(), profile)?;
        info!("Saved profile to {}", self.profile_path().display());
        Ok(())
    }

    /// Previously saved profile, if any.
    pub fn load_profile(&self) -> Result<Option<Profile>> {
        load_json_or_none(self.profile_path())
    }

    pub fn save_plan(&self, plan: &WeekPlan) -> Result<()> {
        save_json(self.plan_path(), plan)?;
        info!("Saved week plan to {}", self.plan_path().display());
        Ok(())
    }

    pub fn load_plan(&self) -> Result<WeekPlan> {
        load_json(self.plan_path())
    }

    pub fn save_cart(&self, cart: &[CartItem]) -> Result<()> {
        save_json(self.cart_path(), cart)?;
        info!("Saved cart to {}", self.cart_path().display());
        Ok(())
    }

    pub fn load_cart(&self) -> Result<Vec<CartItem>> {
        load_json(self.cart_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Goal, Meal, Slot};
    use tempfile::tempdir;

    #[test]
    fn test_profile_roundtrip() {
        let dir = tempdir().unwrap();
        let store = StateStore::new(dir.path());
        assert!(store.load_profile().unwrap().is_none());

        let profile = Profile::new("Ravi", 41, 180, Goal::MuscleGain);
        store.save_profile(&profile).unwrap();
        assert_eq!(store.load_profile().unwrap(), Some(profile));
    }

    #[test]
    fn test_plan_overwritten() {
        let dir = tempdir().unwrap();
        let store = StateStore::new(dir.path());

        let mut first = WeekPlan::new();
        first.insert(Day::Monday, Slot::Lunch, Meal::new(Slot::Lunch, vec!["rice".into()]));
        store.save_plan(&first).unwrap();

        let mut second = WeekPlan::new();
        second.insert(Day::Friday, Slot::Snack, Meal::new(Slot::Snack, vec!["apple".into()]));
        store.save_plan(&second).unwrap();

        let loaded = store.load_plan().unwrap();
        assert_eq!(loaded, second);
        assert!(loaded.meal(Day::Monday, Slot::Lunch).is_none());
    }

    #[test]
    fn test_missing_cart_is_error() {
        let dir = tempdir().unwrap();
        let store = StateStore::new(dir.path());
        assert!(store.load_cart().is_err());
    }
}
