use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{PlannerError, Result};
use crate::models::CartItem;

/// Write a value as pretty-printed JSON, replacing any existing file.
pub fn save_json<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a JSON file. A missing file is reported as [`PlannerError::MissingState`].
pub fn load_json<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T> {
    load_json_or_none(path.as_ref())?
        .ok_or_else(|| PlannerError::MissingState(path.as_ref().to_path_buf()))
}

/// Read a JSON file, returning `None` if it does not exist.
pub fn load_json_or_none<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<Option<T>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

/// Write the shopping list as CSV with an `item,qty` header.
pub fn export_cart_csv<P: AsRef<Path>>(path: P, cart: &[CartItem]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for item in cart {
        writer.serialize(item)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_cart() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cart.json");
        let cart = vec![CartItem::new("eggs"), CartItem::new("nuts")];

        save_json(&path, &cart).unwrap();
        let loaded: Vec<CartItem> = load_json(&path).unwrap();
        assert_eq!(loaded, cart);
    }

    #[test]
    fn test_cart_json_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cart.json");
        save_json(&path, &[CartItem::new("eggs")]).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["item"], "eggs");
        assert_eq!(value[0]["qty"], 1);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let none: Option<Vec<CartItem>> = load_json_or_none(&path).unwrap();
        assert!(none.is_none());

        let err = load_json::<_, Vec<CartItem>>(&path).unwrap_err();
        assert!(matches!(err, PlannerError::MissingState(_)));
    }

    #[test]
    fn test_export_cart_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cart.csv");
        export_cart_csv(&path, &[CartItem::new("eggs"), CartItem::new("olive oil")]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "item,qty\neggs,1\nolive oil,1\n");
    }
}
