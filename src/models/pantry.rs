/// Canonical form of a pantry entry: trimmed and lowercased.
pub fn normalize_item(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Parse a comma-separated pantry line.
///
/// Empty pieces are dropped and duplicates removed, keeping the first
/// occurrence so entry order is preserved.
pub fn parse_pantry(raw: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for piece in raw.split(',') {
        let item = normalize_item(piece);
        if item.is_empty() || items.contains(&item) {
            continue;
        }
        items.push(item);
    }
    items
}
