//! Category lookup by id or name.

use dialoguer::Select;

use tally_core::storage::Category;
use tally_core::LedgerStore;

use crate::errors::CliError;

/// Find a category by numeric id, or by name (case-insensitive).
///
/// Names are not unique; the lowest id wins when several match.
pub fn resolve_category<S: LedgerStore + ?Sized>(store: &S, raw: &str) -> anyhow::Result<Category> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<i64>() {
        if let Some(category) = store.get_category(id)? {
            return Ok(category);
        }
    }

    let needle = raw.to_lowercase();
    store
        .list_categories()?
        .into_iter()
        .filter(|category| category.name.to_lowercase() == needle)
        .min_by_key(|category| category.id)
        .ok_or_else(|| {
            CliError::not_found(
                format!("Category \"{}\" not found", raw),
                "Hint: Run `tally categories list` to see available categories.",
            )
            .into()
        })
}

/// Ask the user to pick a category from the list.
pub fn prompt_category<S: LedgerStore + ?Sized>(store: &S) -> anyhow::Result<Category> {
    let mut categories = store.list_categories()?;
    if categories.is_empty() {
        return Err(CliError::not_found(
            "No categories exist yet",
            "Hint: Run `tally categories add <NAME>` first.",
        )
        .into());
    }

    let labels: Vec<String> = categories
        .iter()
        .map(|category| format!("{} {}", category.icon, category.name))
        .collect();
    let index = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read category: {}", e))?;

    Ok(categories.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::storage::NewCategory;
    use tally_core::SqliteStore;

    fn store() -> SqliteStore {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.initialize().unwrap();
        store
    }

    #[test]
    fn test_resolve_by_id() {
        let store = store();
        assert_eq!(resolve_category(&store, "1").unwrap().name, "Alimentación");
    }

    #[test]
    fn test_resolve_by_name_ignores_case() {
        let store = store();
        assert_eq!(resolve_category(&store, "transporte").unwrap().id, 2);
    }

    #[test]
    fn test_resolve_duplicate_name_picks_lowest_id() {
        let mut store = store();
        store
            .add_category(&NewCategory::new("Alimentación", "#000000", "*"))
            .unwrap();
        assert_eq!(resolve_category(&store, "Alimentación").unwrap().id, 1);
    }

    #[test]
    fn test_resolve_unknown_is_not_found() {
        let store = store();
        let err = resolve_category(&store, "Viajes").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
