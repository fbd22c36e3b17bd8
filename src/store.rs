//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All changes to
//! the packing list go through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ValidationError;
use crate::models::{Item, ItemId, SortBy, Summary};
use crate::packing_list::PackingList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Canonical list, input order
    pub list: PackingList,
    /// Current display order
    pub sort_by: SortBy,
}

impl AppState {
    pub fn new(sort_by: SortBy) -> Self {
        Self {
            list: PackingList::new(),
            sort_by,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add an item; on rejection the list is left unchanged
pub fn store_add_item(store: &AppStore, description: &str, quantity: u32) -> Result<Item, ValidationError> {
    let result = store.list().write().add(description, quantity);
    match result {
        Ok(item) => {
            log::debug!("added item #{} ({} x {})", item.id, item.quantity, item.description);
            Ok(item)
        }
        Err(e) => {
            log::debug!("add rejected: {}", e);
            Err(e)
        }
    }
}

/// Flip the packed flag of an item by ID
pub fn store_toggle_item(store: &AppStore, item_id: ItemId) {
    store.list().write().toggle_packed(item_id);
    match store.list().read_untracked().get(item_id) {
        Some(item) => log::debug!("item #{} packed={}", item_id, item.packed),
        None => log::debug!("toggle ignored, no item #{}", item_id),
    }
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: ItemId) {
    store.list().write().delete(item_id);
    log::debug!("removed item #{}", item_id);
}

/// Empty the list. Confirmation is the caller's job.
pub fn store_clear_items(store: &AppStore) {
    let count = {
        let list = store.list().read_untracked();
        if list.is_empty() {
            return;
        }
        list.len()
    };
    store.list().write().clear();
    log::info!("cleared {} items", count);
}

pub fn store_sort_by(store: &AppStore) -> SortBy {
    store.sort_by().get()
}

pub fn store_set_sort(store: &AppStore, sort_by: SortBy) {
    store.sort_by().set(sort_by);
    log::debug!("sorting by {}", sort_by.as_str());
}

/// Items in the current display order
pub fn store_sorted_items(store: &AppStore) -> Vec<Item> {
    let sort_by = store.sort_by().get();
    store.list().read().sorted_view(sort_by).into_owned()
}

pub fn store_summary(store: &AppStore) -> Summary {
    store.list().read().summary()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_store(f: impl FnOnce(AppStore)) {
        let owner = Owner::new();
        owner.with(|| f(Store::new(AppState::new(SortBy::Input))));
    }

    fn descriptions(items: &[Item]) -> Vec<String> {
        items.iter().map(|i| i.description.clone()).collect()
    }

    #[test]
    fn test_add_rejects_blank() {
        with_store(|store| {
            store_add_item(&store, "Passports", 2).unwrap();
            assert_eq!(
                store_add_item(&store, "   ", 3),
                Err(ValidationError::EmptyDescription)
            );
            assert_eq!(store_sorted_items(&store).len(), 1);
        });
    }

    #[test]
    fn test_clear_empty_is_noop() {
        with_store(|store| {
            store_clear_items(&store);
            assert_eq!(store_summary(&store), Summary::Empty);

            store_add_item(&store, "Socks", 1).unwrap();
            store_clear_items(&store);
            assert!(store_sorted_items(&store).is_empty());
        });
    }

    #[test]
    fn test_sorted_items_follow_sort() {
        with_store(|store| {
            for desc in ["Socks", "Passports", "Charger"] {
                store_add_item(&store, desc, 1).unwrap();
            }
            assert_eq!(store_sort_by(&store), SortBy::Input);
            assert_eq!(
                descriptions(&store_sorted_items(&store)),
                vec!["Socks", "Passports", "Charger"]
            );

            store_set_sort(&store, SortBy::Description);
            assert_eq!(store_sort_by(&store), SortBy::Description);
            assert_eq!(
                descriptions(&store_sorted_items(&store)),
                vec!["Charger", "Passports", "Socks"]
            );

            let socks = store_sorted_items(&store)[2].id;
            store_toggle_item(&store, socks);
            store_set_sort(&store, SortBy::Packed);
            assert_eq!(
                descriptions(&store_sorted_items(&store)),
                vec!["Passports", "Charger", "Socks"]
            );
        });
    }

    #[test]
    fn test_toggle_and_remove_by_id() {
        with_store(|store| {
            let a = store_add_item(&store, "A", 1).unwrap();
            let b = store_add_item(&store, "B", 1).unwrap();

            store_toggle_item(&store, b.id);
            let items = store_sorted_items(&store);
            assert!(!items[0].packed);
            assert!(items[1].packed);

            store_toggle_item(&store, 999);
            store_remove_item(&store, 999);
            assert_eq!(store_sorted_items(&store), items);

            store_remove_item(&store, a.id);
            let items = store_sorted_items(&store);
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, b.id);
        });
    }

    #[test]
    fn test_trip_scenario() {
        with_store(|store| {
            store_add_item(&store, "Passports", 2).unwrap();
            let socks = store_add_item(&store, "Socks", 12).unwrap();
            let charger = store_add_item(&store, "Charger", 1).unwrap();
            assert_eq!(
                store_summary(&store),
                Summary::Progress { total: 3, packed: 0, percentage: 0 }
            );

            store_toggle_item(&store, socks.id);
            assert_eq!(
                store_summary(&store),
                Summary::Progress { total: 3, packed: 1, percentage: 33 }
            );

            store_remove_item(&store, charger.id);
            assert_eq!(
                descriptions(&store_sorted_items(&store)),
                vec!["Passports", "Socks"]
            );

            store_clear_items(&store);
            assert_eq!(store_summary(&store), Summary::Empty);
        });
    }
}
