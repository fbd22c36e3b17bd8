//! Packing List
//!
//! The canonical, insertion-ordered collection of items and the views
//! derived from it. Has no UI dependency; the reactive store wraps it.

use std::borrow::Cow;
use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::ValidationError;
use crate::models::{Item, ItemId, SortBy, Summary};

/// Ordered collection of packing list items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackingList {
    items: Vec<Item>,
    /// Last id handed out; never reused, survives `clear`
    last_id: ItemId,
}

impl PackingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in input order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append a new unpacked item
    ///
    /// The description is stored trimmed. Quantity bounds are the form's
    /// concern and are not checked here.
    pub fn add(&mut self, description: &str, quantity: u32) -> Result<Item, ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        self.last_id += 1;
        let item = Item {
            id: self.last_id,
            description: description.to_string(),
            quantity,
            packed: false,
        };
        self.items.push(item.clone());
        Ok(item)
    }

    /// Remove the item with `id`, if present
    pub fn delete(&mut self, id: ItemId) {
        self.items.retain(|item| item.id != id);
    }

    /// Replace the item with `id` by a copy whose `packed` flag is flipped
    pub fn toggle_packed(&mut self, id: ItemId) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            *item = item.toggled();
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in the requested display order
    ///
    /// `Input` borrows the canonical sequence; the other orders return a
    /// stably sorted copy.
    pub fn sorted_view(&self, sort_by: SortBy) -> Cow<'_, [Item]> {
        match sort_by {
            SortBy::Input => Cow::Borrowed(self.items()),
            SortBy::Description => {
                let mut keyed: Vec<(String, &Item)> = self
                    .items
                    .iter()
                    .map(|item| (collation_key(&item.description), item))
                    .collect();
                keyed.sort_by(|a, b| a.0.cmp(&b.0));
                Cow::Owned(keyed.into_iter().map(|(_, item)| item.clone()).collect())
            }
            SortBy::Packed => {
                let mut sorted = self.items.clone();
                sorted.sort_by(|a, b| match (a.packed, b.packed) {
                    (false, true) => Ordering::Less,
                    (true, false) => Ordering::Greater,
                    _ => Ordering::Equal,
                });
                Cow::Owned(sorted)
            }
        }
    }

    pub fn summary(&self) -> Summary {
        if self.is_empty() {
            return Summary::Empty;
        }
        let total = self.items.len();
        let packed = self.items.iter().filter(|item| item.packed).count();
        Summary::Progress {
            total,
            packed,
            percentage: round_percentage(packed, total),
        }
    }
}

/// `round(part / whole * 100)` with halves rounded up; `whole` must be non-zero
fn round_percentage(part: usize, whole: usize) -> u32 {
    ((200 * part + whole) / (2 * whole)) as u32
}

/// Case- and accent-insensitive sort key for descriptions
fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
