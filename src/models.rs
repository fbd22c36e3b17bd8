//! Frontend Models
//!
//! Packing list entries and the derived values shown around them.

use serde::{Deserialize, Serialize};

/// Item identifier, unique within one packing list
pub type ItemId = u64;

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 20;
pub const DEFAULT_QUANTITY: u32 = 1;

/// One entry on the packing list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: u32,
    pub packed: bool,
}

impl Item {
    /// Copy of this item with `packed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }
}

/// Quantities offered by the add form, `1..=max`
pub fn quantity_options(max: u32) -> impl Iterator<Item = u32> {
    MIN_QUANTITY..=max.clamp(MIN_QUANTITY, MAX_QUANTITY)
}

/// Parse the quantity select value, clamped into `[MIN_QUANTITY, max]`
pub fn parse_quantity(raw: &str, max: u32) -> u32 {
    let max = max.clamp(MIN_QUANTITY, MAX_QUANTITY);
    match raw.trim().parse::<i64>() {
        Ok(n) => n.clamp(MIN_QUANTITY as i64, max as i64) as u32,
        Err(_) => DEFAULT_QUANTITY,
    }
}

/// Display order of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Insertion order
    #[default]
    Input,
    Description,
    /// Unpacked first
    Packed,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Input, SortBy::Description, SortBy::Packed];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Input => "input",
            SortBy::Description => "description",
            SortBy::Packed => "packed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "description" => SortBy::Description,
            "packed" => SortBy::Packed,
            _ => SortBy::Input,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Input => "Sort by input order",
            SortBy::Description => "Sort by description",
            SortBy::Packed => "Sort by packed status",
        }
    }
}

/// Aggregate progress over the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    /// Nothing on the list yet
    Empty,
    Progress {
        total: usize,
        packed: usize,
        percentage: u32,
    },
}

impl Summary {
    pub fn is_complete(&self) -> bool {
        matches!(self, Summary::Progress { percentage: 100, .. })
    }

    /// Footer text for this summary
    pub fn message(&self) -> String {
        match *self {
            Summary::Empty => "Start adding some items to your packing list 🚀".to_string(),
            s if s.is_complete() => "You got everything ready! Ready to go ✈️".to_string(),
            Summary::Progress { total, packed, percentage } => format!(
                "💼 You have {} items on your list, and you have already packed {} ({}%)",
                total, packed, percentage
            ),
        }
    }
}
