//! UI Components
//!
//! Leptos components for the packing list page.

mod add_item_form;
mod item_row;
mod logo;
mod packing_list_view;
mod stats;

pub use add_item_form::AddItemForm;
pub use item_row::ItemRow;
pub use logo::Logo;
pub use packing_list_view::PackingListView;
pub use stats::Stats;
