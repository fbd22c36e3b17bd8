//! Item Row Component
//!
//! Individual entry in the packing list.

use leptos::prelude::*;

use crate::models::Item;
use crate::store::{store_remove_item, store_toggle_item, use_app_store};

/// A single item row
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let packed = item.packed;
    let label = format!("{} {}", item.quantity, item.description);

    view! {
        <li>
            <input
                type="checkbox"
                prop:checked=packed
                on:change=move |_| store_toggle_item(&store, id)
            />
            <span style=if packed { "text-decoration: line-through;" } else { "" }>
                {label}
            </span>
            <button class="delete-btn" on:click=move |_| store_remove_item(&store, id)>"❌"</button>
        </li>
    }
}
