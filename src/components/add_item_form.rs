//! Add Item Form Component
//!
//! Quantity select plus description input for creating new items.

use leptos::prelude::*;

use crate::models::{parse_quantity, quantity_options, DEFAULT_QUANTITY};
use crate::store::{store_add_item, use_app_store};

/// Form for adding an item to the list
#[component]
pub fn AddItemForm(max_quantity: u32) -> impl IntoView {
    let store = use_app_store();

    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(DEFAULT_QUANTITY);

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Inputs stay as typed when the description is rejected
        if store_add_item(&store, &description.get(), quantity.get()).is_ok() {
            set_description.set(String::new());
            set_quantity.set(DEFAULT_QUANTITY);
        }
    };

    view! {
        <form class="add-form" on:submit=add_item>
            <h3>"What do you need for your 😍 trip?"</h3>
            <select
                prop:value=move || quantity.get().to_string()
                on:change=move |ev| set_quantity.set(parse_quantity(&event_target_value(&ev), max_quantity))
            >
                {quantity_options(max_quantity).map(|num| view! {
                    <option value=num.to_string()>{num}</option>
                }).collect_view()}
            </select>
            <input
                type="text"
                placeholder="Item..."
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
