//! Packing List View Component
//!
//! Sorted list of items with the sort selector and the clear action.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::dialog;
use crate::models::SortBy;
use crate::store::{store_clear_items, store_set_sort, store_sort_by, store_sorted_items, use_app_store};

#[component]
pub fn PackingListView(#[prop(into)] clear_confirm_message: String) -> impl IntoView {
    let store = use_app_store();

    let sorted_items = Memo::new(move |_| store_sorted_items(&store));

    let clear_list = move |_| {
        if dialog::confirm(&clear_confirm_message) {
            store_clear_items(&store);
        }
    };

    view! {
        <div class="list">
            <ul>
                <For
                    each=move || sorted_items.get()
                    // Rows are rebuilt when packed changes; the rest is immutable
                    key=|item| (item.id, item.packed)
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </ul>

            <div class="actions">
                <select
                    prop:value=move || store_sort_by(&store).as_str()
                    on:change=move |ev| store_set_sort(&store, SortBy::from_str(&event_target_value(&ev)))
                >
                    {SortBy::ALL.iter().map(|sort| view! {
                        <option value=sort.as_str()>{sort.label()}</option>
                    }).collect_view()}
                </select>
                <button on:click=clear_list>"Clear list"</button>
            </div>
        </div>
    }
}
