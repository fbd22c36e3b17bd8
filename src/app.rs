//! Far Away App
//!
//! Root component: owns the packing list store and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemForm, Logo, PackingListView, Stats};
use crate::config::AppConfig;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Single owner of the list; children reach it through context
    provide_context(Store::new(AppState::new(config.default_sort)));

    view! {
        <div class="app">
            <Logo title=config.title />
            <AddItemForm max_quantity=config.max_quantity />
            <PackingListView clear_confirm_message=config.clear_confirm_message />
            <Stats />
        </div>
    }
}
