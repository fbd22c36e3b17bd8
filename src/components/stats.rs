//! Stats Footer Component

use leptos::prelude::*;

use crate::store::{store_summary, use_app_store};

/// Packing progress footer
#[component]
pub fn Stats() -> impl IntoView {
    let store = use_app_store();
    let summary = Memo::new(move |_| store_summary(&store));

    view! {
        <footer class="stats">
            <em>{move || summary.get().message()}</em>
        </footer>
    }
}
