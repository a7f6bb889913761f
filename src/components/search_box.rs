use leptos::prelude::*;
use posts_view::{ViewAction, ViewStateStoreFields};

use crate::store::{dispatch, use_view_store};

/// Title search input
#[component]
pub fn SearchBox() -> impl IntoView {
    let store = use_view_store();

    view! {
        <input
            type="text"
            class="search-box"
            placeholder="Search by title..."
            prop:value=move || store.search_term().get()
            on:input=move |ev| dispatch(store, ViewAction::SetSearchTerm(event_target_value(&ev)))
        />
    }
}
