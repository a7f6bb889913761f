//! Category Bar Component
//!
//! One button per owner category; the active one is highlighted.

use leptos::prelude::*;
use posts_view::{Category, ViewAction, ViewStateStoreFields};

use crate::store::{dispatch, use_view_store};

#[component]
pub fn CategoryBar() -> impl IntoView {
    let store = use_view_store();

    view! {
        <div class="category-bar">
            {Category::ALL.into_iter().map(|category| {
                let is_active = move || store.category().get() == category;
                view! {
                    <button
                        class="category-btn"
                        class:active=is_active
                        on:click=move |_| dispatch(store, ViewAction::SetCategory(category))
                    >
                        {category.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
