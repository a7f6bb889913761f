//! Post List Component
//!
//! Renders the visible posts with a favorite button per row.

use leptos::prelude::*;
use posts_view::{Item, ViewAction, ViewStateStoreFields};

use crate::store::{dispatch, use_view_store};

/// Post list
///
/// Props:
/// - items: visible posts, already filtered by category and search
#[component]
pub fn PostList(items: Memo<Vec<Item>>) -> impl IntoView {
    let store = use_view_store();

    view! {
        <ul class="post-list">
            <Show
                when=move || !items.with(Vec::is_empty)
                fallback=|| view! { <li>"Nothing found"</li> }
            >
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item| {
                        let id = item.id;
                        let is_favorite = move || store.favorites().with(|favorites| favorites.contains(id));
                        view! {
                            <li class="post-row" class:favorite=is_favorite>
                                <strong>"#" {id}</strong>
                                ": " {item.title}
                                <button
                                    class="favorite-btn"
                                    title="Add to favorites"
                                    on:click=move |_| dispatch(store, ViewAction::ToggleFavorite(id))
                                >
                                    "★"
                                </button>
                            </li>
                        }
                    }
                />
            </Show>
        </ul>
    }
}
