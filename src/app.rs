//! Posts Browser App
//!
//! Root component: owns the view store, issues the mount-time load and picks
//! the screen for the current render state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use posts_view::{
    fetch_items, filter_by_category, filter_by_search, CancelToken, Config, FavoriteSet,
    LoadState, RenderState, ReqwestClient, ViewAction, ViewState, ViewStateStoreFields,
};
use reactive_stores::Store;

use crate::components::{CategoryBar, FavoritesReadout, PostList, SearchBox};
use crate::store::{dispatch, ViewStore};

#[component]
pub fn App(config: Config) -> impl IntoView {
    let store: ViewStore = Store::new(ViewState::new());
    provide_context(store);

    // Flipped on unmount so a late response never reaches the disposed store
    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    // Load once on mount
    let endpoint = config.endpoint;
    Effect::new(move |_| {
        let endpoint = endpoint.clone();
        let cancel = cancel.clone();
        log::info!("Loading posts from {}", endpoint.trim());
        spawn_local(async move {
            let client = ReqwestClient::new();
            let result = fetch_items(&client, &endpoint, &cancel).await;
            if cancel.is_cancelled() {
                return;
            }
            dispatch(store, ViewAction::Loaded(result));
        });
    });

    // Derived state
    let render_state = Memo::new(move |_| store.load().with(LoadState::render_state));
    let by_category = Memo::new(move |_| {
        let category = store.category().get();
        store.load().with(|load| filter_by_category(load.items(), category))
    });
    let displayed = Memo::new(move |_| {
        by_category.with(|items| store.search_term().with(|term| filter_by_search(items, term)))
    });
    let sorted_favorites = Memo::new(move |_| store.favorites().with(FavoriteSet::sorted));

    view! {
        {move || match render_state.get() {
            RenderState::Loading => view! {
                <div class="status">"Loading..."</div>
            }.into_any(),
            RenderState::Failed(message) => view! {
                <div class="status">"Error: " {message}</div>
            }.into_any(),
            RenderState::NoData => view! {
                <div class="status">"No data"</div>
            }.into_any(),
            RenderState::Ready => view! {
                <div class="posts-browser">
                    <FavoritesReadout favorites=sorted_favorites />
                    <CategoryBar />
                    <SearchBox />
                    <PostList items=displayed />
                </div>
            }.into_any(),
        }}
    }
}
