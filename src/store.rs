//! View Store
//!
//! Wraps `ViewState` in a reactive_stores Store for field-level reactivity.
//! All writes go through [`dispatch`].

use leptos::prelude::*;
use posts_view::{ViewAction, ViewState};
use reactive_stores::Store;

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

/// Apply an action through the state's single update handler
pub fn dispatch(store: ViewStore, action: ViewAction) {
    store.update(|state| state.apply(action));
}
