use leptos::prelude::*;
use posts_view::favorites_readout;

/// "★ Favorites: 2, 9" line, ids ascending
#[component]
pub fn FavoritesReadout(favorites: Memo<Vec<i64>>) -> impl IntoView {
    view! {
        <p class="favorites-readout">
            "★ Favorites: " {move || favorites.with(|ids| favorites_readout(ids))}
        </p>
    }
}
