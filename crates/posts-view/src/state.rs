//! View State
//!
//! The single source of truth for the browser view. Fields are public for
//! reading (and for the reactive store); writes go through
//! [`ViewState::apply`]. Everything shown on screen is derived.

use crate::error::FetchError;
use crate::models::{Category, Item};

#[cfg(feature = "store")]
use reactive_stores::Store;

/// Progress of the one load issued per mount
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Failed(String),
    /// `None` when the endpoint answered with a `null` body
    Loaded(Option<Vec<Item>>),
}

impl LoadState {
    /// Loaded items, empty while loading or after a failure
    pub fn items(&self) -> &[Item] {
        match self {
            LoadState::Loaded(Some(items)) => items,
            _ => &[],
        }
    }

    pub fn render_state(&self) -> RenderState {
        match self {
            LoadState::Loading => RenderState::Loading,
            LoadState::Failed(message) => RenderState::Failed(message.clone()),
            LoadState::Loaded(None) => RenderState::NoData,
            LoadState::Loaded(Some(_)) => RenderState::Ready,
        }
    }
}

/// Top-level screen. Loading moves to exactly one of the others and never back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    Loading,
    Failed(String),
    NoData,
    Ready,
}

/// Favorited item ids in click order, without duplicates
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavoriteSet {
    ids: Vec<i64>,
}

impl FavoriteSet {
    /// Returns false when `id` was already present
    pub fn insert(&mut self, id: i64) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in the order they were clicked
    pub fn in_click_order(&self) -> &[i64] {
        &self.ids
    }

    /// Ids ascending, as shown in the readout
    pub fn sorted(&self) -> Vec<i64> {
        let mut ids = self.ids.clone();
        ids.sort_unstable();
        ids
    }
}

/// Everything that can change the view
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    /// Result of the mount-time fetch
    Loaded(Result<Option<Vec<Item>>, FetchError>),
    SetCategory(Category),
    SetSearchTerm(String),
    /// Add to favorites; already-favorited ids are left alone
    ToggleFavorite(i64),
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "store", derive(Store))]
pub struct ViewState {
    pub load: LoadState,
    pub category: Category,
    pub search_term: String,
    pub favorites: FavoriteSet,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> Option<&[Item]> {
        match &self.load {
            LoadState::Loaded(Some(items)) => Some(items),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn render_state(&self) -> RenderState {
        self.load.render_state()
    }

    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::Loaded(result) => self.finish_load(result),
            action if self.render_state() != RenderState::Ready => {
                log::debug!("Ignoring {:?} outside the ready state", action);
            }
            ViewAction::SetCategory(category) => self.category = category,
            ViewAction::SetSearchTerm(term) => self.search_term = term,
            ViewAction::ToggleFavorite(id) => self.add_favorite(id),
        }
    }

    fn finish_load(&mut self, result: Result<Option<Vec<Item>>, FetchError>) {
        if !self.is_loading() {
            log::warn!("Load result arrived after the view settled; dropped");
            return;
        }
        self.load = match result {
            Ok(items) => LoadState::Loaded(items),
            Err(e) => LoadState::Failed(e.to_string()),
        };
    }

    fn add_favorite(&mut self, id: i64) {
        let known = self.load.items().iter().any(|item| item.id == id);
        if !known {
            log::debug!("Ignoring favorite for unknown item {}", id);
            return;
        }
        if self.favorites.insert(id) {
            log::debug!("Favorited item {}", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: i64, owner_id: i64, title: &str) -> Item {
        Item {
            id,
            owner_id,
            title: title.to_string(),
            body: String::new(),
        }
    }

    fn ready_state(items: Vec<Item>) -> ViewState {
        let mut state = ViewState::new();
        state.apply(ViewAction::Loaded(Ok(Some(items))));
        state
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = ViewState::new();
        assert!(state.is_loading());
        assert_eq!(state.render_state(), RenderState::Loading);
        assert_eq!(state.category, Category::All);
        assert!(state.search_term.is_empty());
        assert!(state.favorites.is_empty());
        assert!(state.items().is_none());
    }

    #[test]
    fn test_successful_load_is_ready() {
        let state = ready_state(vec![make_item(1, 1, "Alpha")]);
        assert_eq!(state.render_state(), RenderState::Ready);
        assert_eq!(state.items().map(|items| items.len()), Some(1));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failed_load_keeps_message() {
        let mut state = ViewState::new();
        state.apply(ViewAction::Loaded(Err(FetchError::HttpStatus(500))));
        assert_eq!(state.render_state(), RenderState::Failed("HTTP 500".to_string()));
        assert_eq!(state.error_message(), Some("HTTP 500"));
        assert!(state.items().is_none());
    }

    #[test]
    fn test_null_body_is_no_data() {
        let mut state = ViewState::new();
        state.apply(ViewAction::Loaded(Ok(None)));
        assert_eq!(state.render_state(), RenderState::NoData);
    }

    #[test]
    fn test_terminal_state_ignores_second_load() {
        let mut state = ViewState::new();
        state.apply(ViewAction::Loaded(Err(FetchError::Network("down".to_string()))));
        state.apply(ViewAction::Loaded(Ok(Some(vec![make_item(1, 1, "Alpha")]))));
        assert!(matches!(state.render_state(), RenderState::Failed(_)));
    }

    #[test]
    fn test_user_actions_ignored_until_ready() {
        let mut state = ViewState::new();
        state.apply(ViewAction::SetCategory(Category::HighOwner));
        state.apply(ViewAction::SetSearchTerm("x".to_string()));
        assert_eq!(state.category, Category::All);
        assert!(state.search_term.is_empty());
    }

    #[test]
    fn test_set_category_and_search() {
        let mut state = ready_state(vec![make_item(1, 1, "Alpha")]);
        state.apply(ViewAction::SetCategory(Category::LowOwner));
        state.apply(ViewAction::SetSearchTerm("alp".to_string()));
        assert_eq!(state.category, Category::LowOwner);
        assert_eq!(state.search_term, "alp");
    }

    #[test]
    fn test_toggle_favorite_twice_keeps_one_entry() {
        let mut state = ready_state(vec![make_item(4, 1, "Alpha")]);
        state.apply(ViewAction::ToggleFavorite(4));
        state.apply(ViewAction::ToggleFavorite(4));
        assert_eq!(state.favorites.in_click_order(), &[4]);
    }

    #[test]
    fn test_favorites_sorted_regardless_of_click_order() {
        let mut state = ready_state(vec![make_item(2, 1, "Two"), make_item(9, 8, "Nine")]);
        state.apply(ViewAction::ToggleFavorite(9));
        state.apply(ViewAction::ToggleFavorite(2));
        assert_eq!(state.favorites.in_click_order(), &[9, 2]);
        assert_eq!(state.favorites.sorted(), vec![2, 9]);
    }

    #[test]
    fn test_negative_ids_sort_first() {
        let mut state = ready_state(vec![make_item(2, 1, "Two"), make_item(-1, 1, "Minus")]);
        state.apply(ViewAction::ToggleFavorite(2));
        state.apply(ViewAction::ToggleFavorite(-1));
        assert_eq!(state.favorites.sorted(), vec![-1, 2]);
        assert_eq!(crate::favorites_readout(&state.favorites.sorted()), "-1, 2");
    }

    #[test]
    fn test_favorite_of_unknown_item_ignored() {
        let mut state = ready_state(vec![make_item(1, 1, "Alpha")]);
        state.apply(ViewAction::ToggleFavorite(99));
        assert!(state.favorites.is_empty());
    }
}
