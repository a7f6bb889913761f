//! Derivation pipeline: category stage, then search stage.
//! Both keep the endpoint's order.

use crate::models::{Category, Item};
use crate::state::ViewState;

/// Shown in the readout while nothing is favorited
const EMPTY_READOUT: &str = "—";

pub fn filter_by_category(items: &[Item], category: Category) -> Vec<Item> {
    items
        .iter()
        .filter(|item| category.matches(item.owner_id))
        .cloned()
        .collect()
}

/// Case-insensitive substring match on the title.
///
/// A blank term keeps everything; otherwise the term is matched as typed,
/// surrounding spaces included.
pub fn filter_by_search(items: &[Item], term: &str) -> Vec<Item> {
    if term.trim().is_empty() {
        return items.to_vec();
    }
    let term = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.title.to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// Items currently on screen, both stages in one call.
///
/// The UI memoizes each stage separately; this is the non-reactive form.
pub fn visible_items(state: &ViewState) -> Vec<Item> {
    let by_category = filter_by_category(state.load.items(), state.category);
    filter_by_search(&by_category, &state.search_term)
}

/// "2, 9" style readout of already-sorted ids
pub fn favorites_readout(sorted_ids: &[i64]) -> String {
    if sorted_ids.is_empty() {
        return EMPTY_READOUT.to_string();
    }
    sorted_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
