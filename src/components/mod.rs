//! UI Components
//!
//! Pieces of the ready-state browser view.

mod category_bar;
mod favorites_readout;
mod post_list;
mod search_box;

pub use category_bar::CategoryBar;
pub use favorites_readout::FavoritesReadout;
pub use post_list::PostList;
pub use search_box::SearchBox;
