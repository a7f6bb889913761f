//! Posts View Core
//!
//! Platform-independent half of the posts browser:
//! - models: items and the owner category
//! - fetch: the single GET that loads the list
//! - state: view state and the actions that mutate it
//! - derive: pure filters recomputed on every state change

mod cancel;
mod config;
mod derive;
mod error;
mod fetch;
mod models;
mod state;

pub use cancel::CancelToken;
pub use config::{Config, DEFAULT_ENDPOINT};
pub use derive::{favorites_readout, filter_by_category, filter_by_search, visible_items};
pub use error::FetchError;
pub use fetch::{fetch_items, HttpClient, HttpResponse, ReqwestClient};
pub use models::{Category, Item};
pub use state::{FavoriteSet, LoadState, RenderState, ViewAction, ViewState};

#[cfg(feature = "store")]
pub use state::ViewStateStoreFields;
