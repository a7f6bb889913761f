//! Inline page configuration.
//!
//! Read from `<script id="app-config" type="application/json">` in index.html.

use posts_view::Config;

const CONFIG_ELEMENT_ID: &str = "app-config";

/// Missing element means defaults; malformed JSON is reported to the caller
pub fn read_config() -> Result<Config, String> {
    match inline_config_text() {
        Some(raw) => Config::from_json(&raw).map_err(|e| format!("Invalid {}: {}", CONFIG_ELEMENT_ID, e)),
        None => Ok(Config::default()),
    }
}

fn inline_config_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}
