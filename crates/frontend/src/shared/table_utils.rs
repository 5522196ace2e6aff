//! Table utilities: column visibility persisted in localStorage.

use std::collections::HashMap;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Saves the column visibility map.
///
/// # Arguments
/// * `storage_key` - localStorage key, unique per list
pub fn save_column_visibility(storage_key: &str, visibility: &HashMap<String, bool>) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(visibility) {
        Ok(json) => {
            let _ = storage.set_item(storage_key, &json);
        }
        Err(e) => log::warn!("Failed to serialize column visibility: {}", e),
    }
}

/// Restores a saved column visibility map. Missing or corrupt entries yield `None`.
pub fn restore_column_visibility(storage_key: &str) -> Option<HashMap<String, bool>> {
    let json = local_storage()?.get_item(storage_key).ok()??;
    match serde_json::from_str(&json) {
        Ok(visibility) => Some(visibility),
        Err(e) => {
            log::warn!("Ignoring corrupt column visibility in {}: {}", storage_key, e);
            None
        }
    }
}
