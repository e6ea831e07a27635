//! Small wrappers over `window.localStorage`.
//!
//! Storage can be absent (SSR-less test harnesses, privacy modes); every
//! helper degrades to a no-op or `None` instead of failing.

use serde::Serialize;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Raw string stored under `key`, if any.
pub fn load_raw(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

/// Serialize `value` as JSON under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = storage() else {
        return;
    };
    if let Ok(json) = serde_json::to_string(value) {
        let _ = storage.set_item(key, &json);
    }
}

/// Delete `key` from storage.
pub fn remove(key: &str) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(key);
    }
}
