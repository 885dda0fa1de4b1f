use shared::{Error, KeyValueStore, Result};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// [`KeyValueStore`] over the browser's localStorage. The backend is looked
/// up on every call; a missing or blocked localStorage surfaces as
/// `StorageUnavailable` and is recovered by the cell layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn backend(&self) -> Result<Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(Error::StorageUnavailable)
    }
}

fn js_reason(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.backend()?.get_item(key).map_err(|err| Error::StorageRead {
            key: key.to_owned(),
            reason: js_reason(err),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.backend()?.set_item(key, value).map_err(|err| Error::StorageWrite {
            key: key.to_owned(),
            reason: js_reason(err),
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.backend()?.remove_item(key).map_err(|err| Error::StorageWrite {
            key: key.to_owned(),
            reason: js_reason(err),
        })
    }
}
