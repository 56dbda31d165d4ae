//! Browser-scoped persistence for small settings (`localStorage`).
//!
//! Native builds have no such surface; every call reports [`StorageError::Unavailable`].

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available here")]
    Unavailable,
    #[error("local storage access failed: {0}")]
    Access(String),
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(access_error)?
        .ok_or(StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn access_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Access(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

#[cfg(target_arch = "wasm32")]
pub fn is_available() -> bool {
    local_storage().is_ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn is_available() -> bool {
    false
}

/// Read a stored setting. `Ok(None)` means storage works but the key is unset.
#[cfg(target_arch = "wasm32")]
pub fn load_setting(key: &str) -> Result<Option<String>, StorageError> {
    local_storage()?.get_item(key).map_err(access_error)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_setting(_key: &str) -> Result<Option<String>, StorageError> {
    Err(StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
pub fn save_setting(key: &str, value: &str) -> Result<(), StorageError> {
    local_storage()?.set_item(key, value).map_err(access_error)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_setting(_key: &str, _value: &str) -> Result<(), StorageError> {
    Err(StorageError::Unavailable)
}
