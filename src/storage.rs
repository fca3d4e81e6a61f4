//! Persisted client-side state.
//!
//! A single serialized record lives under a fixed storage key: a JSON file
//! in the platform data directory on native targets, an in-memory map on
//! wasm. Written on every store mutation, read once at startup.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

/// In-memory storage for WASM, file-based for native
#[allow(dead_code)]
static MEM_STORAGE: Lazy<Mutex<HashMap<String, String>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Directory holding the persisted state files
#[cfg(not(target_arch = "wasm32"))]
pub fn state_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        return data_dir.join("goldfinch").join("state");
    }

    PathBuf::from("cache").join("state")
}

/// Sanitize storage key for filesystem use
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

/// Get the serialized record stored under `key`
#[cfg(not(target_arch = "wasm32"))]
pub fn get(key: &str) -> Option<String> {
    let file_path = state_dir().join(format!("{}.json", sanitize_key(key)));
    fs::read_to_string(file_path).ok()
}

#[cfg(target_arch = "wasm32")]
pub fn get(key: &str) -> Option<String> {
    let storage = MEM_STORAGE.lock().ok()?;
    storage.get(key).cloned()
}

/// Store a serialized record under `key`
#[cfg(not(target_arch = "wasm32"))]
pub fn set(key: &str, value: &str) -> Result<(), String> {
    let dir = state_dir();
    fs::create_dir_all(&dir).map_err(|e| format!("Failed to create state directory: {}", e))?;
    let file_path = dir.join(format!("{}.json", sanitize_key(key)));
    fs::write(file_path, value).map_err(|e| format!("Failed to write state: {}", e))
}

#[cfg(target_arch = "wasm32")]
pub fn set(key: &str, value: &str) -> Result<(), String> {
    let mut storage = MEM_STORAGE.lock().map_err(|e| e.to_string())?;
    storage.insert(key.to_string(), value.to_string());
    Ok(())
}

/// Delete the record stored under `key`
#[cfg(not(target_arch = "wasm32"))]
pub fn remove(key: &str) -> Result<(), String> {
    let file_path = state_dir().join(format!("{}.json", sanitize_key(key)));
    if file_path.exists() {
        fs::remove_file(file_path).map_err(|e| format!("Failed to delete state: {}", e))?;
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn remove(key: &str) -> Result<(), String> {
    let mut storage = MEM_STORAGE.lock().map_err(|e| e.to_string())?;
    storage.remove(key);
    Ok(())
}
