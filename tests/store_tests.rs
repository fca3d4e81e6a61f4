//! Integration tests for the conversation store and its persisted snapshot.
//!
//! Each test uses its own storage key so tests stay isolated from each other
//! and from any real application state.

use goldfinch::storage;
use goldfinch::store::ChatStore;
use goldfinch::types::{FileKind, Message, ModelBackend, Role, SettingsPatch, UploadedFile};
use uuid::Uuid;

fn fresh_store(key: &str) -> ChatStore {
    storage::remove(key).expect("Failed to clear test storage");
    ChatStore::with_storage_key(key)
}

fn text_file(name: &str, content: &str) -> UploadedFile {
    UploadedFile {
        id: Uuid::new_v4(),
        name: name.to_string(),
        kind: FileKind::Text,
        content: content.to_string(),
    }
}

#[test]
fn create_chat_prepends_and_activates() {
    let key = "goldfinch-test-create-chat";
    let mut store = fresh_store(key);

    store.create_chat();
    let first_id = store.current_chat.as_ref().expect("chat active").id;
    assert_eq!(store.chat_history.len(), 1);
    assert!(store.chat_history[0].messages.is_empty());
    assert_eq!(store.chat_history[0].title, "New Chat");

    store.create_chat();
    let second_id = store.current_chat.as_ref().expect("chat active").id;

    assert_ne!(first_id, second_id);
    assert_eq!(store.chat_history.len(), 2);
    // Newest chat is active and first in history order.
    assert_eq!(store.chat_history[0].id, second_id);
    assert_eq!(store.chat_history[1].id, first_id);

    storage::remove(key).expect("Failed to clean up");
}

#[test]
fn append_without_active_chat_is_noop() {
    let key = "goldfinch-test-append-noop";
    let mut store = fresh_store(key);

    store.append_message(Message::new(Role::User, "Hi"));

    assert!(store.current_chat.is_none());
    assert!(store.chat_history.is_empty());

    storage::remove(key).expect("Failed to clean up");
}

#[test]
fn append_updates_active_chat_and_history_entry() {
    let key = "goldfinch-test-append";
    let mut store = fresh_store(key);
    store.create_chat();

    store.append_message(Message::new(Role::User, "Hi"));
    store.append_message(Message::new(Role::Assistant, "Hello!"));

    let chat = store.current_chat.as_ref().expect("chat active");
    assert_eq!(chat.messages.len(), 2);
    assert_eq!(chat.messages[0].role, Role::User);
    assert_eq!(chat.messages[1].role, Role::Assistant);
    // The history entry mirrors the active conversation.
    assert_eq!(store.chat_history[0], *chat);

    storage::remove(key).expect("Failed to clean up");
}

#[test]
fn clearing_the_active_chat_keeps_history() {
    let key = "goldfinch-test-clear";
    let mut store = fresh_store(key);
    store.create_chat();

    store.set_current_chat(None);

    assert!(store.current_chat.is_none());
    assert_eq!(store.chat_history.len(), 1);

    storage::remove(key).expect("Failed to clean up");
}

#[test]
fn settings_merge_preserves_unspecified_fields() {
    let key = "goldfinch-test-settings";
    let mut store = fresh_store(key);
    let before = store.settings.clone();

    store.update_settings(SettingsPatch {
        temperature: Some(0.3),
        backend: Some(ModelBackend::Hosted),
        ..Default::default()
    });

    assert_eq!(store.settings.temperature, 0.3);
    assert_eq!(store.settings.backend, ModelBackend::Hosted);
    assert_eq!(store.settings.max_tokens, before.max_tokens);
    assert_eq!(store.settings.ollama_model, before.ollama_model);
    assert_eq!(store.settings.api_key, before.api_key);

    storage::remove(key).expect("Failed to clean up");
}

#[test]
fn uploaded_files_add_and_remove() {
    let key = "goldfinch-test-files";
    let mut store = fresh_store(key);

    let file = text_file("a.txt", "X");
    let id = file.id;
    store.add_uploaded_file(file);
    store.add_uploaded_file(text_file("b.txt", "Y"));
    assert_eq!(store.uploaded_files.len(), 2);

    store.remove_uploaded_file(&id);
    assert_eq!(store.uploaded_files.len(), 1);
    assert_eq!(store.uploaded_files[0].name, "b.txt");

    storage::remove(key).expect("Failed to clean up");
}

#[test]
fn removing_a_missing_file_is_noop() {
    let key = "goldfinch-test-remove-missing";
    let mut store = fresh_store(key);
    store.add_uploaded_file(text_file("a.txt", "X"));

    store.remove_uploaded_file(&Uuid::new_v4());

    assert_eq!(store.uploaded_files.len(), 1);

    storage::remove(key).expect("Failed to clean up");
}

#[test]
fn snapshot_roundtrip_restores_everything() {
    let key = "goldfinch-test-roundtrip";
    let mut store = fresh_store(key);

    store.create_chat();
    store.append_message(Message::new(Role::User, "remember me"));
    store.update_settings(SettingsPatch {
        ollama_model: Some("mistral".to_string()),
        ..Default::default()
    });
    store.add_uploaded_file(text_file("notes.txt", "grounding"));

    let reloaded = ChatStore::with_storage_key(key);
    assert_eq!(reloaded, store);

    storage::remove(key).expect("Failed to clean up");
}

#[test]
fn corrupt_snapshot_falls_back_to_defaults() {
    let key = "goldfinch-test-corrupt";
    storage::set(key, "{ not json").expect("Failed to seed corrupt state");

    let store = ChatStore::with_storage_key(key);
    assert!(store.current_chat.is_none());
    assert!(store.chat_history.is_empty());
    assert!(store.uploaded_files.is_empty());

    storage::remove(key).expect("Failed to clean up");
}
