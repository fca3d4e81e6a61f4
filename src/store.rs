//! The process-wide conversation store.
//!
//! Holds the active conversation, the conversation history, user settings
//! and the uploaded-file set. Every mutation goes through one of the
//! operations below; each one rewrites the persisted snapshot so the state
//! survives restarts.

use crate::storage;
use crate::types::{Conversation, Message, Settings, SettingsPatch, UploadedFile};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed storage key for the persisted snapshot.
pub const STORAGE_KEY: &str = "chat-storage";

#[derive(Clone, Debug, PartialEq)]
pub struct ChatStore {
    pub current_chat: Option<Conversation>,
    pub chat_history: Vec<Conversation>,
    pub settings: Settings,
    pub uploaded_files: Vec<UploadedFile>,
    storage_key: String,
}

/// The single serialized record written on every mutation.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    current_chat: Option<Conversation>,
    chat_history: Vec<Conversation>,
    #[serde(default)]
    settings: Settings,
    uploaded_files: Vec<UploadedFile>,
}

impl ChatStore {
    /// Rehydrate the store from the default storage key, falling back to an
    /// empty store when nothing (or something unparseable) is persisted.
    pub fn load() -> Self {
        Self::with_storage_key(STORAGE_KEY)
    }

    /// Same as [`ChatStore::load`] but against an explicit storage key.
    /// Tests use distinct keys to stay isolated from each other.
    pub fn with_storage_key(key: impl Into<String>) -> Self {
        let storage_key = key.into();
        let snapshot = storage::get(&storage_key)
            .and_then(|raw| match serde_json::from_str::<Snapshot>(&raw) {
                Ok(snapshot) => Some(snapshot),
                Err(err) => {
                    tracing::warn!("discarding unparseable snapshot: {err}");
                    None
                }
            })
            .unwrap_or_default();

        Self {
            current_chat: snapshot.current_chat,
            chat_history: snapshot.chat_history,
            settings: snapshot.settings,
            uploaded_files: snapshot.uploaded_files,
            storage_key,
        }
    }

    /// Replace the active-conversation pointer. No validation.
    pub fn set_current_chat(&mut self, chat: Option<Conversation>) {
        self.current_chat = chat;
        self.persist();
    }

    /// Start a fresh conversation: set it active and prepend it to history.
    pub fn create_chat(&mut self) {
        let chat = Conversation::new();
        self.current_chat = Some(chat.clone());
        self.chat_history.insert(0, chat);
        self.persist();
    }

    /// Append a message to the active conversation and mirror it into the
    /// matching history entry. No-op when no conversation is active.
    pub fn append_message(&mut self, message: Message) {
        let Some(chat) = self.current_chat.as_mut() else {
            return;
        };

        chat.messages.push(message);
        let updated = chat.clone();
        if let Some(entry) = self.chat_history.iter_mut().find(|c| c.id == updated.id) {
            *entry = updated;
        }
        self.persist();
    }

    /// Shallow-merge a settings patch; unspecified fields keep their value.
    pub fn update_settings(&mut self, patch: SettingsPatch) {
        self.settings.merge(patch);
        self.persist();
    }

    pub fn add_uploaded_file(&mut self, file: UploadedFile) {
        self.uploaded_files.push(file);
        self.persist();
    }

    /// Remove an uploaded file by id; removing an absent id is a no-op.
    pub fn remove_uploaded_file(&mut self, id: &Uuid) {
        self.uploaded_files.retain(|file| &file.id != id);
        self.persist();
    }

    fn persist(&self) {
        let snapshot = Snapshot {
            current_chat: self.current_chat.clone(),
            chat_history: self.chat_history.clone(),
            settings: self.settings.clone(),
            uploaded_files: self.uploaded_files.clone(),
        };
        let raw = match serde_json::to_string(&snapshot) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("failed to serialize state snapshot: {err}");
                return;
            }
        };
        if let Err(err) = storage::set(&self.storage_key, &raw) {
            tracing::warn!("failed to persist state snapshot: {err}");
        }
    }
}
