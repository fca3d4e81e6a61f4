use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single chat message. Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub role: Role,
    #[serde(default = "current_timestamp")]
    pub timestamp: u64,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            role,
            timestamp: current_timestamp(),
        }
    }
}

/// An ordered conversation. Messages are only ever appended; insertion order
/// is display order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: Uuid,
    pub title: String,
    #[serde(default = "current_timestamp")]
    pub created_at: u64,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "New Chat".to_string(),
            created_at: current_timestamp(),
            messages: Vec::new(),
        }
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelBackend {
    Ollama,
    Hosted,
}

/// User-tunable model configuration. Bounds (temperature in [0, 1],
/// max_tokens in [1, 4096]) are enforced at the settings panel, not here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub backend: ModelBackend,
    pub temperature: f32,
    pub max_tokens: u32,
    pub ollama_model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: ModelBackend::Ollama,
            temperature: 0.7,
            max_tokens: 1000,
            ollama_model: "llama2".to_string(),
            api_key: None,
        }
    }
}

impl Settings {
    /// Shallow merge: fields present in the patch replace the current value,
    /// everything else is left untouched.
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(backend) = patch.backend {
            self.backend = backend;
        }
        if let Some(temperature) = patch.temperature {
            self.temperature = temperature;
        }
        if let Some(max_tokens) = patch.max_tokens {
            self.max_tokens = max_tokens;
        }
        if let Some(ollama_model) = patch.ollama_model {
            self.ollama_model = ollama_model;
        }
        if let Some(api_key) = patch.api_key {
            self.api_key = Some(api_key);
        }
    }
}

/// Partial settings update; `None` fields keep their prior value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsPatch {
    pub backend: Option<ModelBackend>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub ollama_model: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Text,
    Pdf,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Text => "text",
            FileKind::Pdf => "pdf",
        }
    }
}

/// Normalized text extracted from an uploaded file, used as grounding
/// context for generation. Immutable after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    pub content: String,
}

pub(crate) fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
