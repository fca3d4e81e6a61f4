//! Conversation export.
//!
//! Renders a conversation as a markdown transcript and, on native targets,
//! writes it into the user's download directory.

use crate::types::Conversation;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

/// Every message as `## <role>` followed by its content, separated by
/// horizontal rules, in conversation order.
pub fn render_transcript(conversation: &Conversation) -> String {
    conversation
        .messages
        .iter()
        .map(|msg| format!("## {}\n{}\n", msg.role.as_str(), msg.content))
        .collect::<Vec<_>>()
        .join("\n---\n\n")
}

pub fn export_file_name(conversation: &Conversation) -> String {
    format!("chat-history-{}.md", conversation.id)
}

/// Write the transcript next to the user's other downloads and return the
/// path it landed at.
#[cfg(not(target_arch = "wasm32"))]
pub fn download_transcript(conversation: &Conversation) -> anyhow::Result<PathBuf> {
    let dir = dirs::download_dir().unwrap_or_else(crate::storage::state_dir);
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create download directory {}", dir.display()))?;

    let path = dir.join(export_file_name(conversation));
    fs::write(&path, render_transcript(conversation))
        .with_context(|| format!("failed to write transcript {}", path.display()))?;
    Ok(path)
}
