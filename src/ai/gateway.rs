use super::prompt::{answer_prompt, summary_prompt};
use super::{GatewayResult, HostedClient, OllamaClient};
use crate::types::{ModelBackend, Settings, UploadedFile};

/// Synthetic assistant reply appended when a chat turn fails. The
/// conversation history is the single channel for both successful and
/// failed turns.
pub const TURN_ERROR_MESSAGE: &str = "Sorry, there was an error generating the response.";

/// Dispatches generation requests to the backend selected in settings.
pub struct ModelGateway {
    ollama: OllamaClient,
    hosted: HostedClient,
}

impl ModelGateway {
    pub fn from_env() -> Self {
        Self::new(OllamaClient::from_env(), HostedClient::new())
    }

    pub fn new(ollama: OllamaClient, hosted: HostedClient) -> Self {
        Self { ollama, hosted }
    }

    /// One full generation round trip against the configured backend.
    pub async fn generate(&self, prompt: &str, settings: &Settings) -> GatewayResult<String> {
        match settings.backend {
            ModelBackend::Ollama => {
                self.ollama
                    .generate(&settings.ollama_model, prompt, settings.temperature)
                    .await
            }
            ModelBackend::Hosted => {
                self.hosted
                    .generate(prompt, settings.api_key.as_deref())
                    .await
            }
        }
    }

    /// Model names offered by the local server. Soft-fails to an empty list:
    /// an absent server must not block the settings panel.
    pub async fn list_local_models(&self) -> Vec<String> {
        match self.ollama.list_models().await {
            Ok(models) => models,
            Err(err) => {
                tracing::warn!("failed to fetch local models: {err}");
                Vec::new()
            }
        }
    }

    /// Summarize one uploaded document with the fixed template.
    pub async fn summarize(
        &self,
        file: &UploadedFile,
        settings: &Settings,
    ) -> GatewayResult<String> {
        self.generate(&summary_prompt(file), settings).await
    }

    /// Answer a chat turn, grounding the reply in the uploaded documents.
    pub async fn answer(
        &self,
        input: &str,
        settings: &Settings,
        files: &[UploadedFile],
    ) -> GatewayResult<String> {
        self.generate(&answer_prompt(input, files), settings).await
    }
}

/// Run one chat turn and always come back with displayable text: failures
/// are logged and collapsed into [`TURN_ERROR_MESSAGE`].
pub async fn chat_reply(
    gateway: &ModelGateway,
    input: &str,
    settings: &Settings,
    files: &[UploadedFile],
) -> String {
    match gateway.answer(input, settings, files).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("failed to generate response: {err}");
            TURN_ERROR_MESSAGE.to_string()
        }
    }
}
