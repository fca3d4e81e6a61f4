use super::{GatewayError, GatewayResult};
use reqwest::Client;
use serde::Deserialize;

const DEFAULT_HOST: &str = "http://localhost:11434";

/// Client for a local Ollama-style inference server.
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    pub fn from_env() -> Self {
        let base_url = std::env::var("OLLAMA_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[derive(serde::Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(serde::Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Deserialize)]
struct TagsResponse {
    models: Vec<TagModel>,
}

#[derive(Deserialize)]
struct TagModel {
    name: String,
}

impl OllamaClient {
    /// Single non-streaming generation round trip.
    pub async fn generate(
        &self,
        model: &str,
        prompt: &str,
        temperature: f32,
    ) -> GatewayResult<String> {
        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&GenerateRequest {
                model,
                prompt,
                stream: false,
                options: GenerateOptions { temperature },
            })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            match serde_json::from_str::<GenerateResponse>(&body) {
                Ok(parsed) => Ok(parsed.response),
                Err(_) => Ok(body),
            }
        } else {
            Err(GatewayError::Backend { status, body })
        }
    }

    /// Names of the models the server has available.
    pub async fn list_models(&self) -> GatewayResult<Vec<String>> {
        let response = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            match serde_json::from_str::<TagsResponse>(&body) {
                Ok(parsed) => Ok(parsed.models.into_iter().map(|model| model.name).collect()),
                Err(_) => Ok(Vec::new()),
            }
        } else {
            Err(GatewayError::Backend { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_wire_shape() {
        let request = GenerateRequest {
            model: "llama2",
            prompt: "Hi",
            stream: false,
            options: GenerateOptions { temperature: 0.5 },
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "model": "llama2",
                "prompt": "Hi",
                "stream": false,
                "options": { "temperature": 0.5 }
            })
        );
    }

    #[test]
    fn tags_response_parses_model_names() {
        let body = r#"{"models":[{"name":"llama2","size":1},{"name":"mistral"}]}"#;
        let parsed: TagsResponse = serde_json::from_str(body).unwrap();
        let names: Vec<String> = parsed.models.into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["llama2", "mistral"]);
    }
}
