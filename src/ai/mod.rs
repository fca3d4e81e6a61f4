//! Model gateway.
//!
//! Forwards prompts to an inference backend and relays the generated text
//! back. Two backends exist: a local Ollama-style HTTP server and a hosted
//! API that is deliberately left unimplemented (see [`HostedClient`]).
//!
//! # Usage
//!
//! ```rust,no_run
//! use goldfinch::ai::ModelGateway;
//! use goldfinch::types::Settings;
//!
//! # async fn example() {
//! let gateway = ModelGateway::from_env();
//! let reply = gateway.answer("Hello!", &Settings::default(), &[]).await;
//! # }
//! ```

mod gateway;
mod hosted;
mod ollama;
pub mod prompt;

pub use gateway::{ModelGateway, TURN_ERROR_MESSAGE, chat_reply};
pub use hosted::{HOSTED_PLACEHOLDER, HostedClient};
pub use ollama::OllamaClient;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The backend could not be reached at all (transport failure).
    #[error("backend unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend error {status}: {body}")]
    Backend {
        status: reqwest::StatusCode,
        body: String,
    },
}

pub type GatewayResult<T> = Result<T, GatewayError>;
