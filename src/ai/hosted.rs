use super::GatewayResult;

/// Fixed reply for the hosted backend. Surfaced to the user instead of
/// failing silently; the hosted API contract is deliberately not guessed at.
pub const HOSTED_PLACEHOLDER: &str = "Hosted model API not implemented yet";

/// Stand-in client for a remote, authenticated inference API.
///
/// The variant exists so backend dispatch stays exhaustive, but no request
/// is ever issued: `generate` returns [`HOSTED_PLACEHOLDER`]. The API key
/// from settings is accepted and ignored for the same reason.
#[derive(Default)]
pub struct HostedClient;

impl HostedClient {
    pub fn new() -> Self {
        Self
    }

    pub async fn generate(&self, _prompt: &str, _api_key: Option<&str>) -> GatewayResult<String> {
        Ok(HOSTED_PLACEHOLDER.to_string())
    }
}
