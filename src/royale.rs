use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::config::{config_file_path, load_file_config, resolve_base_url, resolve_token};
use crate::util::encode_tag;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.clashroyale.com/v1";

const CONNECT_TIMEOUT_SECS: u64 = 10;
const READ_TIMEOUT_SECS: u64 = 30;

/// Error payload for a non-success HTTP status: the status code plus the
/// raw response body, reported as-is and never retried.
#[derive(Debug, Serialize)]
pub(crate) struct ApiFailure {
    pub(crate) error: u16,
    pub(crate) message: String,
}

#[derive(Debug)]
pub(crate) enum FetchError {
    Api(ApiFailure),
    Transport(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api(failure) => write!(f, "API error {}: {}", failure.error, failure.message),
            Self::Transport(err) => write!(f, "transport error: {err}"),
        }
    }
}

impl std::error::Error for FetchError {}

pub(crate) struct RoyaleClient {
    agent: ureq::Agent,
    base_url: String,
    token: String,
}

impl RoyaleClient {
    pub(crate) fn new(token: String, base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout_read(Duration::from_secs(READ_TIMEOUT_SECS))
            .timeout_write(Duration::from_secs(READ_TIMEOUT_SECS))
            .build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn get_json(&self, path: &str) -> Result<serde_json::Value, FetchError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", "application/json")
            .call();
        match response {
            Ok(resp) => resp
                .into_json()
                .map_err(|e| FetchError::Transport(format!("decode {url}: {e}"))),
            Err(ureq::Error::Status(code, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Err(FetchError::Api(ApiFailure {
                    error: code,
                    message: body,
                }))
            }
            Err(ureq::Error::Transport(err)) => Err(FetchError::Transport(err.to_string())),
        }
    }

    pub(crate) fn cards(&self) -> Result<serde_json::Value, FetchError> {
        self.get_json("/cards")
    }

    pub(crate) fn player(&self, tag: &str) -> Result<serde_json::Value, FetchError> {
        self.get_json(&format!("/players/{}", encode_tag(tag)))
    }

    pub(crate) fn battle_log(&self, tag: &str) -> Result<serde_json::Value, FetchError> {
        self.get_json(&format!("/players/{}/battlelog", encode_tag(tag)))
    }
}

/// Build a client from the flag > environment > config file chain.
pub(crate) fn build_client(
    token: Option<String>,
    config: Option<PathBuf>,
) -> Result<RoyaleClient, Box<dyn std::error::Error>> {
    let file = load_file_config(&config_file_path(config));
    let token = resolve_token(token, &file)?;
    Ok(RoyaleClient::new(token, resolve_base_url(&file)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_failure_serializes_to_error_payload() {
        let failure = ApiFailure {
            error: 403,
            message: "{\"reason\":\"accessDenied\"}".to_string(),
        };
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["error"], 403);
        assert_eq!(json["message"], "{\"reason\":\"accessDenied\"}");
    }

    #[test]
    fn fetch_error_display() {
        let api = FetchError::Api(ApiFailure {
            error: 404,
            message: "not found".to_string(),
        });
        assert_eq!(api.to_string(), "API error 404: not found");

        let transport = FetchError::Transport("connection refused".to_string());
        assert_eq!(transport.to_string(), "transport error: connection refused");
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = RoyaleClient::new("t".to_string(), "https://proxy.example/v1/".to_string());
        assert_eq!(client.base_url, "https://proxy.example/v1");
    }
}
