use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

pub struct RelayClient {
    client: Client,
    relay_url: String,
    token: String,
}

impl RelayClient {
    pub fn new(relay_url: &str, token: &str) -> Self {
        Self {
            client: Client::builder()
                .no_proxy()
                .build()
                .unwrap_or_else(|_| Client::new()),
            relay_url: relay_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Submit a prompt and decode the upstream job descriptor.
    pub async fn submit(&self, prompt: &str) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        let resp = self.submit_raw(&PromptRequest { prompt: prompt.to_string() }).await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("Relay returned error status {}: {}", status, text).into());
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Post any JSON body with the configured bearer token.
    pub async fn submit_raw<T: Serialize + ?Sized>(&self, body: &T) -> Result<Response, reqwest::Error> {
        self.client
            .post(&self.relay_url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
    }

    /// Send a request with an arbitrary method and raw body, no auth header.
    pub async fn send_unauthenticated(
        &self,
        method: reqwest::Method,
        body: &'static str,
    ) -> Result<Response, reqwest::Error> {
        self.client
            .request(method, &self.relay_url)
            .body(body)
            .send()
            .await
    }
}
