use reqwest::Client;

/// Shared Identity Toolkit HTTP client configuration.
pub struct FirebaseAuthClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl FirebaseAuthClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: "https://identitytoolkit.googleapis.com/v1".to_string(),
        }
    }

    /// Returns the endpoint URL for an `accounts:<action>` call.
    pub fn accounts_url(&self, action: &str) -> String {
        format!("{}/accounts:{}?key={}", self.base_url, action, self.api_key)
    }
}
