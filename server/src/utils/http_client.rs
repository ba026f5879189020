use reqwest::Client;
use std::time::Duration;

/// Shared builder for outbound AI calls. No request timeout is set; calls wait as long as the stack allows.
pub fn new_api_client() -> reqwest::Result<Client> {
    Client::builder()
        .pool_idle_timeout(Some(Duration::from_secs(240)))
        .tcp_keepalive(Duration::from_secs(60))
        .build()
}
