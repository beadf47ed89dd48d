//! Default transport over a blocking reqwest client

use crate::error::Result;
use crate::transport::Transport;
use std::time::Duration;

const USER_AGENT: &str = "locationiq/0.1.0";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Blocking HTTP transport with a request timeout
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a transport with the default timeout
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?.error_for_status()?;

        Ok(response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = HttpTransport::new().unwrap();
        assert!(format!("{:?}", transport).contains("HttpTransport"));
    }

    #[test]
    fn test_transport_is_object_safe() {
        let transport = HttpTransport::new().unwrap();
        let _boxed: Box<dyn Transport> = Box::new(transport);
    }
}
