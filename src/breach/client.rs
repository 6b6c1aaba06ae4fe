//! HTTP transport for range queries.

use std::future::Future;

use reqwest::Client;

use super::{BreachError, RangeLookup};
use crate::config::Config;

/// Queries `<base>/range/<prefix>` over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpRangeLookup {
    client: Client,
    base_url: String,
}

impl HttpRangeLookup {
    /// Builds a client with the configured timeout and user agent.
    pub fn new(config: &Config) -> Result<Self, BreachError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            base_url: config.breach_api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn range_url(&self, prefix: &str) -> String {
        format!("{}/range/{}", self.base_url, prefix)
    }
}

impl RangeLookup for HttpRangeLookup {
    fn fetch_range(&self, prefix: &str) -> impl Future<Output = Result<String, BreachError>> + Send {
        let url = self.range_url(prefix);
        let request = self.client.get(url);
        async move {
            #[cfg(feature = "tracing")]
            tracing::debug!("querying breach range");

            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                #[cfg(feature = "tracing")]
                tracing::warn!("breach corpus answered with status {}", status);
                return Err(BreachError::Status(status.as_u16()));
            }
            Ok(response.text().await?)
        }
    }
}
