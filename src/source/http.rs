use crate::error::{MenuError, Result};
use crate::source::traits::MenuSource;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use std::time::Duration;

/// Menu document served over HTTP(S), e.g. a raw file in a git host
#[derive(Clone)]
pub struct HttpSource {
    client: HttpClient,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: HttpClient::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| HttpClient::new()),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl MenuSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(MenuError::http_failed(status.as_u16(), &self.url));
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
