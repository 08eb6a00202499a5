use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use topo_conf::TopologyConf;
use topo_core::debug_ctrl;

use super::{Fetcher, TransportError};

/// reqwest-backed fetcher. HTTP error statuses count as transport failures.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder =
            Client::builder().user_agent(concat!("topology-cacher/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn from_conf(conf: &TopologyConf) -> Result<Self, reqwest::Error> {
        let timeout = match *conf.timeout_secs() {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        Self::new(timeout)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        debug_ctrl!("fetched {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}
