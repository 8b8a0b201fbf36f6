//! HTTP Picture Source
//!
//! Downloads pictures from their original hosts with a blocking reqwest
//! client.

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::HttpConfig;
use crate::domain::ports::{PictureSource, StoreError, StoreResult};
use crate::error::{PicbedError, PicbedResult};

/// Build the blocking client shared by fetches and bucket requests
pub fn build_client(config: &HttpConfig) -> PicbedResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| PicbedError::HttpClient {
            message: e.to_string(),
        })
}

/// Fetches pictures over plain HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpPictureSource {
    client: Client,
}

impl HttpPictureSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl PictureSource for HttpPictureSource {
    fn fetch(&self, url: &str, local_path: &Path) -> StoreResult<()> {
        let fetch_err = |e: reqwest::Error| StoreError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(fetch_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(fetch_err)?;
        std::fs::write(local_path, &body).map_err(|e| StoreError::io(local_path, e))?;
        debug!(url, bytes = body.len(), cache = %local_path.display(), "fetched picture");
        Ok(())
    }
}
