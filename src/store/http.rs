//! HTTP item store client.
//!
//! Talks to a REST item service exposing `GET {base}/items` (JSON array of
//! items) and `POST {base}/items` (draft in, stored item out). Transport
//! failures map to `Error::Network`; non-2xx statuses and bodies that do not
//! decode as items map to `Error::Server`.

use crate::{
    config::store::StoreConfig,
    entities::{DraftItem, Item},
    errors::{Error, Result},
    store::ItemStore,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Item store backed by the REST item service
#[derive(Debug, Clone)]
pub struct HttpItemStore {
    client: Client,
    items_url: String,
}

impl HttpItemStore {
    /// Creates a client for the store at `config.base_url`.
    ///
    /// # Errors
    /// Returns `Error::Config` if the HTTP client cannot be constructed.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            items_url: format!("{}/items", config.base_url.trim_end_matches('/')),
        })
    }

    /// Full URL of the items resource
    #[must_use]
    pub fn items_url(&self) -> &str {
        &self.items_url
    }
}

impl ItemStore for HttpItemStore {
    async fn fetch_all(&self) -> Result<Vec<Item>> {
        debug!("GET {}", self.items_url);
        let response = self
            .client
            .get(&self.items_url)
            .send()
            .await
            .map_err(network_error)?;

        let items: Vec<Item> = decode_success(response).await?;
        debug!("Fetched {} items", items.len());
        Ok(items)
    }

    async fn create(&self, draft: &DraftItem) -> Result<Item> {
        debug!("POST {} for payee {:?}", self.items_url, draft.payee_name);
        let response = self
            .client
            .post(&self.items_url)
            .json(draft)
            .send()
            .await
            .map_err(network_error)?;

        let item: Item = decode_success(response).await?;
        debug!("Store assigned id {}", item.id);
        Ok(item)
    }
}

fn network_error(err: reqwest::Error) -> Error {
    Error::Network {
        message: err.to_string(),
    }
}

/// Reads the body of a response, rejecting non-2xx statuses, and decodes it.
async fn decode_success<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;

    if !status.is_success() {
        warn!("Item store returned {status}: {body}");
        return Err(Error::Server {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        warn!("Item store returned an undecodable body: {e}");
        Error::Server {
            status: status.as_u16(),
            body: format!("Invalid item payload: {e}"),
        }
    })
}
