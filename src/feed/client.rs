//! Feed client
//!
//! Reads the flat item list from an HTTP endpoint or a local JSON file.

use super::FeedSource;
use super::error::FeedError;
use super::location::FeedLocation;
use crate::board::Item;
use crate::consts::wallboard_consts::feed;
use reqwest::{Client, ClientBuilder, Response};
use std::path::Path;

// Build timestamp in milliseconds since epoch
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP");

// User-Agent string with the wallboard version
const USER_AGENT: &str = concat!("status-wallboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    location: FeedLocation,
}

impl FeedClient {
    pub fn new(location: FeedLocation) -> Result<Self, FeedError> {
        let client = ClientBuilder::new()
            .connect_timeout(feed::connect_timeout())
            .timeout(feed::request_timeout())
            .build()?;
        Ok(Self { client, location })
    }

    fn decode_items(bytes: &[u8]) -> Result<Vec<Item>, FeedError> {
        serde_json::from_slice(bytes).map_err(FeedError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, FeedError> {
        if !response.status().is_success() {
            return Err(FeedError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request(&self, url: &str) -> Result<Vec<Item>, FeedError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .header("X-Build-Timestamp", BUILD_TIMESTAMP)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_items(&response_bytes)
    }

    async fn read_file(path: &Path) -> Result<Vec<Item>, FeedError> {
        let bytes = tokio::fs::read(path).await?;
        Self::decode_items(&bytes)
    }
}

#[async_trait::async_trait]
impl FeedSource for FeedClient {
    fn location(&self) -> &FeedLocation {
        &self.location
    }

    async fn fetch_items(&self) -> Result<Vec<Item>, FeedError> {
        match &self.location {
            FeedLocation::Http(url) => self.get_request(url).await,
            FeedLocation::File(path) => Self::read_file(path).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Status;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn reads_items_from_a_local_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"Name": "a", "Status": "Healthy"}}, {{"Name": "b", "Status": "Unhealthy"}}]"#
        )
        .unwrap();

        let client = FeedClient::new(FeedLocation::File(file.path().to_path_buf())).unwrap();
        let items = client.fetch_items().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].status, Status::Unhealthy);
    }

    #[tokio::test]
    async fn malformed_file_is_a_decode_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"not": "a list"}}"#).unwrap();

        let client = FeedClient::new(FeedLocation::File(file.path().to_path_buf())).unwrap();
        let result = client.fetch_items().await;
        assert!(matches!(result, Err(FeedError::Decode(_))));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let client = FeedClient::new(FeedLocation::File(dir.path().join("absent.json"))).unwrap();
        assert!(matches!(
            client.fetch_items().await,
            Err(FeedError::Io(_))
        ));
    }
}
