use crate::board::Item;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;

pub mod client;
pub mod error;
pub mod location;

pub use client::FeedClient;
pub use error::FeedError;
pub use location::FeedLocation;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    fn location(&self) -> &FeedLocation;

    /// Fetch the full ordered item list.
    async fn fetch_items(&self) -> Result<Vec<Item>, FeedError>;
}

/// Fetches the item list, degrading any failure to an empty list.
///
/// The returned event describes the outcome; callers decide whether it is still
/// current before logging it.
pub async fn load_items(source: &dyn FeedSource) -> (Vec<Item>, Event) {
    match source.fetch_items().await {
        Ok(items) => {
            let event = Event::feed_with_level(
                format!("Fetched {} items from {}", items.len(), source.location()),
                EventType::Success,
                LogLevel::Debug,
            );
            (items, event)
        }
        Err(e) => {
            let event = Event::feed_with_level(
                format!("Failed to fetch feed: {}", e),
                EventType::Error,
                e.classify(),
            );
            (Vec::new(), event)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Status;
    use std::path::PathBuf;

    fn mock_with(result: fn() -> Result<Vec<Item>, FeedError>) -> MockFeedSource {
        let mut source = MockFeedSource::new();
        source
            .expect_location()
            .return_const(FeedLocation::File(PathBuf::from("data.json")));
        source.expect_fetch_items().returning(move || result());
        source
    }

    #[tokio::test]
    async fn successful_fetch_passes_items_through() {
        let source = mock_with(|| Ok(vec![Item::new("a", Status::Healthy)]));
        let (items, event) = load_items(&source).await;
        assert_eq!(items.len(), 1);
        assert_eq!(event.event_type, EventType::Success);
    }

    #[tokio::test]
    async fn failed_fetch_degrades_to_empty_list() {
        let source = mock_with(|| {
            Err(FeedError::Http {
                status: 502,
                message: "bad gateway".into(),
            })
        });
        let (items, event) = load_items(&source).await;
        assert!(items.is_empty());
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.log_level, LogLevel::Warn);
        assert!(event.msg.contains("502"));
    }
}
