//! Background feed fetching for the UI loop

use crate::board::Item;
use crate::events::Event;
use crate::feed::{FeedSource, load_items};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Result of one fetch, tagged with the generation it was issued under.
#[derive(Debug)]
pub struct FeedUpdate {
    pub generation: u64,
    pub items: Vec<Item>,
    pub event: Event,
}

/// Fetches the feed in the background and reports back on `updates`.
///
/// Fetches are never cancelled; the receiver is expected to drop results whose
/// generation has been superseded.
pub fn spawn_fetch(
    source: Arc<dyn FeedSource>,
    generation: u64,
    updates: mpsc::Sender<FeedUpdate>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let (items, event) = load_items(source.as_ref()).await;
        let _ = updates
            .send(FeedUpdate {
                generation,
                items,
                event,
            })
            .await;
    })
}
