//! Session setup and initialization

use crate::feed::{FeedClient, FeedLocation, FeedSource};
use std::error::Error;
use std::sync::Arc;

/// Session data for both TUI and summary modes
pub struct SessionData {
    /// Where items come from
    pub source: Arc<dyn FeedSource>,
    /// Feed location as given, for display
    pub feed: String,
}

/// Sets up a session reading from `feed`.
///
/// # Returns
/// * `Ok(SessionData)` - Ready-to-use feed client
/// * `Err` - The location is empty or the HTTP client could not be built
pub fn setup_session(feed: &str) -> Result<SessionData, Box<dyn Error>> {
    let location: FeedLocation = feed.parse()?;
    let client = FeedClient::new(location)?;
    Ok(SessionData {
        source: Arc::new(client),
        feed: feed.trim().to_string(),
    })
}
