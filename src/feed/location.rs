use super::error::FeedError;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

/// Where the item list is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedLocation {
    /// Remote JSON resource fetched over HTTP(S).
    Http(String),
    /// Local JSON file.
    File(PathBuf),
}

impl FromStr for FeedLocation {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FeedError::EmptyLocation);
        }
        let lower = trimmed.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(FeedLocation::Http(trimmed.to_string()))
        } else {
            Ok(FeedLocation::File(PathBuf::from(trimmed)))
        }
    }
}

impl Display for FeedLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedLocation::Http(url) => write!(f, "{}", url),
            FeedLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_and_paths_are_distinguished() {
        assert_eq!(
            "https://status.example.com/items.json".parse::<FeedLocation>().unwrap(),
            FeedLocation::Http("https://status.example.com/items.json".to_string())
        );
        assert_eq!(
            "HTTP://localhost:8080/feed".parse::<FeedLocation>().unwrap(),
            FeedLocation::Http("HTTP://localhost:8080/feed".to_string())
        );
        assert_eq!(
            " script/data.json ".parse::<FeedLocation>().unwrap(),
            FeedLocation::File(PathBuf::from("script/data.json"))
        );
    }

    #[test]
    fn empty_location_is_rejected() {
        assert!(matches!(
            "  ".parse::<FeedLocation>(),
            Err(FeedError::EmptyLocation)
        ));
    }
}
