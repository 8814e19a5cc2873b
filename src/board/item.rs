//! Monitored items as delivered by the feed.

use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Health status reported for an item.
///
/// The feed only documents `Healthy`, `Unhealthy` and `Error`. Anything else is
/// kept verbatim as `Unknown` so one odd entry does not discard the whole feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Status {
    Healthy,
    Unhealthy,
    Error,
    Unknown(String),
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Healthy" => Status::Healthy,
            "Unhealthy" => Status::Unhealthy,
            "Error" => Status::Error,
            _ => Status::Unknown(raw),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Healthy => write!(f, "Healthy"),
            Status::Unhealthy => write!(f, "Unhealthy"),
            Status::Error => write!(f, "Error"),
            Status::Unknown(raw) => write!(f, "Unknown({})", raw),
        }
    }
}

/// One entry of the flat feed list. Items carry no identifier; their position
/// in the list is their identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Error", default)]
    pub error_detail: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, status: Status) -> Self {
        Self {
            name: name.into(),
            status,
            error_detail: None,
        }
    }

    pub fn with_error_detail(mut self, detail: impl Into<String>) -> Self {
        self.error_detail = Some(detail.into());
        self
    }
}
