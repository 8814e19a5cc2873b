//! Event System
//!
//! Types and implementations for wallboard activity events and logging

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// Where an activity event originated.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// The data feed loader.
    Feed,
    /// Selection cascades and grid rendering.
    Controller,
    /// Operator acknowledgments on grid cells.
    Operator,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Alarm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn feed_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Feed, msg, event_type, log_level)
    }

    pub fn controller_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Controller, msg, event_type, log_level)
    }

    pub fn operator(msg: String, event_type: EventType) -> Self {
        Self::new(Source::Operator, msg, event_type, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
