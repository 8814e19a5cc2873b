//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod footer;
pub mod grid;
pub mod header;
pub mod logs;
pub mod prompt;
pub mod selection;
