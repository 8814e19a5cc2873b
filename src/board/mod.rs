//! Wallboard core
//!
//! Pagination, layout, status presentation and acknowledgment logic, independent
//! of the terminal front end.

pub mod ack;
pub mod controller;
pub mod item;
pub mod layout;
pub mod pagination;
pub mod presenter;
pub mod selection;

pub use controller::{DashboardController, DisplaySurface};
pub use item::{Item, Status};
