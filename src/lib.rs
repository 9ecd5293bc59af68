//! Interview schedule calendar utility.
//!
//! Features:
//! - Month-grid construction with a configurable week start
//! - Event binning onto calendar days with capped agenda views
//! - Upcoming-interview listing
//! - Multi-month and full-year terminal layouts

pub mod args;
pub mod calendar;
pub mod error;
pub mod events;
pub mod formatter;
pub mod store;
pub mod types;
