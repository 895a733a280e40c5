//! Shared data layer for the station information panel.
//!
//! Everything the display needs that is not rendering lives here: the wire
//! contracts for the four board feeds, their normalizers, the line-icon
//! registry, the HTTP feed client, and configuration.

pub mod client;
pub mod config;
pub mod feeds;
pub mod icons;
pub mod platform;
