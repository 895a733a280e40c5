//! Reusable drawing primitives shared by the panels.

pub mod keys_bar;
pub mod line_badge;
pub mod panel_chrome;
