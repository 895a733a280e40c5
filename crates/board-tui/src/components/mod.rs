//! Board panels. Each implements [`crate::component::Component`] and renders
//! one region of the layout from the shared [`crate::app_state::BoardState`].

pub mod clock_panel;
pub mod news_ticker;
pub mod schedule_board;
pub mod settings_overlay;
pub mod status_panel;
pub mod weather_panel;
