//! Component trait — the interface every board panel implements.
//!
//! Design principles:
//! - Components are self-contained: they own their presentation state and
//!   render themselves from `BoardState`.
//! - Components receive `BoardState` (read-only) for data they don't own.
//! - Components produce `Vec<Action>` — they never mutate shared state
//!   directly. The App event-loop dispatches those actions.

use ratatui::crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::action::{Action, PanelId};
use crate::app_state::BoardState;

/// The trait every panel implements.
pub trait Component {
    /// Which panel is this?
    fn id(&self) -> PanelId;

    /// Handle a key event. Returns actions to be dispatched.
    /// Only the settings overlay receives keys; display panels keep the
    /// default no-op.
    fn handle_key(&mut self, _key: KeyEvent, _state: &BoardState) -> Vec<Action> {
        Vec::new()
    }

    /// Receive an action dispatched by the App.
    /// Components can react to actions even when not visible.
    fn on_action(&mut self, _action: &Action, _state: &BoardState) -> Vec<Action> {
        Vec::new()
    }

    /// Render the component into `area`.
    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &BoardState);
}
