//! App — the board's event loop.
//!
//! Architecture:
//! - `App` owns all panels and `BoardState` (shared read-only data for panels).
//! - A `tokio::mpsc` channel carries `BoardMessage` events in from background
//!   tasks: terminal input and completed feed fetches.
//! - A second channel carries ticks from the [`TimerSet`]; opening the
//!   settings overlay stops that set and closing it starts a fresh one.
//! - Panels return `Vec<Action>`; App dispatches each Action.

use std::io;

use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use board_proto::client::FeedClient;
use board_proto::config::Config;
use board_proto::feeds::{Forecast, ScheduleFeed, StatusEntry};

use crate::{
    action::{Action, ColorTarget, PanelId},
    app_state::BoardState,
    component::Component,
    components::{
        clock_panel::ClockPanel, news_ticker::NewsTicker, schedule_board::ScheduleBoard,
        settings_overlay::SettingsOverlay, status_panel::StatusPanel,
        weather_panel::WeatherPanel,
    },
    theme::{C_BG, PAINT_BG, PAINT_FG},
    timers::{TimerAction, TimerSet},
    widgets::keys_bar::draw_keys_bar,
};

// ── Internal event bus ────────────────────────────────────────────────────────

enum BoardMessage {
    Event(Event),
    /// Normalized status entries — already never empty.
    StatusFetched(Vec<StatusEntry>),
    /// Status fetch or parse failed; the panel substitutes the error entry.
    StatusFailed,
    WeatherFetched(Vec<Forecast>),
    NewsFetched(Vec<String>),
    ScheduleFetched(ScheduleFeed),
}

fn cycle_index(current: usize, len: usize, step: i8) -> usize {
    (current as i64 + step as i64).rem_euclid(len as i64) as usize
}

// ── App ───────────────────────────────────────────────────────────────────────

pub struct App {
    // ── Shared state (passed read-only to panels) ────────────────────────────
    pub state: BoardState,

    // ── Panels ───────────────────────────────────────────────────────────────
    clock: ClockPanel,
    status: StatusPanel,
    weather: WeatherPanel,
    news: NewsTicker,
    schedule: ScheduleBoard,
    settings_overlay: SettingsOverlay,

    // ── Session bookkeeping ──────────────────────────────────────────────────
    timers: TimerSet,
    timer_rx: Option<mpsc::Receiver<TimerAction>>,
    client: FeedClient,
    /// Sender used by fetch tasks to report results; set once in `run`.
    feed_tx: Option<mpsc::Sender<BoardMessage>>,

    /// Whether to quit on next iteration.
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let (timer_tx, timer_rx) = mpsc::channel(32);
        Self {
            state: BoardState::new(config.display.locale.clone()),
            clock: ClockPanel::new(),
            status: StatusPanel::new(),
            weather: WeatherPanel::new(),
            news: NewsTicker::new(),
            schedule: ScheduleBoard::new(),
            settings_overlay: SettingsOverlay::new(),
            timers: TimerSet::new(timer_tx),
            timer_rx: Some(timer_rx),
            client: FeedClient::new(&config.server.base_url),
            feed_tx: None,
            should_quit: false,
        }
    }

    // ── Main run loop ─────────────────────────────────────────────────────────

    pub async fn run(mut self) -> anyhow::Result<()> {
        debug!("run(): enabling raw mode");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        debug!("run(): terminal created, size={:?}", terminal.size());

        let (tx, mut rx) = mpsc::channel::<BoardMessage>(1024);
        self.feed_tx = Some(tx.clone());
        let mut timer_rx = self
            .timer_rx
            .take()
            .ok_or_else(|| anyhow::anyhow!("timer channel already taken"))?;

        // ── Background task: keyboard events ──────────────────────────────────
        let event_tx = tx.clone();
        tokio::task::spawn_blocking(move || loop {
            match event::read() {
                Ok(ev) => {
                    if event_tx.blocking_send(BoardMessage::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });

        // Fetch timers tick immediately, so this also triggers the first load
        // of all four feeds.
        self.timers.start();

        // ── Main loop ─────────────────────────────────────────────────────────
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|f| self.draw(f))?;
            }
            needs_redraw = false;

            if self.should_quit {
                break;
            }

            tokio::select! {
                Some(msg) = rx.recv() => {
                    needs_redraw = self.handle_message(msg);
                }
                Some(tick) = timer_rx.recv() => {
                    needs_redraw = self.on_timer(tick);
                }
            }

            if self.should_quit {
                break;
            }
        }

        // ── Teardown ──────────────────────────────────────────────────────────
        self.timers.stop_all();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    // ── Message handler ───────────────────────────────────────────────────────

    /// Returns `true` if the message requires a redraw.
    fn handle_message(&mut self, msg: BoardMessage) -> bool {
        match msg {
            BoardMessage::Event(ev) => match ev {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Release {
                        return false;
                    }
                    let actions = self.handle_key(key);
                    for a in actions {
                        self.dispatch(a);
                    }
                    true
                }
                Event::Resize(w, h) => {
                    self.dispatch(Action::Resize(w, h));
                    true
                }
                _ => false,
            },
            BoardMessage::StatusFetched(entries) => {
                self.state.set_status(entries);
                true
            }
            BoardMessage::StatusFailed => {
                self.state.set_status_failed();
                true
            }
            BoardMessage::WeatherFetched(days) => {
                self.state.set_forecast(days);
                true
            }
            BoardMessage::NewsFetched(headlines) => {
                self.state.set_headlines(headlines);
                true
            }
            BoardMessage::ScheduleFetched(schedule) => {
                self.state.set_schedule(schedule);
                true
            }
        }
    }

    /// A tick can land between opening the overlay and the abort taking
    /// effect; drop it so a frozen board stays frozen. Completed fetches are
    /// not dropped — they arrive as `BoardMessage` and still apply.
    fn on_timer(&mut self, tick: TimerAction) -> bool {
        if self.state.settings_open {
            return false;
        }
        match tick {
            TimerAction::ClockTick => {
                self.state.tick_clock();
                true
            }
            TimerAction::RotateStatus => {
                self.state.rotate_status();
                true
            }
            TimerAction::RotateNews => {
                self.state.rotate_news();
                true
            }
            TimerAction::FetchStatus
            | TimerAction::FetchWeather
            | TimerAction::FetchNews
            | TimerAction::FetchSchedule => {
                self.spawn_fetch(tick);
                false
            }
        }
    }

    /// Fire one feed fetch in the background. Only the status feed reports
    /// its failure to the panel; the other three log and keep the last good
    /// data on screen.
    fn spawn_fetch(&self, tick: TimerAction) {
        let Some(tx) = self.feed_tx.clone() else {
            return;
        };
        let client = self.client.clone();
        tokio::spawn(async move {
            let msg = match tick {
                TimerAction::FetchStatus => match client.fetch_status().await {
                    Ok(feed) => Some(BoardMessage::StatusFetched(feed.into_entries())),
                    Err(err) => {
                        warn!("status fetch failed: {err:#}");
                        Some(BoardMessage::StatusFailed)
                    }
                },
                TimerAction::FetchWeather => match client.fetch_weather().await {
                    Ok(feed) => Some(BoardMessage::WeatherFetched(feed.into_days())),
                    Err(err) => {
                        warn!("weather fetch failed: {err:#}");
                        None
                    }
                },
                TimerAction::FetchNews => match client.fetch_news().await {
                    Ok(feed) => Some(BoardMessage::NewsFetched(feed.news)),
                    Err(err) => {
                        warn!("news fetch failed: {err:#}");
                        None
                    }
                },
                TimerAction::FetchSchedule => match client.fetch_schedule().await {
                    Ok(feed) => Some(BoardMessage::ScheduleFetched(feed)),
                    Err(err) => {
                        warn!("schedule fetch failed: {err:#}");
                        None
                    }
                },
                _ => None,
            };
            if let Some(msg) = msg {
                let _ = tx.send(msg).await;
            }
        });
    }

    // ── Key handling ──────────────────────────────────────────────────────────

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Action> {
        // The open overlay owns the keyboard.
        if self.state.settings_open {
            return self.settings_overlay.handle_key(key, &self.state);
        }
        match key.code {
            KeyCode::Char('q') => vec![Action::Quit],
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                vec![Action::Quit]
            }
            KeyCode::Char('s') => vec![Action::OpenSettings],
            KeyCode::Char('[') => vec![Action::AdjustScheduleShare(-5)],
            KeyCode::Char(']') => vec![Action::AdjustScheduleShare(5)],
            _ => vec![],
        }
    }

    // ── Action dispatch ───────────────────────────────────────────────────────

    fn dispatch(&mut self, action: Action) {
        // Broadcast to all panels first, then handle at the app level.
        let secondary: Vec<Action> = {
            let s = &self.state;
            let mut out = Vec::new();
            out.extend(self.clock.on_action(&action, s));
            out.extend(self.status.on_action(&action, s));
            out.extend(self.weather.on_action(&action, s));
            out.extend(self.news.on_action(&action, s));
            out.extend(self.schedule.on_action(&action, s));
            out.extend(self.settings_overlay.on_action(&action, s));
            out
        };

        self.apply_action(action);

        // Dispatch any secondary actions (depth-limited to 1 level)
        for a in secondary {
            self.apply_action(a);
        }
    }

    fn apply_action(&mut self, action: Action) {
        debug!("apply_action: {:?}", action);
        match action {
            Action::OpenSettings => {
                self.state.settings_open = true;
                self.timers.stop_all();
            }
            Action::CloseSettings => {
                self.state.settings_open = false;
                self.timers.start();
            }
            Action::TogglePanel(panel) => self.state.settings.toggle(panel),
            Action::CyclePanelColor(panel, target, step) => {
                if let Some(paint) = self.state.settings.paint_mut(panel) {
                    match target {
                        ColorTarget::Background => {
                            paint.bg = cycle_index(paint.bg, PAINT_BG.len(), step);
                        }
                        ColorTarget::Text => {
                            paint.fg = cycle_index(paint.fg, PAINT_FG.len(), step);
                        }
                    }
                }
            }
            Action::SetZoom(percent) => self.state.settings.set_zoom(percent),
            Action::SetFontScale(percent) => self.state.settings.set_font_scale(percent),
            Action::CycleBorderPreset => {
                self.state.settings.border_preset = self.state.settings.border_preset.next();
            }
            Action::ToggleResizable => {
                self.state.settings.resizable = !self.state.settings.resizable;
            }
            Action::SetRouteVisible(label, visible) => {
                self.state.route_display.set_visible(&label, visible);
            }
            Action::SetRouteCount(label, count) => {
                self.state.route_display.set_count(&label, count);
            }
            Action::AdjustScheduleShare(delta) => {
                if self.state.settings.resizable {
                    self.state.settings.adjust_schedule_share(delta);
                }
            }
            Action::Quit => self.should_quit = true,
            Action::Resize(..) => {}
        }
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(C_BG)), area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        self.clock.draw(frame, rows[0], &self.state);
        self.draw_body(frame, rows[1]);
        if self.state.settings.show(PanelId::News) {
            self.news.draw(frame, rows[2], &self.state);
        }
        draw_keys_bar(
            frame,
            rows[3],
            self.state.settings_open,
            self.state.settings.resizable,
        );

        // Overlay last, over everything.
        self.settings_overlay.draw(frame, area, &self.state);
    }

    fn draw_body(&mut self, frame: &mut Frame, area: Rect) {
        let show_status = self.state.settings.show(PanelId::Status);
        let show_weather = self.state.settings.show(PanelId::Weather);
        let show_schedule = self.state.settings.show(PanelId::Schedule);
        let side_width = self.state.settings.side_column_width(area.width);

        let (side, main) = if show_schedule && (show_status || show_weather) {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(side_width), Constraint::Min(0)])
                .split(area);
            (Some(cols[0]), Some(cols[1]))
        } else if show_schedule {
            (None, Some(area))
        } else if show_status || show_weather {
            (Some(area), None)
        } else {
            (None, None)
        };

        if let Some(side) = side {
            match (show_status, show_weather) {
                (true, true) => {
                    let halves = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                        .split(side);
                    self.status.draw(frame, halves[0], &self.state);
                    self.weather.draw(frame, halves[1], &self.state);
                }
                (true, false) => self.status.draw(frame, side, &self.state),
                (false, true) => self.weather.draw(frame, side, &self.state),
                (false, false) => {}
            }
        }
        if let Some(main) = main {
            self.schedule.draw(frame, main, &self.state);
        }
    }
}
