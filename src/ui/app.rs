//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::audio::TerminalBell;
use crate::board::DisplaySurface;
use crate::consts::wallboard_consts::FEED_QUEUE_SIZE;
use crate::feed::FeedSource;
use crate::runtime::{FeedUpdate, spawn_fetch};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::input::{KeyAction, route_click, route_key};
use crate::ui::splash::render_splash;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, SetTitle};
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub feed: String,
}

impl UIConfig {
    pub fn new(with_background_color: bool, feed: String) -> Self {
        Self {
            with_background_color,
            feed,
        }
    }
}

/// The terminal as a display surface.
#[derive(Debug, Default)]
pub struct TerminalSurface;

impl DisplaySurface for TerminalSurface {
    fn request_fullscreen(&mut self) {
        // Already on the alternate screen in normal operation; this only matters
        // when the terminal dropped it. Failures are ignored.
        if let Err(e) = execute!(
            std::io::stdout(),
            EnterAlternateScreen,
            SetTitle("Status Wallboard")
        ) {
            log::debug!("fullscreen request failed: {}", e);
        }
    }
}

/// Application state
pub struct App {
    /// When the splash screen stops being shown, if it still is.
    splash_until: Option<Instant>,

    /// Dashboard state, built up while the splash is visible.
    dashboard: Box<DashboardState>,

    /// Where items are fetched from.
    source: Arc<dyn FeedSource>,

    /// Sends finished fetches back to the loop.
    update_sender: mpsc::Sender<FeedUpdate>,

    /// Receives finished fetches.
    update_receiver: mpsc::Receiver<FeedUpdate>,

    audio: TerminalBell,
    surface: TerminalSurface,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(source: Arc<dyn FeedSource>, ui_config: UIConfig) -> Self {
        let (update_sender, update_receiver) = mpsc::channel(FEED_QUEUE_SIZE);
        Self {
            splash_until: Some(Instant::now() + Duration::from_secs(2)),
            dashboard: Box::new(DashboardState::new(Instant::now(), ui_config)),
            source,
            update_sender,
            update_receiver,
            audio: TerminalBell,
            surface: TerminalSurface,
        }
    }

    /// Issues a new fetch; any fetch still in flight becomes stale.
    fn refresh(&mut self) {
        let generation = self.dashboard.begin_refresh();
        spawn_fetch(self.source.clone(), generation, self.update_sender.clone());
    }

    /// Handles a key press. Returns `true` when the application should exit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match route_key(
            &mut self.dashboard.controller,
            key.code,
            &mut self.surface,
            &self.audio,
        ) {
            KeyAction::Quit => true,
            KeyAction::Refresh => {
                self.refresh();
                false
            }
            KeyAction::None => false,
        }
    }

    /// Routes a left click to the cell under the pointer.
    fn handle_mouse(&mut self, mouse: MouseEvent, viewport: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        route_click(
            &mut self.dashboard.controller,
            viewport,
            mouse.column,
            mouse.row,
            &self.audio,
        );
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    app.refresh();

    // UI event loop
    loop {
        // Apply finished fetches in arrival order
        while let Ok(update) = app.update_receiver.try_recv() {
            app.dashboard.apply_feed_update(update);
        }
        app.dashboard.update();

        if app
            .splash_until
            .is_some_and(|until| Instant::now() >= until)
        {
            app.splash_until = None;
        }
        terminal.draw(|f| render(f, &app))?;

        // Poll for input, yielding to fetch tasks in between
        if !event::poll(Duration::from_millis(100))? {
            tokio::task::yield_now().await;
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if app.splash_until.take().is_some()
                    && !matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
                {
                    // Any key skips the splash screen
                    continue;
                }
                if app.handle_key(key) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) if app.splash_until.is_none() => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    if app.splash_until.is_some() {
        render_splash(f);
    } else {
        render_dashboard(f, &app.dashboard);
    }
}
