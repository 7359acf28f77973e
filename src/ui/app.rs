//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui::{poll_interval, splash_duration};
use crate::consts::cli_consts::viewport::columns_to_px;
use crate::events::Event as DashboardEvent;
use crate::session::SessionGate;
use crate::ui::dashboard::{DashboardAction, DashboardState, render_dashboard};
use crate::ui::login::render_login;
use crate::ui::splash::render_splash;
use crate::weather::{DEFAULT_LOCATION, ForecastSource, Location};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Instant;

/// Columns assumed before the terminal reports its size.
const FALLBACK_COLUMNS: u16 = 80;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub initial_location: Location,
    pub skip_splash: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool, initial_location: Location, skip_splash: bool) -> Self {
        Self {
            with_background_color,
            initial_location,
            skip_splash,
        }
    }
}

impl Default for UIConfig {
    fn default() -> Self {
        Self::new(false, DEFAULT_LOCATION, false)
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Login screen shown while the session gate is closed.
    Login,
    /// Dashboard screen with the panels, sidebar and activity log.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// Whether the user has passed the login screen.
    gate: SessionGate,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Where the Weather panel gets its forecasts.
    source: Arc<dyn ForecastSource>,

    /// Display options handed to every new dashboard.
    ui_config: UIConfig,

    /// Last known terminal width in columns.
    viewport_columns: u16,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(source: Arc<dyn ForecastSource>, ui_config: UIConfig) -> Self {
        let current_screen = if ui_config.skip_splash {
            Screen::Login
        } else {
            Screen::Splash
        };
        Self {
            gate: SessionGate::default(),
            current_screen,
            source,
            ui_config,
            viewport_columns: FALLBACK_COLUMNS,
        }
    }

    #[cfg(test)]
    pub fn screen(&self) -> &Screen {
        &self.current_screen
    }

    #[cfg(test)]
    pub fn is_logged_in(&self) -> bool {
        self.gate.is_logged_in()
    }

    /// Opens the session gate and builds a fresh dashboard.
    pub fn login(&mut self) {
        if !self.gate.log_in() {
            return;
        }
        let mut state = DashboardState::new(
            Arc::clone(&self.source),
            &self.ui_config,
            columns_to_px(self.viewport_columns),
        );
        state.add_event(DashboardEvent::session("Logged in"));
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    /// Closes the session gate. The dashboard and any unsaved edits are dropped.
    pub fn logout(&mut self) {
        if self.gate.log_out() {
            self.current_screen = Screen::Login;
        }
    }

    /// Tracks a new terminal width.
    pub fn resize(&mut self, columns: u16) {
        self.viewport_columns = columns;
        if let Screen::Dashboard(state) = &mut self.current_screen {
            state.observe_viewport(columns);
        }
    }

    /// Per-frame update of the active screen.
    pub fn update(&mut self) {
        if let Screen::Dashboard(state) = &mut self.current_screen {
            state.update();
        }
    }

    /// Routes a key press to the active screen. Returns `true` when the
    /// application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Skip events that are not KeyEventKind::Press
        if key.kind == KeyEventKind::Release {
            return false;
        }

        let action = match &mut self.current_screen {
            Screen::Splash => {
                if is_exit_key(&key) {
                    return true;
                }
                // Any other key skips the splash screen
                self.current_screen = Screen::Login;
                return false;
            }
            Screen::Login => match key.code {
                KeyCode::Enter => {
                    self.login();
                    return false;
                }
                _ => return is_exit_key(&key),
            },
            Screen::Dashboard(state) => state.handle_key(key),
        };

        match action {
            DashboardAction::None => false,
            DashboardAction::Logout => {
                self.logout();
                false
            }
            DashboardAction::Quit => true,
        }
    }
}

fn is_exit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    app.resize(terminal.size()?.width);

    // UI event loop
    loop {
        // Apply finished fetches and queued activity before drawing
        app.update();
        terminal.draw(|f| render(f, &app))?;

        // Handle splash-to-login transition
        if matches!(app.current_screen, Screen::Splash) && splash_start.elapsed() >= splash_duration()
        {
            app.current_screen = Screen::Login;
            continue;
        }

        if event::poll(poll_interval())? {
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Resize(columns, _) => app.resize(columns),
                _ => {}
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match &app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Login => render_login(f, app.ui_config.with_background_color),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
