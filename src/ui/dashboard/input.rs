//! Dashboard key handling
//!
//! Maps key presses to dashboard operations. While the pipeline form is open
//! it captures the keyboard, so quit and navigation keys only work once the
//! form is saved or cancelled.

use super::state::DashboardState;
use crate::navigation::Tab;
use crossterm::event::{KeyCode, KeyEvent};

/// What the app should do after the dashboard handled a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    Logout,
    Quit,
}

/// Characters a number field accepts.
fn is_number_input(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | 'E')
}

impl DashboardState {
    pub fn handle_key(&mut self, key: KeyEvent) -> DashboardAction {
        if self.pipeline.is_editing() {
            self.handle_form_key(key);
            return DashboardAction::None;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return DashboardAction::Quit,
            KeyCode::Char('l') | KeyCode::Char('L') => return DashboardAction::Logout,
            KeyCode::Char('m') | KeyCode::Char('M') => self.toggle_drawer(),
            KeyCode::Tab => self.select_tab(self.navigation.active_tab().next()),
            KeyCode::BackTab => self.select_tab(self.navigation.active_tab().previous()),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(tab) = c.to_digit(10).and_then(|n| Tab::from_number(n as usize)) {
                    self.select_tab(tab);
                }
            }
            _ => self.handle_panel_key(key),
        }
        DashboardAction::None
    }

    /// Keys that only mean something on the active panel.
    fn handle_panel_key(&mut self, key: KeyEvent) {
        match (self.navigation.active_tab(), key.code) {
            (Tab::Weather, KeyCode::Right | KeyCode::Down) => {
                self.select_location(self.weather.selected().next());
            }
            (Tab::Weather, KeyCode::Left | KeyCode::Up) => {
                self.select_location(self.weather.selected().previous());
            }
            (Tab::Weather, KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter) => {
                self.refresh_weather();
            }
            (Tab::Sales, KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter) => {
                self.begin_pipeline_edit();
            }
            (Tab::Users, KeyCode::Down) => self.scroll_users(1),
            (Tab::Users, KeyCode::Up) => self.scroll_users(-1),
            (Tab::Users, KeyCode::PageDown) => self.scroll_users(10),
            (Tab::Users, KeyCode::PageUp) => self.scroll_users(-10),
            (Tab::Users, KeyCode::Home) => self.users_offset = 0,
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let focus = self.pipeline_form.focus;
        match key.code {
            KeyCode::Esc => self.cancel_pipeline_edit(),
            KeyCode::Enter => self.save_pipeline(),
            KeyCode::Tab | KeyCode::Down => self.focus_pipeline_field(focus.next()),
            KeyCode::BackTab | KeyCode::Up => self.focus_pipeline_field(focus.previous()),
            KeyCode::Backspace => self.pop_pipeline_char(),
            KeyCode::Char(c) if is_number_input(c) => self.push_pipeline_char(c),
            _ => {}
        }
    }
}
