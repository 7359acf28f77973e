//! Active panel and navigation drawer state.

use crate::consts::cli_consts::viewport::COMPACT_THRESHOLD_PX;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// The dashboard panels, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Tab {
    Month,
    Users,
    Year,
    Sales,
    Weather,
}

impl Tab {
    pub fn all() -> Vec<Tab> {
        Tab::iter().collect()
    }

    /// Identifier used on the command line and in activity messages.
    pub fn id(&self) -> String {
        self.to_string().to_lowercase()
    }

    /// Position in the sidebar, starting at 0.
    pub fn index(&self) -> usize {
        Tab::iter().position(|t| t == *self).unwrap_or(0)
    }

    /// Tab bound to a 1-based number key.
    pub fn from_number(number: usize) -> Option<Tab> {
        number.checked_sub(1).and_then(|i| Tab::iter().nth(i))
    }

    pub fn next(&self) -> Tab {
        let tabs = Tab::all();
        tabs[(self.index() + 1) % tabs.len()]
    }

    pub fn previous(&self) -> Tab {
        let tabs = Tab::all();
        tabs[(self.index() + tabs.len() - 1) % tabs.len()]
    }
}

pub fn is_compact_width(width_px: u32) -> bool {
    width_px < COMPACT_THRESHOLD_PX
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active_tab: Tab,
    sidebar_open: bool,
    is_compact_viewport: bool,
}

impl NavigationState {
    pub fn new(width_px: u32) -> Self {
        Self {
            active_tab: Tab::Month,
            sidebar_open: false,
            is_compact_viewport: is_compact_width(width_px),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn is_compact_viewport(&self) -> bool {
        self.is_compact_viewport
    }

    /// Whether the sidebar occupies its own column (wide layout).
    pub fn sidebar_docked(&self) -> bool {
        !self.is_compact_viewport
    }

    /// Activate a panel. In compact mode this also closes the drawer.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        if self.is_compact_viewport {
            self.sidebar_open = false;
        }
    }

    pub fn toggle_drawer(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Track a viewport width. A wide viewport always has the drawer closed.
    pub fn observe_viewport(&mut self, width_px: u32) {
        self.is_compact_viewport = is_compact_width(width_px);
        if !self.is_compact_viewport {
            self.sidebar_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_ids_parse() {
        assert_eq!("sales".parse::<Tab>(), Ok(Tab::Sales));
        assert_eq!("Weather".parse::<Tab>(), Ok(Tab::Weather));
        assert!("reports".parse::<Tab>().is_err());
        assert_eq!(Tab::Month.id(), "month");
    }

    #[test]
    fn test_number_keys_follow_sidebar_order() {
        assert_eq!(Tab::from_number(1), Some(Tab::Month));
        assert_eq!(Tab::from_number(2), Some(Tab::Users));
        assert_eq!(Tab::from_number(5), Some(Tab::Weather));
        assert_eq!(Tab::from_number(0), None);
        assert_eq!(Tab::from_number(6), None);
        assert_eq!(Tab::Weather.next(), Tab::Month);
        assert_eq!(Tab::Month.previous(), Tab::Weather);
    }

    #[test]
    fn test_select_tab_closes_drawer_in_compact_mode() {
        let mut nav = NavigationState::new(800);
        nav.toggle_drawer();
        assert!(nav.sidebar_open());
        nav.select_tab(Tab::Sales);
        assert_eq!(nav.active_tab(), Tab::Sales);
        assert!(!nav.sidebar_open());
    }

    #[test]
    fn test_select_tab_leaves_drawer_on_wide_viewport() {
        let mut nav = NavigationState::new(1200);
        nav.toggle_drawer();
        nav.select_tab(Tab::Year);
        assert!(nav.sidebar_open());
    }

    #[test]
    fn test_becoming_wide_forces_drawer_closed() {
        let mut nav = NavigationState::new(800);
        nav.toggle_drawer();
        nav.observe_viewport(1200);
        assert!(!nav.is_compact_viewport());
        assert!(!nav.sidebar_open());
    }

    #[test]
    fn test_becoming_compact_keeps_drawer_state() {
        let mut nav = NavigationState::new(1200);
        nav.observe_viewport(800);
        assert!(nav.is_compact_viewport());
        assert!(!nav.sidebar_open());

        nav.toggle_drawer();
        nav.observe_viewport(900);
        assert!(nav.sidebar_open());
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(is_compact_width(1023));
        assert!(!is_compact_width(1024));
    }
}
