//! Two-state session gate.
//!
//! There is no credential check: logging in only flips the gate. The gate is
//! owned by the top-level `App`; the dashboard can ask for a logout but never
//! touches the gate itself.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionGate {
    #[default]
    LoggedOut,
    LoggedIn,
}

impl SessionGate {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionGate::LoggedIn)
    }

    /// Returns true if this call changed the state.
    pub fn log_in(&mut self) -> bool {
        let changed = !self.is_logged_in();
        *self = SessionGate::LoggedIn;
        changed
    }

    /// Returns true if this call changed the state.
    pub fn log_out(&mut self) -> bool {
        let changed = self.is_logged_in();
        *self = SessionGate::LoggedOut;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_transitions() {
        let mut gate = SessionGate::default();
        assert!(!gate.is_logged_in());
        assert!(gate.log_in());
        assert!(!gate.log_in());
        assert!(gate.is_logged_in());
        assert!(gate.log_out());
        assert!(!gate.log_out());
        assert_eq!(gate, SessionGate::LoggedOut);
    }
}
