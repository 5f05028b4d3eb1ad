//! Visibility state for the mobile navigation drawer.
//!
//! The whole interactive surface of the site is this one flag. The `Home`
//! view owns it in a signal; the header opens it, and every path out of the
//! drawer (close button, backdrop, any nav link) closes it again.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn open(&mut self) {
        *self = MenuState::Open;
    }

    /// Idempotent: closing an already-closed menu is a no-op.
    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn open_then_close_round_trip() {
        let mut state = MenuState::default();
        state.open();
        assert!(state.is_open());
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut once = MenuState::default();
        once.close();
        let mut twice = MenuState::default();
        twice.close();
        twice.close();
        assert_eq!(once, twice);
    }

    #[test]
    fn last_call_wins_over_any_sequence() {
        // open iff the final operation in the sequence was open()
        let sequences: &[&[bool]] = &[
            &[true],
            &[false],
            &[true, true],
            &[true, false],
            &[false, true],
            &[true, false, false, true],
            &[true, true, false, false],
        ];
        for ops in sequences {
            let mut state = MenuState::default();
            for &op in *ops {
                if op {
                    state.open();
                } else {
                    state.close();
                }
            }
            assert_eq!(state.is_open(), *ops.last().unwrap(), "sequence {ops:?}");
        }
    }

    #[test]
    fn nav_activation_closes_an_open_menu() {
        // A drawer link fires close() as its click side effect.
        let mut state = MenuState::default();
        state.open();
        state.close();
        assert!(!state.is_open());
    }
}
