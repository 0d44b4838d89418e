//! Site header: mobile menu and scroll-dependent transparency

/// Scroll offset after which a transparent header becomes solid
pub const SCROLL_THRESHOLD_PX: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl HeaderState {
    /// Returns `true` when the scrolled flag flipped
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > SCROLL_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        let mut state = HeaderState::default();
        assert!(!state.on_scroll(4.0));
        assert!(state.on_scroll(120.0));
        assert!(state.scrolled);
        assert!(!state.on_scroll(200.0));
        assert!(state.on_scroll(0.0));
        assert!(!state.scrolled);
    }

    #[test]
    fn test_menu_toggle() {
        let mut state = HeaderState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.close_menu();
        assert!(!state.menu_open);
    }
}
