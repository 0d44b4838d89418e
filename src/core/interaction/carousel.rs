//! Testimonials carousel state
//!
//! Time is injected as milliseconds so the state machine stays pure; the UI
//! feeds it `Date.now()` from a scoped interval.

use crate::core::spec::Autoplay;

/// Quiet period after the last interaction before autoplay resumes
pub const RESUME_COOLDOWN_MS: u64 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    index: usize,
    autoplay: Option<Autoplay>,
    /// Set by the explicit play/pause control
    stopped: bool,
    hovered: bool,
    focused: bool,
    resume_at: Option<u64>,
    next_advance_at: Option<u64>,
}

impl CarouselState {
    pub fn new(len: usize, autoplay: Option<Autoplay>) -> Self {
        Self {
            len,
            index: 0,
            autoplay,
            stopped: false,
            hovered: false,
            focused: false,
            resume_at: None,
            next_advance_at: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Autoplay is configured and there is something to rotate
    pub fn has_autoplay(&self) -> bool {
        self.autoplay.is_some() && self.len > 1
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// `"Testimonial 2 of 5"`
    pub fn position_label(&self) -> String {
        if self.len == 0 {
            return String::new();
        }
        format!("Testimonial {} of {}", self.index + 1, self.len)
    }

    pub fn next(&mut self, now: u64) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.interacted(now);
    }

    pub fn prev(&mut self, now: u64) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.interacted(now);
    }

    pub fn go_to(&mut self, index: usize, now: u64) {
        if index < self.len {
            self.index = index;
        }
        self.interacted(now);
    }

    /// Keyboard navigation. Returns `true` when the key was handled.
    pub fn handle_key(&mut self, key: &str, now: u64) -> bool {
        match key {
            "ArrowRight" => self.next(now),
            "ArrowLeft" => self.prev(now),
            "Home" => self.go_to(0, now),
            "End" => self.go_to(self.len.saturating_sub(1), now),
            _ => return false,
        }
        true
    }

    pub fn pointer_enter(&mut self) {
        if self.pauses_on_focus() {
            self.hovered = true;
        }
    }

    pub fn pointer_leave(&mut self, now: u64) {
        if self.hovered {
            self.hovered = false;
            self.interacted(now);
        }
    }

    pub fn focus_in(&mut self) {
        if self.pauses_on_focus() {
            self.focused = true;
        }
    }

    pub fn focus_out(&mut self, now: u64) {
        if self.focused {
            self.focused = false;
            self.interacted(now);
        }
    }

    /// Play/pause control
    pub fn toggle_autoplay(&mut self, now: u64) {
        self.stopped = !self.stopped;
        if !self.stopped {
            self.resume_at = None;
            self.next_advance_at = self.interval().map(|interval| now + interval);
        }
    }

    /// Whether autoplay would advance slides at `now`
    pub fn is_rotating(&self, now: u64) -> bool {
        self.has_autoplay()
            && !self.stopped
            && !self.hovered
            && !self.focused
            && self.resume_at.is_none_or(|at| now >= at)
    }

    /// Advance if autoplay is due. Returns `true` when the slide changed.
    pub fn tick(&mut self, now: u64) -> bool {
        if !self.is_rotating(now) {
            return false;
        }
        let Some(interval) = self.interval() else {
            return false;
        };
        if self.resume_at.take().is_some() {
            self.next_advance_at = Some(now + interval);
            return false;
        }
        match self.next_advance_at {
            None => {
                self.next_advance_at = Some(now + interval);
                false
            }
            Some(at) if now >= at => {
                self.index = (self.index + 1) % self.len;
                self.next_advance_at = Some(now + interval);
                true
            }
            Some(_) => false,
        }
    }

    fn interval(&self) -> Option<u64> {
        self.autoplay.map(|a| u64::from(a.interval))
    }

    fn pauses_on_focus(&self) -> bool {
        self.autoplay.is_some_and(|a| a.pause_on_focus)
    }

    fn interacted(&mut self, now: u64) {
        if self.autoplay.is_some() {
            self.resume_at = Some(now + RESUME_COOLDOWN_MS);
            self.next_advance_at = None;
        }
    }
}
