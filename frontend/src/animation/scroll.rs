use crate::animation::tween::ScrollTrigger;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateEvent {
    /// Trigger crossed the start line going down the page.
    Enter,
    /// Trigger went back below the start line.
    LeaveBack,
}

/// Edge detector for a scroll trigger.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollGate {
    start: f64,
    reversible: bool,
    active: bool,
}

impl ScrollGate {
    pub fn new(trigger: &ScrollTrigger) -> Self {
        Self {
            start: trigger.start,
            reversible: trigger.reversible,
            active: false,
        }
    }

    /// `top` is the trigger's top edge relative to the viewport.
    pub fn update(&mut self, top: f64, viewport_height: f64) -> Option<GateEvent> {
        let past_start = top <= viewport_height * self.start;

        match (self.active, past_start) {
            (false, true) => {
                self.active = true;
                Some(GateEvent::Enter)
            }
            (true, false) if self.reversible => {
                self.active = false;
                Some(GateEvent::LeaveBack)
            }
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarState {
    Shown,
    Hidden,
}

/// Hides the navbar while scrolling down past the threshold, shows it otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct NavbarAutoHide {
    threshold: f64,
    last_scroll: f64,
}

impl Default for NavbarAutoHide {
    fn default() -> Self {
        Self::new(config::NAVBAR_HIDE_THRESHOLD)
    }
}

impl NavbarAutoHide {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            last_scroll: 0.0,
        }
    }

    pub fn update(&mut self, scroll: f64) -> NavbarState {
        let state = if scroll > self.last_scroll && scroll > self.threshold {
            NavbarState::Hidden
        } else {
            NavbarState::Shown
        };
        self.last_scroll = scroll;
        state
    }
}
