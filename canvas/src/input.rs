//! Input model: pointer buttons, wheel deltas, and the drag state machine.
//!
//! The view has a single gesture: press anywhere and drag to pan. `InputState`
//! tracks it between pointer-down and pointer-up so each move can be turned
//! into an incremental camera offset.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// Which pointer button went down or up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Middle,
    /// Reserved for the host's context menu.
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code. Back/forward buttons map to `None`.
    #[must_use]
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }

    /// Whether pressing this button starts a pan.
    #[must_use]
    pub fn pans(self) -> bool {
        !matches!(self, Self::Secondary)
    }
}

/// One wheel event, in the DOM's pixel deltas. Positive `dy` scrolls down.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    pub dx: f64,
    pub dy: f64,
}

/// Drag state between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    #[default]
    Idle,
    Panning {
        /// Pointer position at the previous event, in screen pixels.
        last_screen: Point,
    },
}

impl InputState {
    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// The previous pointer position while panning.
    #[must_use]
    pub fn last_screen(&self) -> Option<Point> {
        match *self {
            Self::Panning { last_screen } => Some(last_screen),
            Self::Idle => None,
        }
    }
}
