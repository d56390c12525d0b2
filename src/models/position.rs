use serde::Serialize;

/// Vertical placement of an event inside one day column, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub top: f64,
    pub height: f64,
    /// Set when the end minute was not after the start minute and the
    /// event was stretched to the bottom of the column instead.
    pub truncated: bool,
}

impl Position {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}
