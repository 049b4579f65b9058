//! Text progress bars.

use std::fmt;

/// Default bar width in cells.
pub const BAR_WIDTH: usize = 20;

/// A horizontal bar filled proportionally to a percentage.
///
/// Values outside `0..=100` are clamped.
#[derive(Debug, Clone, Copy)]
pub struct ProgressBar {
    percent: f64,
    width: usize,
}

impl ProgressBar {
    pub fn new(percent: f64) -> Self {
        Self {
            percent,
            width: BAR_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    fn filled_cells(&self) -> usize {
        let percent = if self.percent.is_finite() {
            self.percent.clamp(0.0, 100.0)
        } else {
            0.0
        };
        ((percent / 100.0) * self.width as f64).round() as usize
    }
}

impl fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = self.filled_cells().min(self.width);
        write!(
            f,
            "{}{}",
            "█".repeat(filled),
            "░".repeat(self.width - filled)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_fill() {
        assert_eq!(ProgressBar::new(0.0).with_width(4).to_string(), "░░░░");
        assert_eq!(ProgressBar::new(50.0).with_width(4).to_string(), "██░░");
        assert_eq!(ProgressBar::new(100.0).with_width(4).to_string(), "████");
    }

    #[test]
    fn test_bar_clamps() {
        assert_eq!(ProgressBar::new(250.0).with_width(2).to_string(), "██");
        assert_eq!(ProgressBar::new(-5.0).with_width(2).to_string(), "░░");
        assert_eq!(ProgressBar::new(f64::NAN).with_width(2).to_string(), "░░");
    }
}
