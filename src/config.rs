use std::time::Duration;

/// Timing and geometry knobs for the page controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    /// Added to `scrollY` to get the viewport reference point, in CSS pixels.
    /// Roughly the height of the fixed navigation bar plus some slack.
    pub scroll_offset: f64,
    /// Delay between mount and attaching the reveal observer, so the tagged
    /// elements exist in the rendered tree.
    pub reveal_attach_delay: Duration,
    /// Fraction of an element that must be visible before it counts as seen.
    pub reveal_threshold: f64,
    /// How long the "message sent" confirmation stays up before the form clears.
    pub submission_window: Duration,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            scroll_offset: 100.0,
            reveal_attach_delay: Duration::from_millis(100),
            reveal_threshold: 0.1,
            submission_window: Duration::from_secs(3),
        }
    }
}
