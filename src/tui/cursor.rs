use std::time::{Duration, Instant};

/// A blinking text cursor for the mirrored input line.
///
/// Purely cosmetic: it never affects keyboard state. The host loop drives
/// it with [`CursorBlink::tick`] and restarts it on text changes.
#[derive(Debug, Clone, Copy)]
pub struct CursorBlink {
    period: Duration,
    visible: bool,
    last_toggle: Instant,
}

impl CursorBlink {
    pub const DEFAULT_PERIOD: Duration = Duration::from_millis(500);

    pub fn new(now: Instant) -> Self {
        Self::with_period(now, Self::DEFAULT_PERIOD)
    }

    pub fn with_period(now: Instant, period: Duration) -> Self {
        Self {
            period,
            visible: true,
            last_toggle: now,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Toggles visibility once a full period has passed. Returns whether it
    /// toggled, i.e. whether a redraw is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_toggle) < self.period {
            return false;
        }
        self.visible = !self.visible;
        self.last_toggle = now;
        true
    }

    /// Shows the cursor and restarts the period.
    pub fn reset(&mut self, now: Instant) {
        self.visible = true;
        self.last_toggle = now;
    }

    /// Time left until the next toggle, for use as a poll timeout.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.period
            .saturating_sub(now.saturating_duration_since(self.last_toggle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_once_per_period() {
        let start = Instant::now();
        let mut blink = CursorBlink::new(start);
        assert!(blink.visible());
        assert!(!blink.tick(start + Duration::from_millis(499)));
        assert!(blink.tick(start + Duration::from_millis(500)));
        assert!(!blink.visible());
        assert!(!blink.tick(start + Duration::from_millis(700)));
        assert!(blink.tick(start + Duration::from_millis(1000)));
        assert!(blink.visible());
    }

    #[test]
    fn reset_shows_cursor_and_restarts() {
        let start = Instant::now();
        let mut blink = CursorBlink::new(start);
        blink.tick(start + Duration::from_millis(500));
        assert!(!blink.visible());

        let later = start + Duration::from_millis(600);
        blink.reset(later);
        assert!(blink.visible());
        assert_eq!(blink.until_next(later), Duration::from_millis(500));
        assert_eq!(
            blink.until_next(later + Duration::from_millis(200)),
            Duration::from_millis(300)
        );
    }
}
