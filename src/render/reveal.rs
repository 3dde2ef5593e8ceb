//! Once-only entrance animation.
//!
//! A tracker latches the first time its section is seen in the viewport and
//! never re-arms, so scrolling away and back does not replay the transition.
//! Heading and content blocks animate independently: the content block
//! starts `CONTENT_DELAY` after the heading.

/// Transition length in seconds
pub const DURATION: f64 = 0.6;
/// Content block lag behind the heading, in seconds
pub const CONTENT_DELAY: f64 = 0.1;
/// Downward offset of the hidden resting state, in pixels
pub const OFFSET: f32 = 24.0;
/// Slack for frame timestamps that land on the end time after rounding
const END_EPSILON: f64 = 1e-9;

/// Visual state of one animated block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStyle {
    pub opacity: f32,
    /// Downward shift in pixels
    pub offset_y: f32,
}

impl BlockStyle {
    pub const HIDDEN: BlockStyle = BlockStyle {
        opacity: 0.0,
        offset_y: OFFSET,
    };
    pub const SHOWN: BlockStyle = BlockStyle {
        opacity: 1.0,
        offset_y: 0.0,
    };

    fn at(t: f32) -> Self {
        let e = ease_out_cubic(t);
        Self {
            opacity: e,
            offset_y: OFFSET * (1.0 - e),
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    /// Time of the first viewport entry
    triggered_at: Option<f64>,
    /// How many times the trigger fired (0 or 1)
    fire_count: u32,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current visibility. Returns true only on the call that fires
    /// the transition.
    pub fn observe(&mut self, in_view: bool, now: f64) -> bool {
        if in_view && self.triggered_at.is_none() {
            self.triggered_at = Some(now);
            self.fire_count += 1;
            return true;
        }
        false
    }

    pub fn has_fired(&self) -> bool {
        self.triggered_at.is_some()
    }

    pub fn fire_count(&self) -> u32 {
        self.fire_count
    }

    pub fn heading(&self, now: f64) -> BlockStyle {
        self.block(now, 0.0)
    }

    pub fn content(&self, now: f64) -> BlockStyle {
        self.block(now, CONTENT_DELAY)
    }

    fn block(&self, now: f64, delay: f64) -> BlockStyle {
        match self.triggered_at {
            None => BlockStyle::HIDDEN,
            Some(start) => BlockStyle::at(((now - start - delay) / DURATION) as f32),
        }
    }

    /// True while either block is still moving.
    pub fn is_animating(&self, now: f64) -> bool {
        match self.triggered_at {
            None => false,
            Some(start) => now - start < DURATION + CONTENT_DELAY - END_EPSILON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_seen() {
        let mut r = RevealTracker::new();
        assert!(!r.observe(false, 0.0));
        assert_eq!(r.heading(5.0), BlockStyle::HIDDEN);
        assert_eq!(r.content(5.0), BlockStyle::HIDDEN);
        assert!(!r.is_animating(5.0));
    }

    #[test]
    fn fires_at_most_once() {
        let mut r = RevealTracker::new();
        assert!(r.observe(true, 1.0));
        // scroll out, then back in
        assert!(!r.observe(false, 2.0));
        assert!(!r.observe(true, 3.0));
        assert!(!r.observe(true, 4.0));
        assert_eq!(r.fire_count(), 1);
        // Still anchored to the first entry.
        assert_eq!(r.heading(1.0 + DURATION), BlockStyle::SHOWN);
    }

    #[test]
    fn reaches_resting_state() {
        let mut r = RevealTracker::new();
        r.observe(true, 10.0);
        let mid = r.heading(10.0 + DURATION / 2.0);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.offset_y > 0.0 && mid.offset_y < OFFSET);
        assert_eq!(r.heading(10.0 + DURATION), BlockStyle::SHOWN);
        assert_eq!(r.content(10.0 + DURATION + CONTENT_DELAY), BlockStyle::SHOWN);
        assert!(!r.is_animating(10.0 + DURATION + CONTENT_DELAY));
        assert!(!r.is_animating(10.7));
        assert!(!r.is_animating(11.0));
        assert!(r.is_animating(10.69));
    }

    #[test]
    fn content_lags_heading() {
        let mut r = RevealTracker::new();
        r.observe(true, 0.0);
        let t = 0.2;
        assert!(r.content(t).opacity < r.heading(t).opacity);
        assert_eq!(r.content(0.05), BlockStyle::HIDDEN);
    }

    #[test]
    fn trackers_are_independent() {
        let mut a = RevealTracker::new();
        let b = RevealTracker::new();
        a.observe(true, 0.0);
        assert!(a.has_fired());
        assert!(!b.has_fired());
    }
}
