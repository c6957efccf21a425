//! Full-screen environment slideshow state.
//!
//! Index/direction state for the hero slider: wrap-around manual
//! navigation, dot navigation, timed auto-advance, and the image preload
//! tracker. Preloading is an optimization, never a gate: the slideshow is
//! displayable before any image settles, and a failed load is treated as
//! settled so nothing ever hangs on a missing asset.

use serde::Serialize;
use tracing::warn;

use crate::timing::Ticker;

/// Auto-advance period of the slideshow.
pub const AUTO_ADVANCE_MS: u64 = 8_000;

// ============================================================================
// Slide
// ============================================================================

/// One slideshow entry: an image source and its two-part label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Image path as served by the frontend.
    pub source: String,
    pub title: String,
    pub caption: String,
}

impl Slide {
    /// Builds a slide from the `"Title - Caption"` label form the slide
    /// catalog uses. A label without the separator becomes a bare title.
    pub fn from_label(source: impl Into<String>, label: &str) -> Self {
        let (title, caption) = label.split_once(" - ").unwrap_or((label, ""));
        Self {
            source: source.into(),
            title: title.to_string(),
            caption: caption.to_string(),
        }
    }
}

/// The built-in slide catalog.
pub fn default_slides() -> Vec<Slide> {
    [
        (
            "/images/22.jpg",
            "Night Mode - Enhanced clarity in low light environments",
        ),
        (
            "/images/55.jpg",
            "Urban Navigation - Seamless city exploration with AR guidance",
        ),
        (
            "/images/6.gif",
            "Outdoor Experiences - Adaptive brightness for any lighting condition",
        ),
        (
            "/images/5.gif",
            "Workspace Integration - Transform any space into your digital office",
        ),
    ]
    .into_iter()
    .map(|(source, label)| Slide::from_label(source, label))
    .collect()
}

/// Travel direction of the last slide change, for the transition animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Forward,
    Backward,
}

// ============================================================================
// Slideshow
// ============================================================================

/// The slideshow state machine.
///
/// # Example
///
/// ```
/// use luminx_customizer::{default_slides, Slideshow};
///
/// let mut slideshow = Slideshow::new(default_slides());
/// slideshow.previous();
/// assert_eq!(slideshow.index(), 3); // wraps at the catalog boundary
/// slideshow.next();
/// assert_eq!(slideshow.index(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Slideshow {
    slides: Vec<Slide>,
    index: usize,
    direction: Direction,
    autoplay: Ticker,
}

impl Slideshow {
    /// Creates a slideshow over the given slides, starting at the first.
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            slides,
            index: 0,
            direction: Direction::Forward,
            autoplay: Ticker::new(AUTO_ADVANCE_MS),
        }
    }

    /// The slide catalog.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// The displayed slide index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The displayed slide, if any slides are configured.
    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.index)
    }

    /// Direction of the last change, for the transition animation.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Index of the slide after the current one, wrapping.
    ///
    /// The frontend keeps this one (and [`previous_index`](Self::previous_index))
    /// mounted off-screen so the transition target is already decoded.
    pub fn next_index(&self) -> usize {
        if self.slides.is_empty() {
            return 0;
        }
        (self.index + 1) % self.slides.len()
    }

    /// Index of the slide before the current one, wrapping.
    pub fn previous_index(&self) -> usize {
        if self.slides.is_empty() {
            return 0;
        }
        (self.index + self.slides.len() - 1) % self.slides.len()
    }

    /// Advances to the next slide, wrapping at the end.
    pub fn next(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.direction = Direction::Forward;
        self.index = (self.index + 1) % self.slides.len();
    }

    /// Steps back to the previous slide, wrapping at the start.
    pub fn previous(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.direction = Direction::Backward;
        self.index = (self.index + self.slides.len() - 1) % self.slides.len();
    }

    /// Jumps to a slide by index (dot navigation). Out-of-range indices are
    /// ignored; the dots can only name real slides.
    pub fn jump(&mut self, index: usize) {
        if index >= self.slides.len() || index == self.index {
            return;
        }
        self.direction = if index > self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.index = index;
    }

    /// Polls the auto-advance timer and advances once per due period.
    ///
    /// Returns how many slides were advanced.
    pub fn tick(&mut self, now_ms: u64) -> u32 {
        let due = self.autoplay.poll(now_ms);
        for _ in 0..due {
            self.next();
        }
        due
    }
}

// ============================================================================
// PreloadTracker
// ============================================================================

/// Load-status record for the slideshow's image preloading.
///
/// Each fetch settles independently. Failures — a failed fetch or bytes
/// that don't decode — are logged and counted but still marked settled, so
/// a broken asset can never hold the slideshow back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreloadTracker {
    settled: Vec<bool>,
    failures: usize,
}

impl PreloadTracker {
    /// Creates a tracker for `count` pending images.
    pub fn new(count: usize) -> Self {
        Self {
            settled: vec![false; count],
            failures: 0,
        }
    }

    /// Settles one image from its fetched bytes, or from a failed fetch
    /// (`None`). Bytes are validated by decoding; undecodable bytes settle
    /// as failures.
    pub fn settle(&mut self, index: usize, bytes: Option<&[u8]>) {
        let Some(slot) = self.settled.get_mut(index) else {
            return;
        };
        let failed = match bytes {
            None => true,
            Some(bytes) => image::load_from_memory(bytes).is_err(),
        };
        if failed && !*slot {
            self.failures += 1;
            warn!(index, "slideshow image failed to preload, continuing");
        }
        *slot = true;
    }

    /// Whether the image at `index` has settled.
    pub fn is_settled(&self, index: usize) -> bool {
        self.settled.get(index).copied().unwrap_or(false)
    }

    /// Whether every image has settled.
    pub fn all_settled(&self) -> bool {
        self.settled.iter().all(|s| *s)
    }

    /// How many images settled as failures.
    pub fn failures(&self) -> usize {
        self.failures
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_labels_split() {
        let slides = default_slides();
        assert_eq!(slides.len(), 4);
        assert_eq!(slides[0].title, "Night Mode");
        assert_eq!(slides[0].caption, "Enhanced clarity in low light environments");
        assert_eq!(slides[3].source, "/images/5.gif");
    }

    #[test]
    fn label_without_separator_is_a_bare_title() {
        let slide = Slide::from_label("/images/x.jpg", "Just a title");
        assert_eq!(slide.title, "Just a title");
        assert_eq!(slide.caption, "");
    }

    #[test]
    fn manual_navigation_wraps() {
        let mut slideshow = Slideshow::new(default_slides());

        slideshow.previous();
        assert_eq!(slideshow.index(), 3);
        assert_eq!(slideshow.direction(), Direction::Backward);

        slideshow.next();
        assert_eq!(slideshow.index(), 0);
        assert_eq!(slideshow.direction(), Direction::Forward);
    }

    #[test]
    fn neighbor_indices_wrap() {
        let mut slideshow = Slideshow::new(default_slides());
        assert_eq!(slideshow.next_index(), 1);
        assert_eq!(slideshow.previous_index(), 3);

        slideshow.jump(3);
        assert_eq!(slideshow.next_index(), 0);
        assert_eq!(slideshow.previous_index(), 2);
    }

    #[test]
    fn jump_sets_direction_by_comparison() {
        let mut slideshow = Slideshow::new(default_slides());

        slideshow.jump(2);
        assert_eq!(slideshow.index(), 2);
        assert_eq!(slideshow.direction(), Direction::Forward);

        slideshow.jump(1);
        assert_eq!(slideshow.direction(), Direction::Backward);

        // Out-of-range jumps are ignored
        slideshow.jump(17);
        assert_eq!(slideshow.index(), 1);
    }

    #[test]
    fn auto_advance_lands_on_ticks_mod_len() {
        let mut slideshow = Slideshow::new(default_slides());
        slideshow.tick(0); // arm

        let mut total = 0;
        for n in 1..=10u64 {
            total += slideshow.tick(n * AUTO_ADVANCE_MS);
        }
        assert_eq!(total, 10);
        assert_eq!(slideshow.index(), 10 % 4);
    }

    #[test]
    fn early_polls_do_not_advance() {
        let mut slideshow = Slideshow::new(default_slides());
        slideshow.tick(0);
        assert_eq!(slideshow.tick(AUTO_ADVANCE_MS - 1), 0);
        assert_eq!(slideshow.index(), 0);
    }

    #[test]
    fn empty_slideshow_is_inert() {
        let mut slideshow = Slideshow::new(Vec::new());
        slideshow.next();
        slideshow.previous();
        slideshow.jump(0);
        assert_eq!(slideshow.index(), 0);
        assert!(slideshow.current().is_none());
    }

    #[test]
    fn preload_settles_good_bytes_without_failures() {
        use image::{ImageFormat, RgbaImage};
        use std::io::Cursor;

        let mut png = Vec::new();
        RgbaImage::new(1, 1)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();

        let mut tracker = PreloadTracker::new(4);
        tracker.settle(0, Some(&png));

        assert!(tracker.is_settled(0));
        assert!(!tracker.is_settled(1));
        assert_eq!(tracker.failures(), 0);
    }

    #[test]
    fn failed_loads_are_swallowed() {
        let mut tracker = PreloadTracker::new(2);

        // Fetch failure and undecodable bytes both settle the slot.
        tracker.settle(0, None);
        tracker.settle(1, Some(b"not an image"));

        assert!(tracker.all_settled());
        assert_eq!(tracker.failures(), 2);
    }

    #[test]
    fn out_of_range_settle_is_ignored() {
        let mut tracker = PreloadTracker::new(1);
        tracker.settle(5, None);
        assert!(!tracker.all_settled());
        assert_eq!(tracker.failures(), 0);
    }
}
