//! Infinite carousel controller.
//!
//! The list is presented as three back-to-back copies of the filtered items.
//! The copies are never materialised: a virtual index `i` in `0..3n` maps to
//! item `i % n`. Scrolling deep into the first or third copy snaps the offset
//! by one copy width so the user always stays near the middle copy.
//!
//! Timers (scroll debounce and the post-snap cool-down) are deadlines owned by
//! the controller and fire from [`CarouselController::poll`]; unmounting drops
//! them, so nothing can fire against a torn-down controller.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const CARDS_PER_VIEW: usize = 5;
pub const CARD_GAP_PX: f64 = 8.0;
/// Horizontal padding of the scroll container (48px each side).
pub const CONTAINER_PADDING_PX: f64 = 96.0;
/// Viewport assumed when the real one is unknown or zero-width.
pub const FALLBACK_VIEWPORT_WIDTH_PX: f64 = 1280.0;
/// Items moved by one page command.
pub const PAGE_ITEMS: usize = 5;
pub const BACK_CONTROL_TOLERANCE_PX: f64 = 50.0;
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(10);
pub const SNAP_COOLDOWN: Duration = Duration::from_millis(50);
pub const COPIES: usize = 3;

const UPPER_SNAP_RATIO: f64 = 2.5;
const LOWER_SNAP_RATIO: f64 = 0.5;

/// Pixel width of one card plus its gap for a viewport.
pub fn item_width_for_viewport(viewport_width: f64) -> f64 {
    let gaps = (CARDS_PER_VIEW - 1) as f64 * CARD_GAP_PX;
    let usable = |w: f64| w.is_finite() && w - CONTAINER_PADDING_PX - gaps > 0.0;

    let viewport = if usable(viewport_width) {
        viewport_width
    } else {
        FALLBACK_VIEWPORT_WIDTH_PX
    };
    (viewport - CONTAINER_PADDING_PX - gaps) / CARDS_PER_VIEW as f64 + CARD_GAP_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselState {
    Uninitialized,
    /// Anchored at the start of the middle copy, no scroll settled yet.
    Positioned,
    /// A snap was written; scroll events are ignored until the cool-down ends.
    Repositioning,
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageDirection {
    Left,
    Right,
}

/// Offset change the presentation layer must apply to its scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "px", rename_all = "snake_case")]
pub enum ScrollWrite {
    /// Set the offset without animation.
    Jump(f64),
    /// Animate the offset by a relative amount.
    SmoothBy(f64),
}

/// One slot of the visible window over the tripled list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowSlot {
    pub virtual_index: usize,
    pub item_index: usize,
}

#[derive(Debug, Clone)]
pub struct CarouselController {
    len: usize,
    item_width: f64,
    state: CarouselState,
    offset: f64,
    show_back: bool,
    scroll_due: Option<Instant>,
    cooldown_until: Option<Instant>,
}

impl CarouselController {
    pub fn new(len: usize, viewport_width: f64) -> Self {
        Self::with_item_width(len, item_width_for_viewport(viewport_width))
    }

    /// Non-finite or non-positive widths fall back to the default viewport's item width.
    pub fn with_item_width(len: usize, item_width: f64) -> Self {
        let item_width = if item_width.is_finite() && item_width > 0.0 {
            item_width
        } else {
            item_width_for_viewport(FALLBACK_VIEWPORT_WIDTH_PX)
        };
        Self {
            len,
            item_width,
            state: CarouselState::Uninitialized,
            offset: 0.0,
            show_back: false,
            scroll_due: None,
            cooldown_until: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether the "previous" control should be shown.
    pub fn show_back(&self) -> bool {
        self.show_back
    }

    /// Width of one copy of the items.
    pub fn one_set_width(&self) -> f64 {
        self.len as f64 * self.item_width
    }

    /// Anchors the offset at the start of the middle copy. Runs once; later
    /// calls (e.g. after the item count changes) are no-ops.
    pub fn mount(&mut self) -> Option<ScrollWrite> {
        if self.is_empty() || self.state != CarouselState::Uninitialized {
            return None;
        }
        self.offset = self.one_set_width();
        self.state = CarouselState::Positioned;
        Some(ScrollWrite::Jump(self.offset))
    }

    /// Updates the item count without re-anchoring a mounted carousel.
    #[allow(dead_code)]
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.scroll_due = None;
            self.cooldown_until = None;
        } else {
            self.offset = self.clamp_offset(self.offset);
        }
    }

    /// Records a scroll position reported by the container and (re)arms the debounce.
    pub fn on_scroll(&mut self, offset: f64, now: Instant) {
        if self.is_empty() || self.state == CarouselState::Uninitialized {
            return;
        }
        self.offset = self.clamp_offset(offset);
        self.scroll_due = Some(now + SCROLL_DEBOUNCE);
    }

    /// Fires any timers that are due at `now`. Returns the snap to apply, if any.
    pub fn poll(&mut self, now: Instant) -> Option<ScrollWrite> {
        if self.is_empty() {
            return None;
        }

        if let Some(until) = self.cooldown_until {
            if now >= until {
                self.cooldown_until = None;
                if self.state == CarouselState::Repositioning {
                    self.state = CarouselState::Idle;
                }
            }
        }

        match self.scroll_due {
            Some(due) if now >= due => {
                self.scroll_due = None;
                if self.state == CarouselState::Repositioning {
                    // Scroll caused by our own snap.
                    return None;
                }
                self.settle(now)
            }
            _ => None,
        }
    }

    /// Pages by a fixed number of items with a smooth scroll. Does not snap by
    /// itself; the resulting scroll events go through the debounce as usual.
    pub fn page(&mut self, direction: PageDirection) -> Option<ScrollWrite> {
        if self.is_empty() || self.state == CarouselState::Uninitialized {
            return None;
        }
        self.show_back = true;
        let amount = self.item_width * PAGE_ITEMS as f64;
        Some(ScrollWrite::SmoothBy(match direction {
            PageDirection::Left => -amount,
            PageDirection::Right => amount,
        }))
    }

    /// Tears the controller down, dropping pending timers.
    #[allow(dead_code)]
    pub fn unmount(&mut self) {
        self.scroll_due = None;
        self.cooldown_until = None;
        self.state = CarouselState::Uninitialized;
    }

    /// Slots of the tripled list intersecting the viewport at the current offset.
    pub fn visible_window(&self, viewport_width: f64) -> Vec<WindowSlot> {
        if self.is_empty() {
            return Vec::new();
        }
        let total = self.len * COPIES;
        let first = ((self.offset / self.item_width).floor() as usize).min(total - 1);
        let viewport = if viewport_width.is_finite() && viewport_width > 0.0 {
            viewport_width
        } else {
            FALLBACK_VIEWPORT_WIDTH_PX
        };
        let count = (viewport / self.item_width).ceil() as usize + 1;

        (first..total.min(first + count))
            .map(|virtual_index| WindowSlot {
                virtual_index,
                item_index: virtual_index % self.len,
            })
            .collect()
    }

    fn settle(&mut self, now: Instant) -> Option<ScrollWrite> {
        let one_set = self.one_set_width();
        self.show_back = self.offset > one_set + BACK_CONTROL_TOLERANCE_PX;

        let snapped = if self.offset >= one_set * UPPER_SNAP_RATIO {
            self.offset - one_set
        } else if self.offset <= one_set * LOWER_SNAP_RATIO {
            self.offset + one_set
        } else {
            self.state = CarouselState::Idle;
            return None;
        };

        debug!("Carousel snap {:.1} -> {:.1}", self.offset, snapped);
        self.offset = snapped;
        self.state = CarouselState::Repositioning;
        self.cooldown_until = Some(now + SNAP_COOLDOWN);
        Some(ScrollWrite::Jump(snapped))
    }

    fn clamp_offset(&self, offset: f64) -> f64 {
        let max = self.one_set_width() * COPIES as f64;
        if offset.is_finite() {
            offset.clamp(0.0, max)
        } else {
            self.offset
        }
    }
}
