use serde::{Deserialize, Serialize};

/// Fraction of an element that must be visible before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// The bottom of the viewport is pulled up by this much when measuring.
pub const ROOT_MARGIN_BOTTOM: f64 = 100.0;
/// Class added to an element once it has been revealed.
pub const ANIMATE_IN_CLASS: &str = "animate-in";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animated {
    pub id: String,
    pub top: f64,
    pub height: f64,
    pub revealed: bool,
}

impl Animated {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
            revealed: false,
        }
    }

    /// Visible fraction of the element inside `[view_top, view_bottom)`.
    fn ratio(&self, view_top: f64, view_bottom: f64) -> f64 {
        let bottom = self.top + self.height;
        if self.height <= 0.0 {
            return if self.top >= view_top && self.top < view_bottom {
                1.0
            } else {
                0.0
            };
        }
        let visible = bottom.min(view_bottom) - self.top.max(view_top);
        (visible / self.height).clamp(0.0, 1.0)
    }
}

/// Adds [`ANIMATE_IN_CLASS`] to page elements as they scroll into view.
///
/// An element is revealed at most once and never hidden again. The host
/// either reports intersection ratios it measured itself through
/// [`RevealTracker::on_intersect`], or hands over the scroll position and
/// lets [`RevealTracker::on_viewport`] measure against the element layout.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    elements: Vec<Animated>,
}

impl RevealTracker {
    pub fn new(elements: Vec<Animated>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[Animated] {
        &self.elements
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.elements.iter().any(|e| e.id == id && e.revealed)
    }

    /// Returns `true` when this report is what revealed the element.
    pub fn on_intersect(&mut self, id: &str, ratio: f64) -> bool {
        let Some(element) = self.elements.iter_mut().find(|e| e.id == id) else {
            log::debug!("Ignoring intersection for unobserved #{id}");
            return false;
        };
        Self::reveal(element, ratio)
    }

    /// Reveals everything that crossed the threshold and returns the ids
    /// newly marked, in layout order.
    pub fn on_viewport(&mut self, scroll_y: f64, viewport_height: f64) -> Vec<String> {
        let view_bottom = scroll_y + (viewport_height - ROOT_MARGIN_BOTTOM).max(0.0);
        self.elements
            .iter_mut()
            .filter_map(|element| {
                let ratio = element.ratio(scroll_y, view_bottom);
                Self::reveal(element, ratio).then(|| element.id.clone())
            })
            .collect()
    }

    fn reveal(element: &mut Animated, ratio: f64) -> bool {
        if element.revealed || ratio < REVEAL_THRESHOLD {
            return false;
        }
        element.revealed = true;
        log::debug!("Adding {ANIMATE_IN_CLASS} to #{}", element.id);
        true
    }
}
