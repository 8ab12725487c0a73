use serde::{Deserialize, Serialize};

/// Scroll distance past which the header switches to its compact style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
/// Look-ahead applied to the scroll position when picking the active section.
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavState {
    pub header_scrolled: bool,
    pub active: Option<String>,
}

/// Where to scroll so that a section lands just below a fixed header.
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

/// Tracks header style and the highlighted nav link.
///
/// The host owns the scroll events and feeds them in through
/// [`NavigationTracker::on_scroll`]; nothing here listens on its own. When
/// the scroll position falls between sections the previous highlight stays.
#[derive(Debug, Clone, Default)]
pub struct NavigationTracker {
    sections: Vec<Section>,
    state: NavState,
}

impl NavigationTracker {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            state: NavState::default(),
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> &NavState {
        self.state.header_scrolled = scroll_y > HEADER_SCROLL_THRESHOLD;

        let marker = scroll_y + ACTIVE_SECTION_OFFSET;
        if let Some(section) = self.sections.iter().rev().find(|s| s.contains(marker))
            && self.state.active.as_deref() != Some(section.id.as_str())
        {
            log::debug!("Active section is now #{}", section.id);
            self.state.active = Some(section.id.clone());
        }

        &self.state
    }
}
