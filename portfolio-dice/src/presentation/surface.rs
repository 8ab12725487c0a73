use serde::{Deserialize, Serialize};

use crate::presentation::markup::{Markup, ResultRegion};

/// The page region a [`Controller`](crate::presentation::controller::Controller)
/// draws into. The host hands one over at construction; the controller never
/// goes looking for page elements by name.
pub trait Surface {
    fn set_modal_visible(&mut self, visible: bool);
    fn set_scroll_locked(&mut self, locked: bool);
    fn set_modal_body(&mut self, body: Markup);
    fn modal_body(&self) -> Option<&Markup>;
    fn modal_body_mut(&mut self) -> Option<&mut Markup>;

    fn result_region(&self) -> Option<&ResultRegion> {
        self.modal_body().and_then(Markup::results)
    }

    fn result_region_mut(&mut self) -> Option<&mut ResultRegion> {
        self.modal_body_mut().and_then(Markup::results_mut)
    }
}

/// A surface that only remembers what it was told. Used headless and in tests.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySurface {
    pub modal_visible: bool,
    pub scroll_locked: bool,
    pub modal_body: Option<Markup>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for MemorySurface {
    fn set_modal_visible(&mut self, visible: bool) {
        self.modal_visible = visible;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn set_modal_body(&mut self, body: Markup) {
        self.modal_body = Some(body);
    }

    fn modal_body(&self) -> Option<&Markup> {
        self.modal_body.as_ref()
    }

    fn modal_body_mut(&mut self) -> Option<&mut Markup> {
        self.modal_body.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::templates;

    #[test]
    fn test_result_region_follows_body() {
        let mut surface = MemorySurface::new();
        assert!(surface.result_region().is_none());

        surface.set_modal_body(Markup::new().text("no region here"));
        assert!(surface.result_region_mut().is_none());

        surface.set_modal_body(templates::dice_simulation());
        let region = surface.result_region_mut().unwrap();
        region.emphasised = true;
        assert!(surface.result_region().unwrap().emphasised);
    }
}
