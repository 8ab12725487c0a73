use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Vertical lift applied to a hovered card, in pixels.
pub const HOVER_LIFT_PX: f64 = -8.0;
pub const HOVER_SCALE: f64 = 1.02;

#[derive(Debug, Display, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[display("translateY({lift_px}px) scale({scale})")]
pub struct Transform {
    pub lift_px: f64,
    pub scale: f64,
}

impl Transform {
    pub const RESTING: Transform = Transform {
        lift_px: 0.0,
        scale: 1.0,
    };

    pub const HOVERED: Transform = Transform {
        lift_px: HOVER_LIFT_PX,
        scale: HOVER_SCALE,
    };
}

/// What inside a card received the click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickTarget {
    Card,
    /// One of the card's own outbound links. Those are handled by the
    /// link validator, not counted as a card click.
    ProjectLink,
}

/// One project card on the portfolio page, keyed by its `data-project` name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCard {
    project: String,
    transform: Transform,
    clicks: u32,
}

impl ProjectCard {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            transform: Transform::RESTING,
            clicks: 0,
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Pointer entered (`true`) or left (`false`) the card.
    pub fn on_hover(&mut self, entered: bool) -> Transform {
        self.transform = if entered {
            Transform::HOVERED
        } else {
            Transform::RESTING
        };
        self.transform
    }

    /// Returns the project name when the click counts as a card click.
    pub fn on_click(&mut self, target: ClickTarget) -> Option<&str> {
        match target {
            ClickTarget::ProjectLink => None,
            ClickTarget::Card => {
                self.clicks += 1;
                log::info!("Project card clicked: {}", self.project);
                Some(self.project.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_lifts_and_restores() {
        let mut card = ProjectCard::new("dice-api");
        assert_eq!(card.transform(), Transform::RESTING);

        let lifted = card.on_hover(true);
        assert_eq!(lifted.to_string(), "translateY(-8px) scale(1.02)");
        assert_eq!(card.on_hover(false).to_string(), "translateY(0px) scale(1)");
    }

    #[test]
    fn test_link_clicks_are_not_card_clicks() {
        let mut card = ProjectCard::new("dice-api");
        assert_eq!(card.on_click(ClickTarget::ProjectLink), None);
        assert_eq!(card.clicks(), 0);

        assert_eq!(card.on_click(ClickTarget::Card), Some("dice-api"));
        assert_eq!(card.on_click(ClickTarget::Card), Some("dice-api"));
        assert_eq!(card.clicks(), 2);
    }
}
