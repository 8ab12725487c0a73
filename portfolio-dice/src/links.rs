use std::collections::HashSet;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::timers::TimerQueue;

/// How long a simulated check takes to resolve.
pub const VALIDATION_DELAY_MS: i64 = 100;
/// How long a clicked link stays dimmed.
pub const LINK_FEEDBACK_MS: i64 = 200;
/// Opacity of a link right after it was clicked.
pub const PRESSED_OPACITY: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCheck {
    pub url: String,
    pub valid: bool,
}

#[derive(Debug, Clone)]
enum LinkEvent {
    Resolve(String),
    RestoreOpacity(String),
}

/// Simulated outbound-link checker.
///
/// No request is made. Every check resolves as valid after a short delay so
/// the host sees the same latency shape a real HEAD request would have.
/// Clicking a link also dims it to [`PRESSED_OPACITY`] until
/// [`LINK_FEEDBACK_MS`] have passed.
#[derive(Debug, Default)]
pub struct LinkValidator {
    timers: TimerQueue<LinkEvent>,
    in_flight: usize,
    dimmed: HashSet<String>,
}

impl LinkValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A click on an outbound link: visual feedback plus a validation.
    pub fn on_click(&mut self, text: &str, url: &str) {
        self.dimmed.insert(url.to_string());
        self.timers.schedule(
            Duration::milliseconds(LINK_FEEDBACK_MS),
            LinkEvent::RestoreOpacity(url.to_string()),
        );
        self.validate(text, url);
    }

    pub fn validate(&mut self, text: &str, url: &str) {
        log::info!("Testing link: {} -> {}", text.trim(), url);
        self.timers.schedule(
            Duration::milliseconds(VALIDATION_DELAY_MS),
            LinkEvent::Resolve(url.to_string()),
        );
        self.in_flight += 1;
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn opacity(&self, url: &str) -> f64 {
        if self.dimmed.contains(url) {
            PRESSED_OPACITY
        } else {
            1.0
        }
    }

    pub fn advance(&mut self, by: Duration) -> Vec<LinkCheck> {
        let mut checks = Vec::new();
        for event in self.timers.advance(by) {
            match event {
                LinkEvent::Resolve(url) => {
                    self.in_flight -= 1;
                    checks.push(LinkCheck { url, valid: true });
                }
                // An earlier click's restore wins over a later click, the
                // same as independent timeouts on one element.
                LinkEvent::RestoreOpacity(url) => {
                    self.dimmed.remove(&url);
                }
            }
        }
        checks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_after_delay() {
        let mut validator = LinkValidator::new();
        validator.validate("Company Intranet", "https://example.com/intranet");
        assert_eq!(validator.in_flight(), 1);

        assert!(validator.advance(Duration::milliseconds(99)).is_empty());
        let checks = validator.advance(Duration::milliseconds(1));
        assert_eq!(
            checks,
            vec![LinkCheck {
                url: "https://example.com/intranet".to_string(),
                valid: true,
            }]
        );
        assert_eq!(validator.in_flight(), 0);
    }

    #[test]
    fn test_every_link_is_valid() {
        let mut validator = LinkValidator::new();
        for url in ["https://a.example", "http://b.example", "not a url"] {
            validator.validate(url, url);
        }
        let checks = validator.advance(Duration::seconds(1));
        assert_eq!(checks.len(), 3);
        assert!(checks.iter().all(|c| c.valid));
        assert_eq!(checks[2].url, "not a url");
    }

    #[test]
    fn test_click_dims_until_feedback_ends() {
        let mut validator = LinkValidator::new();
        let url = "https://github.com/example/repo";
        assert_eq!(validator.opacity(url), 1.0);

        validator.on_click(" GitHub ", url);
        assert_eq!(validator.opacity(url), PRESSED_OPACITY);
        assert_eq!(validator.in_flight(), 1);

        assert_eq!(validator.advance(Duration::milliseconds(100)).len(), 1);
        assert_eq!(validator.opacity(url), PRESSED_OPACITY);
        assert_eq!(validator.in_flight(), 0);

        assert!(validator.advance(Duration::milliseconds(99)).is_empty());
        assert_eq!(validator.opacity(url), PRESSED_OPACITY);
        validator.advance(Duration::milliseconds(1));
        assert_eq!(validator.opacity(url), 1.0);
    }

    #[test]
    fn test_first_restore_clears_repeat_clicks() {
        let mut validator = LinkValidator::new();
        let url = "https://example.com";
        validator.on_click("Demo", url);
        validator.advance(Duration::milliseconds(150));
        validator.on_click("Demo", url);

        validator.advance(Duration::milliseconds(50));
        assert_eq!(validator.opacity(url), 1.0);
        assert_eq!(validator.opacity("https://other.example"), 1.0);
        assert_eq!(validator.advance(Duration::seconds(1)).len(), 1);
    }
}
