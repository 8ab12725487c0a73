use chrono::{DateTime, Local, Utc};

use crate::{
    dice::{
        outcome::{BulkRollOutcome, CompositeRollOutcome, RollOutcome},
        response::to_body,
    },
    presentation::markup::{Accent, Control, Endpoint, Markup, Node, ResultRegion},
};

fn control(label: &str, trigger: &str, primary: bool) -> Control {
    Control {
        label: label.to_string(),
        trigger: trigger.to_string(),
        primary,
    }
}

fn endpoint(method: &str, path: &str, description: &str) -> Endpoint {
    Endpoint {
        method: method.to_string(),
        path: path.to_string(),
        description: description.to_string(),
    }
}

/// Wall-clock time in the viewer's zone, e.g. `3:04:05 PM`.
pub fn local_time(t: DateTime<Utc>) -> String {
    t.with_timezone(&Local).format("%-I:%M:%S %p").to_string()
}

pub fn ready_placeholder() -> Markup {
    Markup::new()
        .strong("Ready to test dice rolling API")
        .text("Click any button above to simulate API calls and see results.")
        .note("Note: This is a demonstration of the API testing interface.")
}

/// Modal body for the dice simulation: controls, result region and the
/// documented endpoints.
pub fn dice_simulation() -> Markup {
    let mut body = Markup::new()
        .heading("🎲 D&D Dice Roller API Test")
        .text("Test the dice rolling functionality with simulated API calls:");
    body.push(Node::Controls(vec![
        control("Roll d20", "roll d20", true),
        control("Roll d6", "roll d6", true),
        control("Custom Roll (2d10+5)", "custom", false),
        control("Bulk Roll Test", "bulk", false),
    ]))
    .push(Node::Results(ResultRegion::new(ready_placeholder())))
    .push(Node::Endpoints {
        title: "API Endpoints:".to_string(),
        items: vec![
            endpoint("POST", "/api/v1/dice/roll", "Standard dice roll"),
            endpoint(
                "POST",
                "/api/v1/dice/quick-roll/{type}",
                "Quick single die roll",
            ),
            endpoint("GET", "/api/v1/dice/history", "Roll history"),
        ],
    });
    body
}

pub fn render_roll_result(outcome: &RollOutcome) -> Markup {
    Markup::new()
        .strong("Dice Roll Result:")
        .value(
            "🎲",
            outcome.die.to_string().to_uppercase(),
            outcome.result,
            Accent::Primary,
            false,
        )
        .note(format!("Rolled at: {}", local_time(outcome.rolled_at)))
        .rule()
        .small(format!("API Response: {}", to_body(&outcome.to_response())))
}

pub fn render_composite_result(outcome: &CompositeRollOutcome) -> Markup {
    let mut markup = Markup::new().strong(format!("Custom Roll Result ({}):", outcome.notation()));
    for (i, roll) in outcome.rolls.iter().enumerate() {
        markup = markup.value("🎲", format!("Die {}", i + 1), roll, Accent::None, false);
    }
    markup
        .value(
            "➕",
            "Modifier",
            format!("{:+}", outcome.modifier),
            Accent::None,
            false,
        )
        .value("🎯", "Total", outcome.total, Accent::Secondary, true)
        .note(format!("Rolled at: {}", local_time(outcome.rolled_at)))
        .rule()
        .small(format!("API Response: {}", to_body(&outcome.to_response())))
}

pub fn render_bulk_result(outcome: &BulkRollOutcome) -> Markup {
    let mut markup = Markup::new().strong("Bulk Roll Results:");
    for roll in outcome.iter() {
        markup = markup.value(
            "🎲",
            roll.die.to_string().to_uppercase(),
            roll.result,
            Accent::Primary,
            false,
        );
    }
    markup
        .value("🎯", "Sum Total", outcome.total, Accent::Secondary, true)
        .note(format!("Rolled at: {}", local_time(outcome.rolled_at)))
        .rule()
        .small(format!(
            "Bulk API call completed successfully. {} dice rolled.",
            outcome.len()
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::die::DieSpec;

    fn at() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-14T09:26:53.589Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_dice_template() {
        let body = dice_simulation();
        let region = body.results().unwrap();
        assert_eq!(region.content, ready_placeholder());
        assert!(!region.emphasised);

        let text = body.plain_text();
        assert!(text.contains("Ready to test dice rolling API"));
        assert!(text.contains("POST /api/v1/dice/quick-roll/{type}"));
        assert!(text.contains("GET /api/v1/dice/history"));
        assert!(text.contains("[Custom Roll (2d10+5)]"));
    }

    #[test]
    fn test_render_roll_result() {
        let outcome = RollOutcome {
            die: DieSpec::D20,
            result: 17,
            rolled_at: at(),
        };
        let text = render_roll_result(&outcome).plain_text();
        assert!(text.starts_with("Dice Roll Result:\n"));
        assert!(text.contains(" D20: 17\n"));
        assert!(text.contains("Rolled at: "));
        assert!(text.contains(
            r#"API Response: {"dice":"d20","result":17,"timestamp":"2025-03-14T09:26:53.589Z"}"#
        ));
    }

    #[test]
    fn test_render_composite_result() {
        let outcome = CompositeRollOutcome {
            faces: 10,
            rolls: vec![4, 8],
            modifier: 5,
            total: 17,
            rolled_at: at(),
        };
        let text = render_composite_result(&outcome).plain_text();
        assert!(text.starts_with("Custom Roll Result (2d10+5):\n"));
        assert!(text.contains(" Die 1: 4\n"));
        assert!(text.contains(" Die 2: 8\n"));
        assert!(text.contains(" Modifier: +5\n"));
        assert!(text.contains(" Total: 17\n"));
        assert!(text.contains(r#"{"dice":"2d10","rolls":[4,8],"modifier":5,"total":17}"#));
    }

    #[test]
    fn test_render_bulk_result_order() {
        let rolls = DieSpec::standard()
            .into_iter()
            .map(|die| RollOutcome {
                die,
                result: 1,
                rolled_at: at(),
            })
            .collect();
        let outcome = BulkRollOutcome {
            rolls,
            total: 6,
            rolled_at: at(),
        };
        let text = render_bulk_result(&outcome).plain_text();
        let positions: Vec<usize> = ["D4:", "D6:", "D8:", "D10:", "D12:", "D20:"]
            .iter()
            .map(|label| text.find(&format!(" {label} ")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains(" Sum Total: 6\n"));
        assert!(text.contains("Bulk API call completed successfully. 6 dice rolled."));
    }

    #[test]
    fn test_local_time_shape() {
        let shown = local_time(at());
        assert!(shown.ends_with("AM") || shown.ends_with("PM"));
        assert_eq!(shown.matches(':').count(), 2);
    }
}
