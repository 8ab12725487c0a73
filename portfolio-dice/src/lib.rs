pub mod cards;
pub mod dice;
pub mod error;
pub mod links;
pub mod navigation;
pub mod presentation;
pub mod reveal;
pub mod timers;

pub mod prelude {
    pub use crate::{
        cards::{ClickTarget, ProjectCard, Transform},
        dice::{
            die::DieSpec,
            engine::{roll_bulk, roll_composite, roll_die, roll_plan, roll_single},
            notation::{DEMO_COMPOSITE, MAX_DICE, RollPlan, parse_roll},
            outcome::{BulkRollOutcome, CompositeRollOutcome, RollOutcome},
            response::{CompositeRollResponse, SingleRollResponse},
            roller::{DieRoller, Roller},
        },
        error::{DiceError, PresentationError, TriggerError},
        links::{LinkCheck, LinkValidator},
        navigation::{NavState, NavigationTracker, Section, scroll_target},
        presentation::{
            controller::{Controller, ModalState},
            markup::{Markup, ResultRegion},
            surface::{MemorySurface, Surface},
            templates::{render_bulk_result, render_composite_result, render_roll_result},
            trigger::{ModalSignal, SimulationKind, Trigger},
        },
        reveal::{Animated, RevealTracker},
        timers::TimerQueue,
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_demo() -> anyhow::Result<()> {
        let mut controller = Controller::new(MemorySurface::new(), Roller::from_seed(1));

        controller.open_simulation("dice");
        let single = controller.roll_die("d20")?;
        let composite = controller.custom_roll()?;
        let bulk = controller.bulk_roll()?;
        controller.close_simulation();

        assert!((1..=20).contains(&single.result));
        assert_eq!(
            composite.total,
            composite.rolls.iter().map(|&r| i64::from(r)).sum::<i64>() + 5
        );
        assert_eq!(bulk.dice(), DieSpec::standard());
        assert_eq!(controller.state(), ModalState::Closed);

        let (surface, _) = controller.into_parts();
        assert!(!surface.modal_visible);
        assert!(!surface.scroll_locked);
        Ok(())
    }
}
