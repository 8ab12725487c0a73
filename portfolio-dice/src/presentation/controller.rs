use chrono::Duration;
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{
    dice::{
        die::DieSpec,
        engine,
        notation::{DEMO_COMPOSITE, RollPlan},
        outcome::{BulkRollOutcome, CompositeRollOutcome, RollOutcome},
        roller::DieRoller,
    },
    error::PresentationError,
    presentation::{
        markup::Markup,
        surface::Surface,
        templates,
        trigger::{ModalSignal, SimulationKind, Trigger},
    },
    timers::TimerQueue,
};

/// How long the result region stays emphasised after a single roll.
pub const EMPHASIS_MS: i64 = 200;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    ClearEmphasis,
}

/// Owns the simulation modal: opens and closes it, rolls through the engine
/// and writes results into the modal's result region.
#[derive(Debug)]
pub struct Controller<S, R> {
    surface: S,
    roller: R,
    state: ModalState,
    timers: TimerQueue<Deferred>,
}

impl<S: Surface, R: DieRoller> Controller<S, R> {
    pub fn new(surface: S, roller: R) -> Self {
        Self {
            surface,
            roller,
            state: ModalState::Closed,
            timers: TimerQueue::new(),
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_parts(self) -> (S, R) {
        (self.surface, self.roller)
    }

    /// Current result region content, if the modal body has one.
    pub fn results(&self) -> Option<&Markup> {
        self.surface.result_region().map(|region| &region.content)
    }

    /// Shows the modal for `kind` and locks page scrolling. Kinds without a
    /// template still open the modal but keep whatever body it already had.
    pub fn open_simulation(&mut self, kind: &str) {
        match SimulationKind::parse(kind) {
            Some(SimulationKind::Dice) => {
                self.surface.set_modal_body(templates::dice_simulation());
            }
            None => log::warn!("No simulation for {kind:?}, leaving modal content as is"),
        }

        self.surface.set_modal_visible(true);
        self.surface.set_scroll_locked(true);
        self.state = ModalState::Open;
        log::info!("Opened simulation {kind:?}");
    }

    /// Hides the modal and restores page scrolling. Does nothing when closed.
    pub fn close_simulation(&mut self) {
        if self.state == ModalState::Closed {
            return;
        }

        self.surface.set_modal_visible(false);
        self.surface.set_scroll_locked(false);
        self.state = ModalState::Closed;
        log::info!("Closed simulation");
    }

    /// Applies a dismiss signal. Signals only count while the modal is open.
    pub fn handle_signal(&mut self, signal: ModalSignal) -> ModalState {
        if self.state == ModalState::Open {
            log::debug!("Dismissing modal on {signal}");
            self.close_simulation();
        }
        self.state
    }

    pub fn roll_die(&mut self, identifier: &str) -> Result<RollOutcome, PresentationError> {
        let outcome = engine::roll_single(&mut self.roller, identifier);
        self.show_results(templates::render_roll_result(&outcome))?;
        self.emphasise()?;
        log::info!("{}", pretty(|f| outcome.pretty_print(f)));
        Ok(outcome)
    }

    pub fn custom_roll(&mut self) -> Result<CompositeRollOutcome, PresentationError> {
        self.custom_roll_with(DEMO_COMPOSITE)
    }

    pub fn custom_roll_with(
        &mut self,
        plan: RollPlan,
    ) -> Result<CompositeRollOutcome, PresentationError> {
        let outcome = engine::roll_plan(&mut self.roller, plan)?;
        self.show_results(templates::render_composite_result(&outcome))?;
        log::info!("{}", pretty(|f| outcome.pretty_print(f)));
        Ok(outcome)
    }

    pub fn bulk_roll(&mut self) -> Result<BulkRollOutcome, PresentationError> {
        let outcome = engine::roll_bulk(&mut self.roller, &DieSpec::standard());
        self.show_results(templates::render_bulk_result(&outcome))?;
        log::info!("{}", pretty(|f| outcome.pretty_print(f)));
        Ok(outcome)
    }

    /// Lets `by` pass and applies whatever deferred effects came due.
    pub fn advance(&mut self, by: Duration) {
        for deferred in self.timers.advance(by) {
            match deferred {
                Deferred::ClearEmphasis => match self.surface.result_region_mut() {
                    Some(region) => region.emphasised = false,
                    None => log::debug!("Result region gone before emphasis reset"),
                },
            }
        }
    }

    pub fn dispatch(&mut self, trigger: Trigger) -> Result<(), PresentationError> {
        match trigger {
            Trigger::Open(kind) => self.open_simulation(&kind),
            Trigger::Close => self.close_simulation(),
            Trigger::Signal(signal) => {
                self.handle_signal(signal);
            }
            Trigger::Roll(identifier) => {
                self.roll_die(&identifier)?;
            }
            Trigger::Custom(plan) => {
                self.custom_roll_with(plan.unwrap_or(DEMO_COMPOSITE))?;
            }
            Trigger::Bulk => {
                self.bulk_roll()?;
            }
            Trigger::Wait(by) => self.advance(by),
        }
        Ok(())
    }

    fn show_results(&mut self, content: Markup) -> Result<(), PresentationError> {
        let region = self
            .surface
            .result_region_mut()
            .ok_or(PresentationError::MissingResultRegion)?;
        region.replace(content);
        Ok(())
    }

    fn emphasise(&mut self) -> Result<(), PresentationError> {
        let region = self
            .surface
            .result_region_mut()
            .ok_or(PresentationError::MissingResultRegion)?;
        region.emphasised = true;
        self.timers
            .schedule(Duration::milliseconds(EMPHASIS_MS), Deferred::ClearEmphasis);
        Ok(())
    }
}

fn pretty(print: impl FnOnce(&mut String) -> std::fmt::Result) -> String {
    let mut buf = String::new();
    print(&mut buf).ok();
    buf
}
