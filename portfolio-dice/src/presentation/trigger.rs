use chrono::Duration;
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{dice::notation::RollPlan, error::TriggerError};

/// Simulations the modal knows how to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum SimulationKind {
    #[display("dice")]
    Dice,
}

impl SimulationKind {
    pub fn parse(kind: &str) -> Option<SimulationKind> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "dice" => Some(SimulationKind::Dice),
            _ => None,
        }
    }
}

/// Ways the user can dismiss an open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum ModalSignal {
    #[display("escape")]
    Escape,
    #[display("click-outside")]
    ClickOutside,
    #[display("close-button")]
    CloseButton,
}

/// A named action fired from a page control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    Open(String),
    Close,
    Signal(ModalSignal),
    Roll(String),
    Custom(Option<RollPlan>),
    Bulk,
    /// Let time pass so deferred effects fire.
    Wait(Duration),
}

impl std::str::FromStr for Trigger {
    type Err = TriggerError;

    /// Accepts lines such as `open dice`, `roll d20`, `custom 3d6+2`,
    /// `bulk`, `escape`, `click-outside`, `close` and `wait 200`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().ok_or(TriggerError::Empty)?.to_ascii_lowercase();
        let rest: Vec<&str> = words.collect();
        let argument = (!rest.is_empty()).then(|| rest.join(" "));

        let trigger = match name.as_str() {
            "open" => {
                Trigger::Open(argument.unwrap_or_else(|| SimulationKind::Dice.to_string()))
            }
            "close" => Trigger::Close,
            "escape" | "esc" => Trigger::Signal(ModalSignal::Escape),
            "click-outside" => Trigger::Signal(ModalSignal::ClickOutside),
            "roll" => Trigger::Roll(argument.ok_or_else(|| TriggerError::MissingArgument {
                name: name.clone(),
            })?),
            "custom" => Trigger::Custom(argument.map(|a| a.parse::<RollPlan>()).transpose()?),
            "bulk" => Trigger::Bulk,
            "wait" => {
                let value = argument.ok_or_else(|| TriggerError::MissingArgument {
                    name: name.clone(),
                })?;
                let ms = value
                    .parse::<i64>()
                    .ok()
                    .filter(|ms| *ms >= 0)
                    .ok_or_else(|| TriggerError::InvalidArgument {
                        name: name.clone(),
                        value: value.clone(),
                    })?;
                Trigger::Wait(Duration::milliseconds(ms))
            }
            _ => return Err(TriggerError::Unknown(name.clone())),
        };
        Ok(trigger)
    }
}
