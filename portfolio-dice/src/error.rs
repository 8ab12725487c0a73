use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("a die needs at least one face")]
    InvalidFaces,
    #[error("cannot roll {count} dice at once, the limit is {max}")]
    TooManyDice { count: u32, max: u32 },
    #[error("could not parse roll notation {0:?}")]
    Notation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentationError {
    /// The modal body has no result region to write into. Rolling before the
    /// dice simulation is open is an integration bug, not a runtime state.
    #[error("modal body has no result region")]
    MissingResultRegion,
    #[error(transparent)]
    Dice(#[from] DiceError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriggerError {
    #[error("empty trigger")]
    Empty,
    #[error("unknown trigger {0:?}")]
    Unknown(String),
    #[error("trigger {name:?} expects an argument")]
    MissingArgument { name: String },
    #[error("invalid argument {value:?} for trigger {name:?}")]
    InvalidArgument { name: String, value: String },
    #[error(transparent)]
    Dice(#[from] DiceError),
}
