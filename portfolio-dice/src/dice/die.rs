use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A polyhedral die shape.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(rename_all = "lowercase")]
pub enum DieSpec {
    #[display("d4")]
    D4,
    #[display("d6")]
    D6,
    #[display("d8")]
    D8,
    #[display("d10")]
    D10,
    #[display("d12")]
    D12,
    #[default]
    #[display("d20")]
    D20,
    #[display("d100")]
    D100,
}

impl DieSpec {
    pub fn all() -> Vec<DieSpec> {
        vec![
            DieSpec::D4,
            DieSpec::D6,
            DieSpec::D8,
            DieSpec::D10,
            DieSpec::D12,
            DieSpec::D20,
            DieSpec::D100,
        ]
    }

    /// The six dice rolled together by a bulk roll.
    pub fn standard() -> Vec<DieSpec> {
        vec![
            DieSpec::D4,
            DieSpec::D6,
            DieSpec::D8,
            DieSpec::D10,
            DieSpec::D12,
            DieSpec::D20,
        ]
    }

    pub fn faces(&self) -> u32 {
        match self {
            DieSpec::D4 => 4,
            DieSpec::D6 => 6,
            DieSpec::D8 => 8,
            DieSpec::D10 => 10,
            DieSpec::D12 => 12,
            DieSpec::D20 => 20,
            DieSpec::D100 => 100,
        }
    }

    /// Strict lookup by identifier, case-insensitive.
    pub fn parse(identifier: &str) -> Option<DieSpec> {
        let identifier = identifier.trim();
        DieSpec::all()
            .into_iter()
            .find(|spec| spec.to_string().eq_ignore_ascii_case(identifier))
    }

    /// Lenient lookup: anything unrecognized becomes a d20.
    pub fn lookup(identifier: &str) -> DieSpec {
        match DieSpec::parse(identifier) {
            Some(spec) => spec,
            None => {
                log::debug!("Unknown die spec {identifier:?}, falling back to d20");
                DieSpec::default()
            }
        }
    }
}
