use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dice::{
    die::DieSpec,
    response::{CompositeRollResponse, SingleRollResponse},
};

/// One generated roll of a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    pub die: DieSpec,
    pub result: u32,
    pub rolled_at: DateTime<Utc>,
}

impl RollOutcome {
    pub fn to_response(&self) -> SingleRollResponse {
        SingleRollResponse::new(self.die, self.result, self.rolled_at)
    }

    pub fn pretty_print(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        write!(f, "Rolled {}: {}", self.die, self.result)
    }
}

/// Several dice of one size summed together with a flat modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeRollOutcome {
    pub faces: u32,
    pub rolls: Vec<u32>,
    pub modifier: i32,
    pub total: i64,
    pub rolled_at: DateTime<Utc>,
}

impl CompositeRollOutcome {
    /// The dice part alone, e.g. `2d10`.
    pub fn dice_notation(&self) -> String {
        format!("{}d{}", self.rolls.len(), self.faces)
    }

    /// Full notation including the modifier, e.g. `2d10+5`.
    pub fn notation(&self) -> String {
        let mut out = self.dice_notation();
        if self.modifier > 0 {
            out.push_str(&format!("+{}", self.modifier));
        } else if self.modifier < 0 {
            out.push_str(&format!("{}", self.modifier));
        }
        out
    }

    pub fn to_response(&self) -> CompositeRollResponse {
        CompositeRollResponse {
            dice: self.dice_notation(),
            rolls: self.rolls.clone(),
            modifier: self.modifier,
            total: self.total,
        }
    }

    pub fn pretty_print(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        write!(f, "Rolled {}: [", self.notation())?;
        for (i, roll) in self.rolls.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", roll)?;
        }
        write!(f, "] = {}", self.total)
    }
}

/// One roll per die in a fixed set, kept in the order the set was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkRollOutcome {
    pub rolls: Vec<RollOutcome>,
    pub total: u64,
    pub rolled_at: DateTime<Utc>,
}

impl BulkRollOutcome {
    pub fn get(&self, die: DieSpec) -> Option<u32> {
        self.rolls.iter().find(|r| r.die == die).map(|r| r.result)
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RollOutcome> {
        self.rolls.iter()
    }

    pub fn dice(&self) -> Vec<DieSpec> {
        self.rolls.iter().map(|r| r.die).collect()
    }

    pub fn pretty_print(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        write!(f, "Rolled ")?;
        for (i, roll) in self.rolls.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", roll.die, roll.result)?;
        }
        write!(f, " = {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-14T09:26:53.589Z")
            .map(|t| t.with_timezone(&Utc))
            .unwrap()
    }

    #[test]
    fn test_composite_notation() {
        let outcome = CompositeRollOutcome {
            faces: 10,
            rolls: vec![3, 9],
            modifier: 5,
            total: 17,
            rolled_at: fixed_time(),
        };
        assert_eq!(outcome.dice_notation(), "2d10");
        assert_eq!(outcome.notation(), "2d10+5");

        let negative = CompositeRollOutcome {
            modifier: -2,
            total: 10,
            ..outcome.clone()
        };
        assert_eq!(negative.notation(), "2d10-2");

        let flat = CompositeRollOutcome {
            modifier: 0,
            total: 12,
            ..outcome
        };
        assert_eq!(flat.notation(), "2d10");
    }

    #[test]
    fn test_pretty_print() {
        let single = RollOutcome {
            die: DieSpec::D20,
            result: 14,
            rolled_at: fixed_time(),
        };
        let mut buf = String::new();
        single.pretty_print(&mut buf).unwrap();
        assert_eq!(buf, "Rolled d20: 14");

        let composite = CompositeRollOutcome {
            faces: 10,
            rolls: vec![3, 9],
            modifier: 5,
            total: 17,
            rolled_at: fixed_time(),
        };
        let mut buf = String::new();
        composite.pretty_print(&mut buf).unwrap();
        assert_eq!(buf, "Rolled 2d10+5: [3, 9] = 17");
    }

    #[test]
    fn test_bulk_lookup() {
        let rolls = vec![
            RollOutcome {
                die: DieSpec::D4,
                result: 2,
                rolled_at: fixed_time(),
            },
            RollOutcome {
                die: DieSpec::D8,
                result: 7,
                rolled_at: fixed_time(),
            },
        ];
        let bulk = BulkRollOutcome {
            rolls,
            total: 9,
            rolled_at: fixed_time(),
        };
        assert_eq!(bulk.get(DieSpec::D8), Some(7));
        assert_eq!(bulk.get(DieSpec::D20), None);
        assert_eq!(bulk.dice(), vec![DieSpec::D4, DieSpec::D8]);

        let mut buf = String::new();
        bulk.pretty_print(&mut buf).unwrap();
        assert_eq!(buf, "Rolled d4=2, d8=7 = 9");
    }
}
