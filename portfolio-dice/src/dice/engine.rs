use chrono::Utc;

use crate::{
    dice::{
        die::DieSpec,
        notation::{MAX_DICE, RollPlan},
        outcome::{BulkRollOutcome, CompositeRollOutcome, RollOutcome},
        roller::DieRoller,
    },
    error::DiceError,
};

/// Rolls the die named by `identifier`. Unknown identifiers roll a d20.
pub fn roll_single(rng: &mut impl DieRoller, identifier: &str) -> RollOutcome {
    roll_die(rng, DieSpec::lookup(identifier))
}

pub fn roll_die(rng: &mut impl DieRoller, die: DieSpec) -> RollOutcome {
    let result = rng.d(die.faces());
    log::debug!("Rolled {die}: {result}");
    RollOutcome {
        die,
        result,
        rolled_at: Utc::now(),
    }
}

/// Rolls `count` dice with `faces` sides and adds `modifier` once. At most
/// [`MAX_DICE`] dice are thrown.
pub fn roll_composite(
    rng: &mut impl DieRoller,
    count: u32,
    faces: u32,
    modifier: i32,
) -> Result<CompositeRollOutcome, DiceError> {
    if faces == 0 {
        return Err(DiceError::InvalidFaces);
    }
    if count > MAX_DICE {
        return Err(DiceError::TooManyDice {
            count,
            max: MAX_DICE,
        });
    }

    let rolls: Vec<u32> = (0..count).map(|_| rng.d(faces)).collect();
    let total = rolls.iter().map(|&r| i64::from(r)).sum::<i64>() + i64::from(modifier);

    let outcome = CompositeRollOutcome {
        faces,
        rolls,
        modifier,
        total,
        rolled_at: Utc::now(),
    };
    log::debug!("Rolled {}: {:?} = {}", outcome.notation(), outcome.rolls, total);
    Ok(outcome)
}

pub fn roll_plan(
    rng: &mut impl DieRoller,
    plan: RollPlan,
) -> Result<CompositeRollOutcome, DiceError> {
    roll_composite(rng, plan.count, plan.faces, plan.modifier)
}

/// Rolls each die in `dice` once, in the given order.
pub fn roll_bulk(rng: &mut impl DieRoller, dice: &[DieSpec]) -> BulkRollOutcome {
    let rolls: Vec<RollOutcome> = dice.iter().map(|&die| roll_die(rng, die)).collect();
    let total = rolls.iter().map(|r| u64::from(r.result)).sum();
    BulkRollOutcome {
        rolls,
        total,
        rolled_at: Utc::now(),
    }
}
