use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map_res, opt},
    sequence::{pair, preceded},
};
use serde::{Deserialize, Serialize};

use crate::error::DiceError;

/// Most dice a single composite roll may throw.
pub const MAX_DICE: u32 = 1000;

/// A composite roll request: `count` dice with `faces` sides plus `modifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollPlan {
    pub count: u32,
    pub faces: u32,
    pub modifier: i32,
}

/// The custom roll offered by the dice simulation.
pub const DEMO_COMPOSITE: RollPlan = RollPlan {
    count: 2,
    faces: 10,
    modifier: 5,
};

impl Default for RollPlan {
    fn default() -> Self {
        DEMO_COMPOSITE
    }
}

impl RollPlan {
    pub fn pretty_print(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.faces)?;
        if self.modifier > 0 {
            write!(f, "+{}", self.modifier)?;
        } else if self.modifier < 0 {
            write!(f, "{}", self.modifier)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for RollPlan {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_roll(s)
    }
}

/// Parses `NdF`, `dF`, `NdF+M` or `NdF-M`, ignoring surrounding whitespace.
pub fn parse_roll(input: &str) -> Result<RollPlan, DiceError> {
    let res = all_consuming(roll_plan).parse(input.trim());

    match res {
        Ok((_, plan)) if plan.faces == 0 => Err(DiceError::InvalidFaces),
        Ok((_, plan)) if plan.count > MAX_DICE => Err(DiceError::TooManyDice {
            count: plan.count,
            max: MAX_DICE,
        }),
        Ok((_, plan)) => Ok(plan),
        Err(_) => Err(DiceError::Notation(input.to_string())),
    }
}

fn roll_plan(input: &str) -> IResult<&str, RollPlan> {
    let (input, (count, faces, modifier)) = (
        opt(map_res(digit1, |s: &str| s.parse::<u32>())),
        preceded(
            alt((char('d'), char('D'))),
            map_res(digit1, |s: &str| s.parse::<u32>()),
        ),
        opt(preceded(
            space0,
            pair(
                alt((char('+'), char('-'))),
                preceded(space0, map_res(digit1, |s: &str| s.parse::<i32>())),
            ),
        )),
    )
        .parse(input)?;

    let modifier = match modifier {
        Some(('-', value)) => -value,
        Some((_, value)) => value,
        None => 0,
    };

    Ok((
        input,
        RollPlan {
            count: count.unwrap_or(1),
            faces,
            modifier,
        },
    ))
}
