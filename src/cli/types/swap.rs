//! `OUT:IN` transfer arguments.

use crate::cli::types::ids::PlayerId;
use crate::error::FplError;
use std::fmt;
use std::str::FromStr;

/// A planned transfer given on the command line as `OUT:IN`.
///
/// # Examples
///
/// ```rust
/// use fpl_planner::cli::types::Swap;
///
/// let swap: Swap = "427:328".parse().unwrap();
/// assert_eq!(swap.out.as_u32(), 427);
/// assert_eq!(swap.player_in.as_u32(), 328);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap {
    pub out: PlayerId,
    pub player_in: PlayerId,
}

impl fmt::Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.out, self.player_in)
    }
}

impl FromStr for Swap {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FplError::InvalidSwap {
            input: s.to_string(),
        };
        let (out, player_in) = s.split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            out: out.trim().parse().map_err(|_| invalid())?,
            player_in: player_in.trim().parse().map_err(|_| invalid())?,
        })
    }
}
