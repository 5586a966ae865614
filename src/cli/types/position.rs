//! FPL squad position categories.

use crate::error::FplError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position category of an FPL player.
///
/// The FPL API encodes it as `element_type`: 1 = goalkeeper, 2 = defender,
/// 3 = midfielder, 4 = forward.
///
/// # Examples
///
/// ```rust
/// use fpl_planner::Position;
///
/// let def: Position = "DEF".parse().unwrap();
/// assert_eq!(def.element_type(), 2);
/// assert_eq!(def.to_string(), "DEF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// FPL `element_type` id for this position.
    pub fn element_type(&self) -> u8 {
        match self {
            Position::Goalkeeper => 1,
            Position::Defender => 2,
            Position::Midfielder => 3,
            Position::Forward => 4,
        }
    }
}

impl TryFrom<u8> for Position {
    type Error = FplError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Position::Goalkeeper),
            2 => Ok(Position::Defender),
            3 => Ok(Position::Midfielder),
            4 => Ok(Position::Forward),
            _ => Err(FplError::InvalidPosition {
                position: id.to_string(),
            }),
        }
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> u8 {
        position.element_type()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Goalkeeper => "GKP",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GK" | "GKP" | "GOALKEEPER" => Ok(Position::Goalkeeper),
            "DEF" | "DEFENDER" => Ok(Position::Defender),
            "MID" | "MIDFIELDER" => Ok(Position::Midfielder),
            "FWD" | "FW" | "FORWARD" => Ok(Position::Forward),
            _ => Err(FplError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_element_type_mappings() {
        assert_eq!(Position::try_from(1).unwrap(), Position::Goalkeeper);
        assert_eq!(Position::try_from(2).unwrap(), Position::Defender);
        assert_eq!(Position::try_from(3).unwrap(), Position::Midfielder);
        assert_eq!(Position::try_from(4).unwrap(), Position::Forward);

        assert!(Position::try_from(0).is_err());
        assert!(Position::try_from(5).is_err());

        for id in 1..=4u8 {
            assert_eq!(Position::try_from(id).unwrap().element_type(), id);
        }
    }

    #[test]
    fn test_position_string_conversion() {
        assert_eq!(Position::Goalkeeper.to_string(), "GKP");
        assert_eq!(Position::Defender.to_string(), "DEF");
        assert_eq!(Position::Midfielder.to_string(), "MID");
        assert_eq!(Position::Forward.to_string(), "FWD");

        assert_eq!("gk".parse::<Position>().unwrap(), Position::Goalkeeper);
        assert_eq!("Forward".parse::<Position>().unwrap(), Position::Forward);
        assert!("QB".parse::<Position>().is_err());
    }

    #[test]
    fn test_position_deserializes_from_element_type() {
        let pos: Position = serde_json::from_str("3").unwrap();
        assert_eq!(pos, Position::Midfielder);
        assert!(serde_json::from_str::<Position>("9").is_err());
        assert_eq!(serde_json::to_string(&Position::Forward).unwrap(), "4");
    }
}
