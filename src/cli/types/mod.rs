//! Type-safe wrappers and enums for FPL data.

pub mod ids;
pub mod position;
pub mod swap;

pub use ids::{EntryId, Gameweek, PlayerId, TeamId};
pub use position::Position;
pub use swap::Swap;
