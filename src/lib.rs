//! Fantasy Premier League Planner Library
//!
//! Tools for planning FPL transfers against the public FPL API: a transfer
//! sandbox with cost tracking, fixture difficulty lookups, itemized gameweek
//! points and ranked replacement candidates.
//!
//! ## Features
//!
//! - **Transfer Planner**: Stage OUT/IN swaps on top of your real squad and see free transfers used, points hits and bank
//! - **Fixtures**: Upcoming or past opponents with FDR, averages, swings, blank and double gameweeks
//! - **Points Breakdown**: Per-item gameweek points using the position-aware FPL scoring rules
//! - **Replacements**: Same-position candidates ranked by form and fixture difficulty
//! - **Lists**: Persisted wishlist and guillotine of player ids
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_planner::fpl::{FplClient, GameData};
//! use fpl_planner::planner::PlannerSandbox;
//! use fpl_planner::{EntryId, PlayerId};
//!
//! # async fn example() -> fpl_planner::Result<()> {
//! let client = FplClient::new();
//! let data = GameData::load(&client).await?;
//! let squad = client
//!     .entry_picks(EntryId::new(123456), data.current_gameweek())
//!     .await?;
//!
//! let mut sandbox = PlannerSandbox::new();
//! sandbox.initialize(&squad, &squad.picks, squad.entry_history.bank, squad.entry_history.value);
//! sandbox.add_change(PlayerId::new(1), PlayerId::new(2));
//!
//! let cost = sandbox.current_cost_summary(&data);
//! println!("{} transfers, {} points", cost.transfer_count, cost.points_hit);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your FPL entry ID to avoid passing it in every command:
//! ```bash
//! export FPL_ENTRY_ID=123456
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fixtures;
pub mod fpl;
pub mod lists;
pub mod planner;
pub mod points;
pub mod replacements;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use cli::types::{EntryId, Gameweek, PlayerId, Position, TeamId};
pub use error::{FplError, Result};

pub const ENTRY_ID_ENV_VAR: &str = "FPL_ENTRY_ID";
