//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};

use crate::lists::ListKind;
use crate::replacements::SortKey;
use types::{EntryId, Gameweek, PlayerId, Position, Swap, TeamId};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a team's past or upcoming fixtures with difficulty, blanks and doubles.
    Fixtures {
        /// Premier League team id.
        #[clap(long, short)]
        team: TeamId,

        /// Number of fixtures to show.
        #[clap(long, short, default_value_t = 5)]
        count: usize,

        /// Show fixtures before the reference gameweek instead of after it.
        #[clap(long)]
        past: bool,

        /// Reference gameweek (defaults to the active gameweek).
        #[clap(long, short)]
        gw: Option<Gameweek>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Itemized points breakdown for one player in one gameweek.
    Points {
        #[clap(long, short)]
        player: PlayerId,

        /// Gameweek (defaults to the current gameweek).
        #[clap(long, short)]
        gw: Option<Gameweek>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Apply hypothetical transfers to your squad and show the cost.
    Plan {
        /// Entry ID (or set `FPL_ENTRY_ID` env var).
        #[clap(long, short)]
        entry: Option<EntryId>,

        /// Gameweek whose picks are loaded (defaults to the current gameweek).
        #[clap(long, short)]
        gw: Option<Gameweek>,

        /// Planned transfer as OUT:IN (repeatable).
        #[clap(long = "swap", short = 's')]
        swaps: Vec<Swap>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Ranked same-position replacements for a player in your squad.
    Replacements {
        #[clap(long, short)]
        player: PlayerId,

        /// Entry ID (or set `FPL_ENTRY_ID` env var).
        #[clap(long, short)]
        entry: Option<EntryId>,

        #[clap(long, short, default_value_t = 10)]
        limit: usize,

        /// Only show players affordable with the money in the bank.
        #[clap(long)]
        within_budget: bool,
    },

    /// Browse every player in a position outside your squad.
    Browse {
        /// GKP, DEF, MID or FWD.
        #[clap(long, short)]
        position: Position,

        /// Entry ID (or set `FPL_ENTRY_ID` env var).
        #[clap(long, short)]
        entry: Option<EntryId>,

        #[clap(long, value_enum, default_value_t = SortKey::Score)]
        sort: SortKey,

        /// Maximum price in tenths of a million (e.g. 65 for 6.5m).
        #[clap(long)]
        max_price: Option<i32>,
    },

    /// Show or edit the wishlist / guillotine.
    List {
        #[clap(value_enum)]
        kind: ListKind,

        #[clap(long)]
        add: Option<PlayerId>,

        #[clap(long)]
        remove: Option<PlayerId>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "fpl-planner", about = "Fantasy Premier League transfer planner")]
pub struct Fpl {
    #[clap(subcommand)]
    pub command: Commands,
}
