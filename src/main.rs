//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fpl_planner::{
    cli::{Commands, Fpl},
    commands::{
        fixtures::handle_fixtures,
        lists::handle_list,
        plan::handle_plan,
        points::handle_points,
        replacements::{handle_browse, handle_replacements},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let app = Fpl::parse();

    match app.command {
        Commands::Fixtures {
            team,
            count,
            past,
            gw,
            json,
        } => handle_fixtures(team, count, past, gw, json).await?,

        Commands::Points { player, gw, json } => handle_points(player, gw, json).await?,

        Commands::Plan {
            entry,
            gw,
            swaps,
            json,
        } => handle_plan(entry, gw, swaps, json).await?,

        Commands::Replacements {
            player,
            entry,
            limit,
            within_budget,
        } => handle_replacements(player, entry, limit, within_budget).await?,

        Commands::Browse {
            position,
            entry,
            sort,
            max_price,
        } => handle_browse(position, entry, sort, max_price).await?,

        Commands::List { kind, add, remove } => handle_list(kind, add, remove).await?,
    }

    Ok(())
}
