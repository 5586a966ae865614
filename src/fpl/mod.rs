//! FPL API access: wire types, HTTP client and normalized game data.

pub mod data;
pub mod http;
pub mod types;

pub use data::{FixtureSource, GameData, PlayerPool};
pub use http::FplClient;
