//! Core utilities shared across the planner
//!
//! - `cache`: expiring in-memory cache and file helpers
//! - `clock`: injectable time source

pub mod cache;
pub mod clock;

pub use cache::{
    cache_root, try_read_to_string, write_string, ExpiringCache, PlayerDataCache, RequestKind,
};
pub use clock::{Clock, ManualClock, SystemClock};
