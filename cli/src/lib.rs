//! NBA player career summary
//!
//! Resolves a player by full name against the stats service roster, pulls
//! the player's season-by-season career table and award list, and folds
//! them into a flat [`PlayerSummary`] ready to print as JSON.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod provider;
pub mod roster;
pub mod summary;
pub mod table;

pub use config::AppConfig;
pub use error::{Result, SummaryError};
pub use provider::{NbaStatsClient, StatsProvider};
pub use roster::Player;
pub use summary::{summarize_player, PlayerSummary};
pub use table::Table;
