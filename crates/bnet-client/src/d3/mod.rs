//! Diablo III community and game data clients.
//!
//! Profile and catalog endpoints (`/d3/...`) take a locale. Era and season
//! leaderboards (`/data/d3/...`) take none.

mod data;
mod leaderboard;
mod profile;
#[cfg(test)]
mod tests;

pub use data::{ActClient, ArtisanClient, CharacterClassClient, FollowerClient, ItemClient};
pub use leaderboard::{EraClient, SeasonClient};
pub use profile::ProfileClient;
