//! World of Warcraft game data and community API clients.
//!
//! Game data endpoints (`/data/wow/...`) take a namespace such as
//! `dynamic-eu`; see [`Namespace`](crate::Namespace). Community endpoints
//! (`/wow/...`) take only a locale.

mod catalog;
mod character;
mod data_resources;
mod economy;
mod guild;
mod leaderboard;
mod realm;

pub use catalog::{
    AchievementClient, BossClient, ItemClient, MountClient, PetClient,
    PlayableSpecializationClient, QuestClient, RecipeClient, SpellClient, ZoneClient,
};
pub use character::{CharacterProfileClient, UserClient};
pub use data_resources::DataResourcesClient;
pub use economy::{AuctionClient, TokenClient};
pub use guild::GuildProfileClient;
pub use leaderboard::{ChallengeClient, MythicClient, PvpClient};
pub use realm::{ConnectedRealmClient, RealmClient, RegionClient};
