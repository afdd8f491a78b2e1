use serde_json::Value;

use crate::BnetError;
use crate::context::{ApiRequest, resource_client};
use crate::region::{Locale, Region};

resource_client! {
    /// Mythic Keystone and Mythic raid leaderboards.
    MythicClient
}

resource_client! {
    /// Legacy Challenge Mode leaderboards.
    ChallengeClient
}

resource_client! {
    /// Rated PvP bracket leaderboards.
    PvpClient
}

impl MythicClient {
    /// Returns an index of Mythic Keystone leaderboard dungeon instances
    /// for a connected realm.
    pub async fn get_mythic_leaderboard_index(
        &self,
        region: Region,
        connected_realm_id: u64,
        namespace: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "data/wow/connected-realm")
                    .id(connected_realm_id)
                    .path("mythic-leaderboard")
                    .index()
                    .namespace(namespace)
                    .locale(locale),
            )
            .await
    }

    /// Returns a weekly Mythic Keystone leaderboard by period.
    pub async fn get_mythic_leaderboard(
        &self,
        region: Region,
        connected_realm_id: u64,
        dungeon_id: u64,
        period: u64,
        namespace: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "data/wow/connected-realm")
                    .id(connected_realm_id)
                    .path("mythic-leaderboard")
                    .id(dungeon_id)
                    .path("period")
                    .id(period)
                    .namespace(namespace)
                    .locale(locale),
            )
            .await
    }

    /// Returns the hall of fame for a raid and faction
    /// (`alliance` or `horde`).
    pub async fn get_mythic_raid_leaderboard(
        &self,
        region: Region,
        raid: &str,
        faction: &str,
        namespace: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "data/wow/leaderboard/hall-of-fame")
                    .segment(raid)
                    .segment(faction)
                    .namespace(namespace)
                    .locale(locale),
            )
            .await
    }

    /// Returns the current Mythic Keystone seasons and periods.
    pub async fn get_mythic_challenge_mode_index(
        &self,
        region: Region,
        namespace: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "data/wow/mythic-challenge-mode")
                    .index()
                    .namespace(namespace)
                    .locale(locale),
            )
            .await
    }
}

impl ChallengeClient {
    pub async fn get_challenge_realm_leaderboard(
        &self,
        region: Region,
        realm: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "wow/challenge")
                    .segment(realm)
                    .locale(locale),
            )
            .await
    }

    pub async fn get_challenge_region_leaderboard(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "wow/challenge/region").locale(locale))
            .await
    }
}

impl PvpClient {
    /// Returns the leaderboard for a bracket: `2v2`, `3v3`, `5v5` or `rbg`.
    pub async fn get_leaderboard(
        &self,
        region: Region,
        bracket: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "wow/leaderboard")
                    .segment(bracket)
                    .locale(locale),
            )
            .await
    }
}
