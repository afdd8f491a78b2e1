use serde_json::Value;

use crate::BnetError;
use crate::context::{ApiRequest, resource_client};
use crate::region::{Locale, Region};

resource_client! {
    /// Accounts and heroes, addressed by BattleTag.
    ///
    /// BattleTags go into the path as-is (`Name#1234`); the `#` is escaped.
    ProfileClient
}

impl ProfileClient {
    fn hero<'a>(region: Region, battletag: &'a str, hero_id: u64) -> ApiRequest<'a> {
        ApiRequest::new(region, "d3/profile")
            .segment(battletag)
            .path("hero")
            .id(hero_id)
    }

    /// Returns the account profile.
    pub async fn get_account(
        &self,
        region: Region,
        battletag: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "d3/profile")
                    .segment(battletag)
                    .index()
                    .locale(locale),
            )
            .await
    }

    /// Returns a single hero.
    pub async fn get_hero(
        &self,
        region: Region,
        battletag: &str,
        hero_id: u64,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(Self::hero(region, battletag, hero_id).locale(locale))
            .await
    }

    /// Returns every item equipped by a hero.
    pub async fn get_detailed_hero_items(
        &self,
        region: Region,
        battletag: &str,
        hero_id: u64,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                Self::hero(region, battletag, hero_id)
                    .path("items")
                    .locale(locale),
            )
            .await
    }

    /// Returns every item equipped by a hero's followers.
    pub async fn get_detailed_follower_items(
        &self,
        region: Region,
        battletag: &str,
        hero_id: u64,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                Self::hero(region, battletag, hero_id)
                    .path("follower-items")
                    .locale(locale),
            )
            .await
    }
}
