use serde_json::Value;

use crate::BnetError;
use crate::context::{ApiRequest, resource_client};
use crate::region::{Locale, Region};

resource_client! {
    /// Static lookup lists: races, classes, rewards, perks and types.
    DataResourcesClient
}

impl DataResourcesClient {
    async fn get_list(
        &self,
        region: Region,
        path: &'static str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, path).locale(locale))
            .await
    }

    pub async fn get_battlegroups(&self, region: Region, locale: Locale) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "wow/data/battlegroups")
                    .index()
                    .locale(locale),
            )
            .await
    }

    pub async fn get_character_races(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_list(region, "wow/data/character/races", locale)
            .await
    }

    pub async fn get_character_classes(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_list(region, "wow/data/character/classes", locale)
            .await
    }

    pub async fn get_character_achievements(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_list(region, "wow/data/character/achievements", locale)
            .await
    }

    pub async fn get_guild_rewards(&self, region: Region, locale: Locale) -> Result<Value, BnetError> {
        self.get_list(region, "wow/data/guild/rewards", locale)
            .await
    }

    pub async fn get_guild_perks(&self, region: Region, locale: Locale) -> Result<Value, BnetError> {
        self.get_list(region, "wow/data/guild/perks", locale)
            .await
    }

    pub async fn get_guild_achievements(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_list(region, "wow/data/guild/achievements", locale)
            .await
    }

    pub async fn get_item_classes(&self, region: Region, locale: Locale) -> Result<Value, BnetError> {
        self.get_list(region, "wow/data/item/classes", locale)
            .await
    }

    /// Talent trees for every class.
    pub async fn get_talents(&self, region: Region, locale: Locale) -> Result<Value, BnetError> {
        self.get_list(region, "wow/data/talents", locale).await
    }

    pub async fn get_pet_types(&self, region: Region, locale: Locale) -> Result<Value, BnetError> {
        self.get_list(region, "wow/data/pet/types", locale).await
    }
}
