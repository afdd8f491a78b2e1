use serde_json::Value;

use crate::BnetError;
use crate::context::{ApiRequest, resource_client};
use crate::region::{Locale, Region};

resource_client! {
    AchievementClient
}

resource_client! {
    /// Raid and dungeon bosses.
    BossClient
}

resource_client! {
    /// Items and item sets.
    ItemClient
}

resource_client! {
    MountClient
}

resource_client! {
    /// Battle pets, their abilities, species and stats.
    PetClient
}

resource_client! {
    /// Class specializations as game data.
    PlayableSpecializationClient
}

resource_client! {
    QuestClient
}

resource_client! {
    /// Profession recipes.
    RecipeClient
}

resource_client! {
    SpellClient
}

resource_client! {
    /// Dungeon and raid zones.
    ZoneClient
}

impl AchievementClient {
    pub async fn get_achievement(
        &self,
        region: Region,
        achievement_id: u64,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "wow/achievement")
                    .id(achievement_id)
                    .locale(locale),
            )
            .await
    }
}

impl BossClient {
    /// Returns every boss with its encounter data.
    pub async fn get_master_list(&self, region: Region, locale: Locale) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "wow/boss").index().locale(locale))
            .await
    }

    pub async fn get_boss(
        &self,
        region: Region,
        boss_id: u64,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "wow/boss").id(boss_id).locale(locale))
            .await
    }
}

impl ItemClient {
    pub async fn get_item(
        &self,
        region: Region,
        item_id: u64,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "wow/item").id(item_id).locale(locale))
            .await
    }

    pub async fn get_item_set(
        &self,
        region: Region,
        set_id: u64,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "wow/item/set").id(set_id).locale(locale))
            .await
    }
}

impl MountClient {
    /// Returns every mount in the game.
    pub async fn get_mounts(&self, region: Region, locale: Locale) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "wow/mount").index().locale(locale))
            .await
    }
}

impl PetClient {
    /// Returns every battle and vanity pet.
    pub async fn get_master_list(&self, region: Region, locale: Locale) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "wow/pet").index().locale(locale))
            .await
    }

    pub async fn get_ability(
        &self,
        region: Region,
        ability_id: u64,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "wow/pet/ability")
                    .id(ability_id)
                    .locale(locale),
            )
            .await
    }

    pub async fn get_species(
        &self,
        region: Region,
        species_id: u64,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "wow/pet/species")
                    .id(species_id)
                    .locale(locale),
            )
            .await
    }

    /// Returns the stats of a species at a level, breed and quality.
    pub async fn get_stats(
        &self,
        region: Region,
        species_id: u64,
        level: u32,
        breed_id: u32,
        quality_id: u32,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "wow/pet/stats")
                    .id(species_id)
                    .query_value("level", level)
                    .query_value("breedId", breed_id)
                    .query_value("qualityId", quality_id)
                    .locale(locale),
            )
            .await
    }
}

impl PlayableSpecializationClient {
    pub async fn get_playable_specialization_index(
        &self,
        region: Region,
        namespace: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "data/wow/playable-specialization")
                    .index()
                    .namespace(namespace)
                    .locale(locale),
            )
            .await
    }

    pub async fn get_playable_specialization(
        &self,
        region: Region,
        spec_id: u64,
        namespace: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "data/wow/playable-specialization")
                    .id(spec_id)
                    .namespace(namespace)
                    .locale(locale),
            )
            .await
    }
}

impl QuestClient {
    pub async fn get_quest(
        &self,
        region: Region,
        quest_id: u64,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "wow/quest").id(quest_id).locale(locale))
            .await
    }
}

impl RecipeClient {
    pub async fn get_recipe(
        &self,
        region: Region,
        recipe_id: u64,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "wow/recipe").id(recipe_id).locale(locale))
            .await
    }
}

impl SpellClient {
    pub async fn get_spell(
        &self,
        region: Region,
        spell_id: u64,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "wow/spell").id(spell_id).locale(locale))
            .await
    }
}

impl ZoneClient {
    /// Returns every zone.
    pub async fn get_zones(&self, region: Region, locale: Locale) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "wow/zone").index().locale(locale))
            .await
    }

    pub async fn get_zone(
        &self,
        region: Region,
        zone_id: u64,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "wow/zone").id(zone_id).locale(locale))
            .await
    }
}
