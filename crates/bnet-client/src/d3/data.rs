use serde_json::Value;

use crate::BnetError;
use crate::context::{ApiRequest, resource_client};
use crate::region::{Locale, Region};

resource_client! {
    ActClient
}

resource_client! {
    /// Artisans and their recipes.
    ArtisanClient
}

resource_client! {
    /// Hero classes and their skills.
    CharacterClassClient
}

resource_client! {
    FollowerClient
}

resource_client! {
    /// Items and item types.
    ItemClient
}

impl ActClient {
    pub async fn get_act_index(&self, region: Region, locale: Locale) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "d3/data/act").locale(locale))
            .await
    }

    pub async fn get_act(
        &self,
        region: Region,
        act_id: u64,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "d3/data/act").id(act_id).locale(locale))
            .await
    }
}

impl ArtisanClient {
    /// Returns an artisan by slug: `blacksmith`, `jeweler` or `mystic`.
    pub async fn get_artisan(
        &self,
        region: Region,
        artisan: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "d3/data/artisan")
                    .segment(artisan)
                    .locale(locale),
            )
            .await
    }

    pub async fn get_recipe(
        &self,
        region: Region,
        artisan: &str,
        recipe: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "d3/data/artisan")
                    .segment(artisan)
                    .path("recipe")
                    .segment(recipe)
                    .locale(locale),
            )
            .await
    }
}

impl CharacterClassClient {
    pub async fn get_character_class(
        &self,
        region: Region,
        class_slug: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "d3/data/hero")
                    .segment(class_slug)
                    .locale(locale),
            )
            .await
    }

    pub async fn get_skill(
        &self,
        region: Region,
        class_slug: &str,
        skill_slug: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "d3/data/hero")
                    .segment(class_slug)
                    .path("skill")
                    .segment(skill_slug)
                    .locale(locale),
            )
            .await
    }
}

impl FollowerClient {
    /// Returns a follower by slug: `templar`, `scoundrel` or `enchantress`.
    pub async fn get_follower(
        &self,
        region: Region,
        follower: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "d3/data/follower")
                    .segment(follower)
                    .locale(locale),
            )
            .await
    }
}

impl ItemClient {
    /// Returns an item by its slug and id joined with a dash, e.g.
    /// `corrupted-ashbringer-Unique_Sword_2H_104_x1`.
    pub async fn get_item(
        &self,
        region: Region,
        slug_and_id: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "d3/data/item")
                    .segment(slug_and_id)
                    .locale(locale),
            )
            .await
    }

    pub async fn get_item_type_index(
        &self,
        region: Region,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "d3/data/item-type").locale(locale))
            .await
    }

    pub async fn get_item_type(
        &self,
        region: Region,
        item_type: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "d3/data/item-type")
                    .segment(item_type)
                    .locale(locale),
            )
            .await
    }
}
