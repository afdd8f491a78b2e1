use serde_json::Value;

use crate::BnetError;
use crate::context::{ApiRequest, resource_client};
use crate::region::{Locale, Region};

resource_client! {
    /// Character profiles from the community API.
    ///
    /// A profile request returns a basic dataset; each `fields` value adds
    /// one more section. The `get_*` shortcuts request a single section.
    CharacterProfileClient
}

resource_client! {
    /// Characters of the account that owns the token.
    UserClient
}

impl CharacterProfileClient {
    /// Returns a character profile, with the optional comma-separated
    /// `fields` sections. `None` or an empty string omits the parameter.
    pub async fn get_character_profile(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
        fields: Option<&str>,
    ) -> Result<Value, BnetError> {
        let mut request = ApiRequest::new(region, "wow/character")
            .segment(realm)
            .segment(character_name);
        if let Some(fields) = fields.filter(|f| !f.is_empty()) {
            request = request.query("fields", fields);
        }
        self.ctx.fetch(request.locale(locale)).await
    }

    async fn get_field(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        field: &'static str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_character_profile(region, realm, character_name, locale, Some(field))
            .await
    }

    pub async fn get_achievements(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "achievements", locale)
            .await
    }

    pub async fn get_appearance(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "appearance", locale)
            .await
    }

    /// Activity feed: recent loot, achievements and boss kills.
    pub async fn get_feed(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "feed", locale)
            .await
    }

    pub async fn get_guild(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "guild", locale)
            .await
    }

    pub async fn get_hunter_pets(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "hunterPets", locale)
            .await
    }

    /// Equipped items.
    pub async fn get_items(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "items", locale)
            .await
    }

    pub async fn get_mounts(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "mounts", locale)
            .await
    }

    pub async fn get_pets(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "pets", locale)
            .await
    }

    /// Battle pet slots in use.
    pub async fn get_pet_slots(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "petSlots", locale)
            .await
    }

    pub async fn get_professions(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "professions", locale)
            .await
    }

    /// Raid and boss kill progression.
    pub async fn get_progression(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "progression", locale)
            .await
    }

    pub async fn get_pvp(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "pvp", locale)
            .await
    }

    pub async fn get_quests(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "quests", locale)
            .await
    }

    pub async fn get_reputation(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "reputation", locale)
            .await
    }

    pub async fn get_statistics(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "statistics", locale)
            .await
    }

    /// Attributes such as health, power and secondary stats.
    pub async fn get_stats(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "stats", locale)
            .await
    }

    pub async fn get_talents(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "talents", locale)
            .await
    }

    pub async fn get_titles(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "titles", locale)
            .await
    }

    /// Raw character audit: empty sockets, missing enchants and the like.
    pub async fn get_audit(
        &self,
        region: Region,
        realm: &str,
        character_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_field(region, realm, character_name, "audit", locale)
            .await
    }
}

impl UserClient {
    /// Returns the characters of the account that authorized the token.
    pub async fn get_characters(&self, region: Region, locale: Locale) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "wow/user/characters").locale(locale))
            .await
    }
}
