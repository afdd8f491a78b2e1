use serde_json::Value;

use crate::BnetError;
use crate::context::{ApiRequest, resource_client};
use crate::region::{Locale, Region};

resource_client! {
    /// Guild profiles from the community API.
    GuildProfileClient
}

impl GuildProfileClient {
    async fn get_fields(
        &self,
        region: Region,
        realm: &str,
        guild_name: &str,
        fields: &'static str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "wow/guild")
                    .segment(realm)
                    .segment(guild_name)
                    .query("fields", fields)
                    .locale(locale),
            )
            .await
    }

    /// Returns the guild profile with its achievements and challenge
    /// sections.
    pub async fn get_profile(
        &self,
        region: Region,
        realm: &str,
        guild_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_fields(region, realm, guild_name, "achievements,challenge", locale)
            .await
    }

    pub async fn get_members(
        &self,
        region: Region,
        realm: &str,
        guild_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_fields(region, realm, guild_name, "members", locale)
            .await
    }

    pub async fn get_achievements(
        &self,
        region: Region,
        realm: &str,
        guild_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_fields(region, realm, guild_name, "achievements", locale)
            .await
    }

    pub async fn get_news(
        &self,
        region: Region,
        realm: &str,
        guild_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_fields(region, realm, guild_name, "news", locale)
            .await
    }

    pub async fn get_challenge(
        &self,
        region: Region,
        realm: &str,
        guild_name: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.get_fields(region, realm, guild_name, "challenge", locale)
            .await
    }
}
