//! StarCraft II profile clients.
//!
//! Profiles are addressed by the numeric SC2 region id, not the host
//! region; see [`Sc2Region`].

use serde_json::Value;

use crate::BnetError;
use crate::context::{ApiRequest, resource_client};
use crate::region::{Locale, Region, Sc2Region};

resource_client! {
    /// Player profiles and the static data they reference.
    ProfileClient
}

impl ProfileClient {
    /// Returns static achievement and reward data for a region.
    pub async fn get_static(
        &self,
        region: Region,
        sc2_region: Sc2Region,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "sc2/static/profile")
                    .id(sc2_region.id())
                    .locale(locale),
            )
            .await
    }

    /// Returns name, avatar and links for a profile.
    pub async fn get_metadata(
        &self,
        region: Region,
        sc2_region: Sc2Region,
        realm_id: u32,
        profile_id: u64,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "sc2/metadata/profile")
                    .id(sc2_region.id())
                    .id(realm_id)
                    .id(profile_id)
                    .locale(locale),
            )
            .await
    }

    pub async fn get_profile(
        &self,
        region: Region,
        sc2_region: Sc2Region,
        realm_id: u32,
        profile_id: u64,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "sc2/profile")
                    .id(sc2_region.id())
                    .id(realm_id)
                    .id(profile_id)
                    .locale(locale),
            )
            .await
    }
}
