use serde_json::Value;

use crate::BnetError;
use crate::context::{ApiRequest, resource_client};
use crate::region::{Locale, Region};

resource_client! {
    /// Connected realm groups.
    ConnectedRealmClient
}

resource_client! {
    /// Realms and the legacy realm status list.
    RealmClient
}

resource_client! {
    /// Battle.net regions as game data.
    RegionClient
}

impl ConnectedRealmClient {
    /// Returns an index of connected realms.
    pub async fn get_connected_realm_index(
        &self,
        region: Region,
        namespace: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "data/wow/connected-realm")
                    .index()
                    .namespace(namespace)
                    .locale(locale),
            )
            .await
    }

    /// Returns a single connected realm by ID.
    pub async fn get_connected_realm(
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
                    .namespace(namespace)
                    .locale(locale),
            )
            .await
    }
}

impl RealmClient {
    /// Returns an index of realms.
    pub async fn get_realm_index(
        &self,
        region: Region,
        namespace: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "data/wow/realm")
                    .index()
                    .namespace(namespace)
                    .locale(locale),
            )
            .await
    }

    /// Returns a single realm by slug.
    pub async fn get_realm(
        &self,
        region: Region,
        realm_slug: &str,
        namespace: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "data/wow/realm")
                    .segment(realm_slug)
                    .namespace(namespace)
                    .locale(locale),
            )
            .await
    }

    /// Returns the status of every realm in the region.
    pub async fn get_realm_status(&self, region: Region, locale: Locale) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "wow/realm/status").locale(locale))
            .await
    }
}

impl RegionClient {
    pub async fn get_region_index(
        &self,
        region: Region,
        namespace: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "data/wow/region")
                    .index()
                    .namespace(namespace)
                    .locale(locale),
            )
            .await
    }

    pub async fn get_region(
        &self,
        region: Region,
        region_id: u64,
        namespace: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "data/wow/region")
                    .id(region_id)
                    .namespace(namespace)
                    .locale(locale),
            )
            .await
    }
}
