use serde_json::Value;

use crate::BnetError;
use crate::context::{ApiRequest, resource_client};
use crate::region::{Locale, Region};

resource_client! {
    /// Auction house snapshots.
    AuctionClient
}

resource_client! {
    /// WoW Token prices.
    TokenClient
}

impl AuctionClient {
    /// Returns the location of the latest auction house dump for a realm.
    pub async fn get_auction_data(
        &self,
        region: Region,
        realm: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "wow/auction/data")
                    .segment(realm)
                    .locale(locale),
            )
            .await
    }
}

impl TokenClient {
    /// Returns the current WoW Token price.
    pub async fn get_token_index(
        &self,
        region: Region,
        namespace: &str,
        locale: Locale,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "data/wow/token")
                    .index()
                    .namespace(namespace)
                    .locale(locale),
            )
            .await
    }
}
