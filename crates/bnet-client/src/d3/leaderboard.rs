use serde_json::Value;

use crate::BnetError;
use crate::context::{ApiRequest, resource_client};
use crate::region::Region;

resource_client! {
    /// Era leaderboards.
    EraClient
}

resource_client! {
    /// Season leaderboards.
    SeasonClient
}

impl EraClient {
    pub async fn get_era_index(&self, region: Region) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "data/d3/era").index())
            .await
    }

    pub async fn get_era(&self, region: Region, era_id: u64) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "data/d3/era").id(era_id))
            .await
    }

    /// Returns one leaderboard of an era, e.g. `rift-barbarian`.
    pub async fn get_era_leaderboard(
        &self,
        region: Region,
        era_id: u64,
        leaderboard: &str,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "data/d3/era")
                    .id(era_id)
                    .path("leaderboard")
                    .segment(leaderboard),
            )
            .await
    }
}

impl SeasonClient {
    pub async fn get_season_index(&self, region: Region) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "data/d3/season").index())
            .await
    }

    pub async fn get_season(&self, region: Region, season_id: u64) -> Result<Value, BnetError> {
        self.ctx
            .fetch(ApiRequest::new(region, "data/d3/season").id(season_id))
            .await
    }

    /// Returns one leaderboard of a season, e.g. `achievement-points`.
    pub async fn get_season_leaderboard(
        &self,
        region: Region,
        season_id: u64,
        leaderboard: &str,
    ) -> Result<Value, BnetError> {
        self.ctx
            .fetch(
                ApiRequest::new(region, "data/d3/season")
                    .id(season_id)
                    .path("leaderboard")
                    .segment(leaderboard),
            )
            .await
    }
}
