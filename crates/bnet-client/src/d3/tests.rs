use super::*;
use crate::region::{Locale, Region};
use crate::testutil::{last_request, mock_context};

#[tokio::test]
async fn account_battletag_is_escaped() {
    let (_server, ctx) = mock_context().await;
    ProfileClient::new(ctx.clone())
        .get_account(Region::Eu, "Name#1234", Locale::EnGb)
        .await
        .unwrap();
    assert_eq!(
        last_request(&ctx),
        "/d3/profile/Name%231234/?locale=en_GB&access_token=test-token"
    );
}

#[tokio::test]
async fn hero_item_paths() {
    let (_server, ctx) = mock_context().await;
    let profile = ProfileClient::new(ctx.clone());

    profile
        .get_hero(Region::Us, "Player#1", 92003040, Locale::EnUs)
        .await
        .unwrap();
    assert_eq!(
        last_request(&ctx),
        "/d3/profile/Player%231/hero/92003040?locale=en_US&access_token=test-token"
    );

    profile
        .get_detailed_hero_items(Region::Us, "Player#1", 92003040, Locale::EnUs)
        .await
        .unwrap();
    assert!(last_request(&ctx).starts_with("/d3/profile/Player%231/hero/92003040/items?"));

    profile
        .get_detailed_follower_items(Region::Us, "Player#1", 92003040, Locale::EnUs)
        .await
        .unwrap();
    assert!(last_request(&ctx).starts_with("/d3/profile/Player%231/hero/92003040/follower-items?"));
}

#[tokio::test]
async fn leaderboards_have_no_locale() {
    let (_server, ctx) = mock_context().await;
    let eras = EraClient::new(ctx.clone());
    let seasons = SeasonClient::new(ctx.clone());

    eras.get_era_index(Region::Eu).await.unwrap();
    assert_eq!(last_request(&ctx), "/data/d3/era/?access_token=test-token");

    eras.get_era(Region::Eu, 1).await.unwrap();
    assert_eq!(last_request(&ctx), "/data/d3/era/1?access_token=test-token");

    eras.get_era_leaderboard(Region::Eu, 1, "rift-barbarian")
        .await
        .unwrap();
    assert_eq!(
        last_request(&ctx),
        "/data/d3/era/1/leaderboard/rift-barbarian?access_token=test-token"
    );

    seasons.get_season_index(Region::Eu).await.unwrap();
    assert_eq!(last_request(&ctx), "/data/d3/season/?access_token=test-token");

    seasons
        .get_season_leaderboard(Region::Eu, 12, "achievement-points")
        .await
        .unwrap();
    assert_eq!(
        last_request(&ctx),
        "/data/d3/season/12/leaderboard/achievement-points?access_token=test-token"
    );
}

#[tokio::test]
async fn catalog_paths() {
    let (_server, ctx) = mock_context().await;

    ActClient::new(ctx.clone())
        .get_act_index(Region::Us, Locale::EnUs)
        .await
        .unwrap();
    assert_eq!(last_request(&ctx), "/d3/data/act?locale=en_US&access_token=test-token");

    ActClient::new(ctx.clone())
        .get_act(Region::Us, 3, Locale::EnUs)
        .await
        .unwrap();
    assert!(last_request(&ctx).starts_with("/d3/data/act/3?"));

    ArtisanClient::new(ctx.clone())
        .get_recipe(Region::Us, "blacksmith", "apprentice-flamberge", Locale::EnUs)
        .await
        .unwrap();
    assert!(last_request(&ctx).starts_with("/d3/data/artisan/blacksmith/recipe/apprentice-flamberge?"));

    CharacterClassClient::new(ctx.clone())
        .get_skill(Region::Us, "barbarian", "bash", Locale::EnUs)
        .await
        .unwrap();
    assert!(last_request(&ctx).starts_with("/d3/data/hero/barbarian/skill/bash?"));

    FollowerClient::new(ctx.clone())
        .get_follower(Region::Us, "templar", Locale::EnUs)
        .await
        .unwrap();
    assert!(last_request(&ctx).starts_with("/d3/data/follower/templar?"));

    ItemClient::new(ctx.clone())
        .get_item(Region::Us, "corrupted-ashbringer-Unique_Sword_2H_104_x1", Locale::EnUs)
        .await
        .unwrap();
    assert!(last_request(&ctx).starts_with("/d3/data/item/corrupted-ashbringer-Unique_Sword_2H_104_x1?"));

    ItemClient::new(ctx.clone())
        .get_item_type_index(Region::Us, Locale::EnUs)
        .await
        .unwrap();
    assert!(last_request(&ctx).starts_with("/d3/data/item-type?"));

    ItemClient::new(ctx.clone())
        .get_item_type(Region::Us, "sword2h", Locale::EnUs)
        .await
        .unwrap();
    assert_eq!(
        last_request(&ctx),
        "/d3/data/item-type/sword2h?locale=en_US&access_token=test-token"
    );
}
