mod test_utils;

use reqwest::StatusCode;
use serde_json::json;

use podium_app::test_utils::tests::{MockLeaderboardCache, MockPlayerRepository};
use podium_types::{common::Player, errors::ApplicationError};

use crate::test_utils::tests::{setup_web_app, setup_web_app_with};

fn names(players: &[Player]) -> Vec<&str> {
    players.iter().map(|p| p.name.as_str()).collect()
}

#[tokio::test]
async fn test_top_players_after_create_comes_from_cache() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;

    let res = app
        .client
        .post(app.url("/players"))
        .json(&json!({ "name": "Ada", "score": 100 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(app.players.top_by_score_calls(), vec![100]);

    let res = app
        .client
        .get(app.url("/players/top"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let top: Vec<Player> = res.json().await.unwrap();
    assert_eq!(names(&top), vec!["Ada"]);
    assert_eq!(
        app.players.top_by_score_calls(),
        vec![100],
        "Leaderboard should be served from cache"
    );
    Ok(())
}

#[tokio::test]
async fn test_top_players_with_cache_down_reads_store() -> Result<(), ApplicationError> {
    let players = MockPlayerRepository::with_players(vec![
        Player::new("Bob".to_string(), 90),
        Player::new("Ada".to_string(), 100),
        Player::new("Cid".to_string(), 80),
    ]);
    let cache = MockLeaderboardCache::new();
    cache.fail_gets(true);
    cache.fail_sets(true);
    let app = setup_web_app_with(players, cache).await?;

    let res = app
        .client
        .get(app.url("/players/top"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let top: Vec<Player> = res.json().await.unwrap();
    assert_eq!(names(&top), vec!["Ada", "Bob", "Cid"]);
    assert_eq!(app.players.top_by_score_calls(), vec![10]);
    assert_eq!(app.cache.set_calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_top_players_store_failure_is_500() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    app.players.fail_top_queries(true);

    let res = app
        .client
        .get(app.url("/players/top"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}
