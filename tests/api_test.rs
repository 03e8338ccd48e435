//! End-to-end HTTP tests: a live server on an ephemeral port driven
//! with reqwest, with the Riot API mocked by wiremock.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing)]

use std::sync::Arc;
use std::time::Duration;

use opgl_data::app_state::AppState;
use opgl_data::config::ServiceConfig;
use opgl_data::domain::ResponseCache;
use opgl_data::riot::RiotClient;
use opgl_data::server;
use opgl_data::service::DataService;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(port: u16) -> ServiceConfig {
    ServiceConfig {
        riot_api_key: "TESTKEY".to_string(),
        server_port: port,
        request_timeout_secs: 5,
        max_retries: 0,
        cache_enabled: false,
        cache_ttl_secs: 60,
        cache_sweep_interval_secs: 300,
        match_fetch_concurrency: 2,
    }
}

/// Spawns the app on an ephemeral port, upstream pointed at `upstream`.
async fn spawn_app(upstream: &MockServer, with_cache: bool) -> String {
    let client = RiotClient::new("TESTKEY")
        .unwrap()
        .with_api_base(&upstream.uri())
        .unwrap()
        .with_max_retries(0);
    let cache = with_cache.then(|| Arc::new(ResponseCache::new(Duration::from_secs(60))));
    let data_service = Arc::new(DataService::new(Arc::new(client), cache, 2));
    let app = server::build_app(AppState { data_service });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn mock_account(game_name: &str, tag_line: &str, puuid: &str) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!(
            "/riot/account/v1/accounts/by-riot-id/{game_name}/{tag_line}"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "puuid": puuid,
            "gameName": game_name,
            "tagLine": tag_line
        })))
}

fn mock_summoner(puuid: &str) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("/lol/summoner/v4/summoners/by-puuid/{puuid}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "puuid": puuid,
            "profileIconId": 4567,
            "revisionDate": 1_700_000_000_000_i64,
            "summonerLevel": 742
        })))
}

fn mock_league(puuid: &str) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("/lol/league/v4/entries/by-puuid/{puuid}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "queueType": "RANKED_SOLO_5x5",
            "tier": "CHALLENGER",
            "rank": "I",
            "leaguePoints": 1204,
            "wins": 300,
            "losses": 100,
            "hotStreak": true
        }])))
}

fn match_body(match_id: &str) -> serde_json::Value {
    serde_json::json!({
        "metadata": {"matchId": match_id, "participants": ["p-1"]},
        "info": {
            "gameCreation": 1_700_000_000_000_i64,
            "gameDuration": 1800,
            "gameEndTimestamp": 1_700_001_800_000_i64,
            "gameMode": "CLASSIC",
            "gameVersion": "14.1.1",
            "queueId": 420,
            "participants": [{
                "puuid": "p-1",
                "riotIdGameName": "Faker",
                "riotIdTagline": "T1",
                "championName": "Azir",
                "teamId": 100,
                "champLevel": 18,
                "kills": 7, "deaths": 1, "assists": 9,
                "totalMinionsKilled": 230, "neutralMinionsKilled": 12,
                "goldEarned": 14000,
                "win": true
            }]
        }
    })
}

#[tokio::test]
async fn health_reports_service_and_version() {
    let upstream = MockServer::start().await;
    let base = spawn_app(&upstream, false).await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "opgl-data");
    assert!(body["version"].as_str().is_some());
}

#[tokio::test]
async fn platform_catalog_lists_routing() {
    let upstream = MockServer::start().await;
    let base = spawn_app(&upstream, false).await;

    let resp = reqwest::get(format!("{base}/config/platforms")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    let platforms = body.as_array().unwrap();
    assert!(platforms.iter().any(|p| {
        p["platform"] == "na1" && p["regional_route"] == "americas"
    }));
    assert!(platforms.iter().any(|p| {
        p["platform"] == "oc1" && p["regional_route"] == "sea"
    }));
}

#[tokio::test]
async fn unknown_region_is_rejected_with_400() {
    let upstream = MockServer::start().await;
    let base = spawn_app(&upstream, false).await;

    let resp = reqwest::get(format!("{base}/api/v1/summoners/xx9/by-riot-id/Faker/T1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], 1001);
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("unknown platform")
    );
}

#[tokio::test]
async fn summoner_profile_composes_account_summoner_and_league() {
    let upstream = MockServer::start().await;
    mock_account("Faker", "T1", "p-1").mount(&upstream).await;
    mock_summoner("p-1").mount(&upstream).await;
    mock_league("p-1").mount(&upstream).await;
    let base = spawn_app(&upstream, false).await;

    let resp = reqwest::get(format!("{base}/api/v1/summoners/kr/by-riot-id/Faker/T1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["puuid"], "p-1");
    assert_eq!(body["platform"], "kr");
    assert_eq!(body["summoner_level"], 742);
    assert_eq!(body["league_entries"][0]["tier"], "CHALLENGER");
    assert_eq!(body["league_entries"][0]["win_rate"], 75.0);
}

#[tokio::test]
async fn profile_is_served_from_cache_on_repeat() {
    let upstream = MockServer::start().await;
    mock_account("Faker", "T1", "p-1")
        .expect(1)
        .mount(&upstream)
        .await;
    mock_summoner("p-1").expect(1).mount(&upstream).await;
    mock_league("p-1").expect(1).mount(&upstream).await;
    let base = spawn_app(&upstream, true).await;

    for _ in 0..2 {
        let resp = reqwest::get(format!("{base}/api/v1/summoners/kr/by-riot-id/Faker/T1"))
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }
    // Mock expectations verify the upstream was hit exactly once.
}

#[tokio::test]
async fn unknown_riot_id_maps_to_404() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/riot/account/v1/accounts/by-riot-id/Nobody/EUW"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&upstream)
        .await;
    let base = spawn_app(&upstream, false).await;

    let resp = reqwest::get(format!("{base}/api/v1/summoners/euw1/by-riot-id/Nobody/EUW"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], 2001);
}

#[tokio::test]
async fn match_history_returns_id_page_with_defaults() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lol/match/v5/matches/by-puuid/p-1/ids"))
        .and(query_param("start", "0"))
        .and(query_param("count", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["KR_2", "KR_1"])))
        .mount(&upstream)
        .await;
    let base = spawn_app(&upstream, false).await;

    let resp = reqwest::get(format!("{base}/api/v1/summoners/kr/p-1/matches"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["puuid"], "p-1");
    assert_eq!(body["match_ids"], serde_json::json!(["KR_2", "KR_1"]));
}

#[tokio::test]
async fn recent_matches_preserve_upstream_order() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lol/match/v5/matches/by-puuid/p-1/ids"))
        .and(query_param("count", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["KR_2", "KR_1"])))
        .mount(&upstream)
        .await;
    for id in ["KR_1", "KR_2"] {
        Mock::given(method("GET"))
            .and(path(format!("/lol/match/v5/matches/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(match_body(id)))
            .mount(&upstream)
            .await;
    }
    let base = spawn_app(&upstream, false).await;

    let resp = reqwest::get(format!(
        "{base}/api/v1/summoners/kr/p-1/matches/recent?count=2"
    ))
    .await
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["match_id"], "KR_2");
    assert_eq!(matches[1]["match_id"], "KR_1");
    assert_eq!(matches[0]["participants"][0]["kda"], 16.0);
}

#[tokio::test]
async fn unknown_match_maps_to_404() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lol/match/v5/matches/KR_0"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&upstream)
        .await;
    let base = spawn_app(&upstream, false).await;

    let resp = reqwest::get(format!("{base}/api/v1/matches/kr/KR_0"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], 2002);
}

#[tokio::test]
async fn upstream_rate_limit_surfaces_as_429() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lol/league/v4/entries/by-puuid/p-1"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "3"))
        .mount(&upstream)
        .await;
    let base = spawn_app(&upstream, false).await;

    let resp = reqwest::get(format!("{base}/api/v1/summoners/kr/p-1/league"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 429);
    assert_eq!(
        resp.headers().get("Retry-After").unwrap().to_str().unwrap(),
        "3"
    );

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], 429);
}

#[tokio::test]
async fn run_fails_fast_when_port_is_taken() {
    let occupier = tokio::net::TcpListener::bind("0.0.0.0:0").await.unwrap();
    let port = occupier.local_addr().unwrap().port();

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        server::run(test_config(port)),
    )
    .await
    .expect("run should return promptly on bind failure");
    assert!(result.is_err());
}

#[tokio::test]
async fn run_accepts_connections_on_configured_port() {
    // Grab a free port, release it, and hope nobody grabs it back.
    let probe = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = probe.local_addr().unwrap().port();
    drop(probe);

    let handle = tokio::spawn(server::run(test_config(port)));

    let mut connected = false;
    for _ in 0..50 {
        if tokio::net::TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
            connected = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(connected, "server never started accepting connections");
    handle.abort();
}

#[tokio::test]
async fn wiring_does_not_mutate_configuration() {
    let config = test_config(8080);
    let before = config.clone();

    let state = server::build_state(&config).unwrap();
    let _app = server::build_app(state);

    assert_eq!(config, before);
    assert_eq!(config.bind_address(), ":8080");
}
