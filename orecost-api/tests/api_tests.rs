//! Integration tests for orecost-api endpoints
//!
//! The router is driven directly via `oneshot` with stubbed upstream
//! sources, so no network is involved.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

use orecost_api::catalog::EquipmentCatalog;
use orecost_api::coc::{ClanSource, PlayerSource, RawReply};
use orecost_api::{build_router, AppState};

/// Player stub keyed by normalized tag; unknown tags get a 404.
#[derive(Default)]
struct StubPlayers {
    replies: HashMap<String, RawReply>,
}

#[async_trait]
impl PlayerSource for StubPlayers {
    async fn player_raw(&self, tag: &str) -> RawReply {
        self.replies.get(tag).cloned().unwrap_or(RawReply {
            body: Vec::new(),
            status: 404,
            error: None,
        })
    }
}

#[derive(Default)]
struct StubClans {
    replies: HashMap<String, RawReply>,
}

#[async_trait]
impl ClanSource for StubClans {
    async fn clan_members_raw(&self, tag: &str) -> RawReply {
        self.replies.get(tag).cloned().unwrap_or(RawReply {
            body: Vec::new(),
            status: 404,
            error: None,
        })
    }
}

fn ok_reply(value: Value) -> RawReply {
    RawReply {
        body: serde_json::to_vec(&value).unwrap(),
        status: 200,
        error: None,
    }
}

/// Catalog with one common equipment and a three-level cost table.
fn test_catalog() -> EquipmentCatalog {
    serde_json::from_value(json!({
        "items": [
            {"name": "Rage Vial", "rarity": "COMMON", "hero": "BARBARIAN_KING", "id": 1},
            {"name": "Giant Arrow", "rarity": "COMMON", "hero": "ARCHER_QUEEN", "id": 2}
        ],
        "commonCostsPerLevel": [
            {"shiny": 10, "glowy": 1, "starry": 0},
            {"shiny": 20, "glowy": 2, "starry": 0},
            {"shiny": 30, "glowy": 3, "starry": 0}
        ],
        "epicCostsPerLevel": []
    }))
    .unwrap()
}

fn setup_app(players: StubPlayers, clans: StubClans) -> axum::Router {
    let state = AppState::new(
        Arc::new(test_catalog()),
        Arc::new(players),
        Arc::new(clans),
        None,
    );
    build_router(state)
}

fn test_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

#[tokio::test]
async fn health_endpoint_reports_module_and_version() {
    let app = setup_app(StubPlayers::default(), StubClans::default());

    let response = app.oneshot(test_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "orecost-api");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn clan_costs_tolerates_a_failed_member() {
    let mut clans = StubClans::default();
    clans.replies.insert(
        "%23CLAN".to_string(),
        ok_reply(json!({"items": [
            {"tag": "#AAA", "name": "Alice"},
            {"tag": "#BBB", "name": "Bob"}
        ]})),
    );
    let mut players = StubPlayers::default();
    players.replies.insert(
        "%23AAA".to_string(),
        ok_reply(json!({"heroEquipment": [{"name": "Rage Vial", "level": 2}]})),
    );
    players.replies.insert(
        "%23BBB".to_string(),
        RawReply {
            body: Vec::new(),
            status: 500,
            error: None,
        },
    );
    let app = setup_app(players, clans);

    let response = app
        .oneshot(test_request("/v1/clans/%2523CLAN/hero-equipments/costs"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["clanTag"], "%23CLAN");
    assert_eq!(body["total"], json!({"shiny": 60, "glowy": 6, "starry": 0}));

    let members = body["members"].as_array().unwrap();
    assert_eq!(members.len(), 2);
    // Sorted descending by spend: Alice first, zeroed Bob second.
    assert_eq!(members[0]["name"], "Alice");
    assert_eq!(members[1]["name"], "Bob");
    assert_eq!(members[1]["spent"], json!({"shiny": 0, "glowy": 0, "starry": 0}));
}

#[tokio::test]
async fn clan_costs_propagates_member_list_status() {
    let app = setup_app(StubPlayers::default(), StubClans::default());

    let response = app
        .oneshot(test_request("/v1/clans/%2523NOPE/hero-equipments/costs"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn clan_tag_is_normalized_before_upstream_call() {
    let mut clans = StubClans::default();
    clans.replies.insert(
        "%23CLAN".to_string(),
        ok_reply(json!({"items": []})),
    );
    let app = setup_app(StubPlayers::default(), clans);

    // Bare tag in the path still reaches the %23-keyed stub.
    let response = app
        .oneshot(test_request("/v1/clans/CLAN/hero-equipments/costs"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["members"].as_array().unwrap().len(), 0);
    assert_eq!(body["total"], json!({"shiny": 0, "glowy": 0, "starry": 0}));
}

#[tokio::test]
async fn player_costs_returns_sorted_breakdown() {
    let mut players = StubPlayers::default();
    players.replies.insert(
        "%23TAG".to_string(),
        ok_reply(json!({"heroEquipment": [
            {"name": "Rage Vial", "level": 1},
            {"name": "Giant Arrow", "level": 0}
        ]})),
    );
    let app = setup_app(players, StubClans::default());

    let response = app
        .oneshot(test_request("/v1/players/%2523TAG/hero-equipments/costs"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["playerTag"], "%23TAG");
    assert_eq!(body["total"], json!({"shiny": 40, "glowy": 4, "starry": 0}));

    let equipments = body["equipments"].as_array().unwrap();
    assert_eq!(equipments.len(), 2);
    assert_eq!(equipments[0]["name"], "Giant Arrow");
    assert_eq!(equipments[1]["name"], "Rage Vial");
    assert_eq!(equipments[1]["rarity"], "COMMON");
}

#[tokio::test]
async fn player_costs_unknown_player_returns_upstream_status() {
    let app = setup_app(StubPlayers::default(), StubClans::default());

    let response = app
        .oneshot(test_request("/v1/players/%2523MISSING/hero-equipments/costs"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn hero_equipments_splits_available_and_unavailable() {
    let mut players = StubPlayers::default();
    players.replies.insert(
        "%23TAG".to_string(),
        ok_reply(json!({"heroEquipment": [
            {"name": "Rage Vial", "level": 4, "maxLevel": 18}
        ]})),
    );
    let app = setup_app(players, StubClans::default());

    let response = app
        .oneshot(test_request("/v1/players/%2523TAG/hero-equipments"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["playerTag"], "%23TAG");
    let available = body["available"].as_array().unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0]["name"], "Rage Vial");
    assert_eq!(available[0]["maxLevel"], 18);
    let unavailable = body["unavailable"].as_array().unwrap();
    assert_eq!(unavailable.len(), 1);
    assert_eq!(unavailable[0]["name"], "Giant Arrow");
    assert_eq!(unavailable[0]["available"], false);
}

#[tokio::test]
async fn whitespace_tag_is_rejected() {
    let app = setup_app(StubPlayers::default(), StubClans::default());

    let response = app
        .oneshot(test_request("/v1/players/%20/hero-equipments/costs"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "missing tag");
}

#[tokio::test]
async fn docs_and_spec_are_served() {
    let app = setup_app(StubPlayers::default(), StubClans::default());

    let response = app.clone().oneshot(test_request("/docs")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(test_request("/openapi.yaml")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("openapi: 3.0.3"));
    assert!(text.contains("/v1/clans/{tag}/hero-equipments/costs"));
}
