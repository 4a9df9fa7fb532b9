use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use matchday_back::{
    config::AppConfig,
    dao::football_store::memory::MemoryFootballStore,
    routes,
    state::{AppState, SharedState},
};
use serde_json::{Value, json};
use tower::ServiceExt;

const TOKEN: &str = "let-me-in";

async fn app() -> (Router, SharedState) {
    let config = AppConfig::default().with_admin_token(Some(TOKEN.into()));
    let state = AppState::with_store(config, Arc::new(MemoryFootballStore::new())).await;
    (routes::router(state.clone()), state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

async fn admin(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header("x-admin-token", TOKEN)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

fn id_of(value: &Value) -> String {
    value["id"].as_str().unwrap().to_owned()
}

struct League {
    competition: String,
    season: String,
}

impl League {
    async fn create(app: &Router) -> Self {
        let (status, competition) = admin(
            app,
            "POST",
            "/admin/competitions",
            json!({"name": "Premier League", "country": "England"}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let (_, season) = admin(app, "POST", "/admin/seasons", json!({"name": "2023/24"})).await;
        Self {
            competition: id_of(&competition),
            season: id_of(&season),
        }
    }

    fn path(&self, tail: &str) -> String {
        format!(
            "/competitions/{}/seasons/{}/{tail}",
            self.competition, self.season
        )
    }

    async fn team(&self, app: &Router, name: &str) -> String {
        let (_, team) = admin(app, "POST", "/admin/teams", json!({"name": name})).await;
        let team_id = id_of(&team);
        let (status, _) = admin(
            app,
            "POST",
            &format!("/admin{}", self.path("teams")),
            json!({"team_id": team_id}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        team_id
    }

    async fn game(&self, app: &Router, home: &str, away: &str, goals: &[&str]) -> String {
        let (status, game) = admin(
            app,
            "POST",
            "/admin/games",
            json!({
                "competition_id": self.competition,
                "season_id": self.season,
                "home_team_id": home,
                "away_team_id": away,
                "kickoff": "2024-08-17T14:00:00Z",
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let game_id = id_of(&game);
        for (minute, side) in goals.iter().enumerate() {
            let (status, _) = admin(
                app,
                "POST",
                &format!("/admin/games/{game_id}/goals"),
                json!({"side": side, "minute": minute + 1}),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }
        game_id
    }
}

#[tokio::test]
async fn healthcheck_reports_ok_with_store() {
    let (app, _) = app().await;
    let (status, body) = get_json(&app, "/healthcheck").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn degraded_mode_answers_503() {
    let (app, state) = app().await;
    state.clear_store().await;

    let (status, _) = get_json(&app, "/teams").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let (status, body) = get_json(&app, "/healthcheck").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn admin_routes_require_token() {
    let (app, _) = app().await;
    let request = |token: Option<&str>| {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/admin/seasons")
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header("x-admin-token", token);
        }
        builder
            .body(Body::from(json!({"name": "2024/25"}).to_string()))
            .unwrap()
    };

    let (status, _) = send(&app, request(None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&app, request(Some("wrong"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&app, request(Some(TOKEN))).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn admin_area_is_closed_without_configured_token() {
    let state =
        AppState::with_store(AppConfig::default(), Arc::new(MemoryFootballStore::new())).await;
    let app = routes::router(state);
    let (status, _) = admin(&app, "POST", "/admin/seasons", json!({"name": "2024/25"})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn invalid_payload_is_rejected() {
    let (app, _) = app().await;
    let (status, _) = admin(&app, "POST", "/admin/teams", json!({"name": "   "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn league_table_end_to_end() {
    let (app, _) = app().await;
    let league = League::create(&app).await;
    let arsenal = league.team(&app, "Arsenal").await;
    let brentford = league.team(&app, "Brentford").await;
    let chelsea = league.team(&app, "Chelsea").await;

    league
        .game(&app, &arsenal, &brentford, &["home", "home"])
        .await;
    league
        .game(&app, &brentford, &chelsea, &["home", "away"])
        .await;
    league.game(&app, &chelsea, &arsenal, &[]).await;

    let (status, table) = get_json(&app, &league.path("table")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(table["competition"]["name"], "Premier League");

    let rows = table["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["team_name"], "Arsenal");
    assert_eq!(rows[0]["points"], 4);
    assert_eq!(rows[0]["position"], 1);
    assert_eq!(rows[1]["team_name"], "Chelsea");
    assert_eq!(rows[1]["points"], 2);
    assert_eq!(rows[2]["team_name"], "Brentford");
    assert_eq!(rows[2]["points"], 1);
    assert_eq!(rows[2]["losses"], 1);
    assert!(table["unknown_team_ids"].as_array().unwrap().is_empty());

    let (_, games) = get_json(&app, &league.path("games")).await;
    assert_eq!(games.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unknown_competition_table_is_not_found() {
    let (app, _) = app().await;
    let league = League::create(&app).await;
    let uri = format!(
        "/competitions/{}/seasons/{}/table",
        uuid::Uuid::new_v4(),
        league.season
    );
    let (status, body) = get_json(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("competition"));
}

#[tokio::test]
async fn game_detail_shows_score_and_timeline() {
    let (app, _) = app().await;
    let league = League::create(&app).await;
    let home = league.team(&app, "Arsenal").await;
    let away = league.team(&app, "Chelsea").await;
    let game_id = league.game(&app, &home, &away, &["away", "home", "home"]).await;

    let (status, detail) = get_json(&app, &format!("/games/{game_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["game"]["score"]["home"], 2);
    assert_eq!(detail["game"]["score"]["away"], 1);
    let minutes: Vec<_> = detail["timeline"]
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["minute"].as_u64().unwrap())
        .collect();
    assert_eq!(minutes, [1, 2, 3]);
    assert_eq!(detail["timeline"][0]["type"], "goal");

    let (status, _) = admin(&app, "DELETE", &format!("/admin/games/{game_id}"), json!({})).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = get_json(&app, &format!("/games/{game_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_rejects_blank_query() {
    let (app, _) = app().await;
    let (status, _) = get_json(&app, "/search?q=%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    admin(&app, "POST", "/admin/teams", json!({"name": "Tottenham Hotspur"})).await;
    let (status, hits) = get_json(&app, "/search?q=hot").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits["teams"][0]["name"], "Tottenham Hotspur");
}

#[tokio::test]
async fn favourites_need_a_user() {
    let (app, _) = app().await;
    let (status, _) = get_json(&app, "/favourites").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, team) = admin(&app, "POST", "/admin/teams", json!({"name": "Arsenal"})).await;
    let team_id = id_of(&team);
    let add = || {
        Request::builder()
            .method("POST")
            .uri("/favourites")
            .header("x-user-id", "alice")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({"kind": "team", "target_id": team_id}).to_string(),
            ))
            .unwrap()
    };
    let (status, item) = send(&app, add()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item["name"], "Arsenal");
    send(&app, add()).await;

    let list = Request::builder()
        .uri("/favourites")
        .header("x-user-id", "alice")
        .body(Body::empty())
        .unwrap();
    let (status, favourites) = send(&app, list).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(favourites.as_array().unwrap().len(), 1);

    let remove = Request::builder()
        .method("DELETE")
        .uri(format!("/favourites/team/{team_id}"))
        .header("x-user-id", "alice")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, remove).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn openapi_document_lists_league_table() {
    let (app, _) = app().await;
    let (status, doc) = get_json(&app, "/api-doc/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["version"], env!("CARGO_PKG_VERSION"));
    assert!(
        doc["paths"]
            .get("/competitions/{competition_id}/seasons/{season_id}/table")
            .is_some()
    );
}

#[tokio::test]
async fn competition_with_games_is_not_deleted() {
    let (app, _) = app().await;
    let league = League::create(&app).await;
    let home = league.team(&app, "Arsenal").await;
    let away = league.team(&app, "Chelsea").await;
    let game_id = league.game(&app, &home, &away, &["home"]).await;

    let uri = format!("/admin/competitions/{}", league.competition);
    let (status, _) = admin(&app, "DELETE", &uri, json!({})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (status, _) = get_json(&app, &format!("/games/{game_id}")).await;
    assert_eq!(status, StatusCode::OK);

    admin(&app, "DELETE", &format!("/admin/games/{game_id}"), json!({})).await;
    let (status, _) = admin(&app, "DELETE", &uri, json!({})).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}
