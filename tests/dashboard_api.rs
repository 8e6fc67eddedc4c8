mod helpers;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use f1_dashboard::{
    make_app,
    models::{race::NextRace, standings::Standings, telemetry::FastestLap},
    services::dashboard::get_dashboard,
    utils::state::Clock,
    AppState, Config, SourceGateway,
};
use helpers::{fixed_now, FixtureGateway, PanickingGateway};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app_with(gateway: Arc<dyn SourceGateway>) -> axum::Router {
    let state = AppState::with_gateway(Config::default(), gateway, Clock::Fixed(fixed_now()));
    make_app(state)
}

fn get(uri: &str) -> Request<Body> {
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

fn full_season() -> FixtureGateway {
    FixtureGateway::new()
        .primary(
            "2025/standings/drivers",
            json!({"standings": [
                {"driver_name": "Oscar Piastri", "abbreviation": "PIA", "team": "McLaren", "points": 161},
                {"driver_name": "Lando Norris", "abbreviation": "NOR", "team": "McLaren", "points": 158}
            ]}),
        )
        .primary(
            "2025/standings/teams",
            json!({"standings": [{"team_name": "McLaren", "points": 319}]}),
        )
        .primary(
            "2025",
            json!({"races": [{"race_name": "Canadian Grand Prix", "location": "Montréal", "country": "Canada", "date": "2025-06-15T18:00:00Z"}]}),
        )
        .secondary(
            "sessions?session_type=Race&year=2025",
            json!([{"session_key": 7, "meeting_name": "Miami Grand Prix", "date_start": "2025-05-04T20:00:00+00:00", "date_end": "2025-05-04T22:00:00+00:00"}]),
        )
        .secondary(
            "laps?session_key=7",
            json!([
                {"driver_number": 81, "lap_number": 36, "lap_duration": 90.412},
                {"driver_number": 1, "lap_number": 20, "lap_duration": 91.0}
            ]),
        )
}

#[tokio::test]
async fn dashboard_combines_all_four_branches() {
    let app = app_with(Arc::new(full_season()));

    let response = app.oneshot(get("/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["top_drivers"][0]["driver_name"], "Oscar Piastri");
    assert_eq!(body["top_drivers"][1]["position"], 2);
    assert_eq!(body["top_teams"][0]["team_name"], "McLaren");
    assert_eq!(body["top_teams"][0]["points"], 319.0);
    assert_eq!(body["next_race"]["race_name"], "Canadian Grand Prix");
    assert_eq!(body["next_race"]["time_left"], "14 days, 6 hours");
    assert_eq!(body["fastest_lap"]["abbreviation"], "PIA");
    assert_eq!(body["fastest_lap"]["lap_time"], "1:30.412");
    assert_eq!(body["fastest_lap"]["sector_times"], json!([]));
}

#[tokio::test]
async fn dashboard_degrades_each_branch_independently() {
    let data = get_dashboard(Arc::new(FixtureGateway::new()), fixed_now())
        .await
        .expect("fallbacks are not errors");

    assert_eq!(data.top_drivers, Standings::fallback().drivers);
    assert_eq!(data.top_teams, Standings::fallback().teams);
    assert_eq!(data.next_race, NextRace::season_break());
    assert_eq!(data.fastest_lap, FastestLap::fallback());
}

#[tokio::test]
async fn escaped_branch_fault_is_a_server_error() {
    let app = app_with(Arc::new(PanickingGateway));

    let response = app.oneshot(get("/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = extract_json(response.into_body()).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Error processing dashboard data"));
    assert!(message.contains("upstream handler defect"));
}

#[tokio::test]
async fn f1_data_omits_fastest_lap() {
    let gateway = Arc::new(full_season());
    let app = app_with(gateway.clone());

    let response = app.oneshot(get("/f1-data")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert!(body.get("fastest_lap").is_none());
    assert_eq!(body["top_drivers"].as_array().unwrap().len(), 2);
    assert_eq!(gateway.count("secondary:laps"), 0);
}

#[tokio::test]
async fn narrow_endpoints_return_single_categories() {
    let app = app_with(Arc::new(full_season()));

    let drivers = app.clone().oneshot(get("/drivers")).await.unwrap();
    assert_eq!(drivers.status(), StatusCode::OK);
    let drivers = extract_json(drivers.into_body()).await;
    assert_eq!(drivers[0]["abbreviation"], "PIA");

    let teams = extract_json(app.clone().oneshot(get("/teams")).await.unwrap().into_body()).await;
    assert_eq!(teams[0]["position"], 1);

    let standings =
        extract_json(app.clone().oneshot(get("/standings")).await.unwrap().into_body()).await;
    assert_eq!(standings["top_drivers"][0]["abbreviation"], "PIA");
    assert_eq!(standings["top_teams"][0]["team_name"], "McLaren");

    let race = extract_json(app.clone().oneshot(get("/next-race")).await.unwrap().into_body()).await;
    assert_eq!(race["country"], "Canada");

    let lap = extract_json(app.oneshot(get("/fastest-lap")).await.unwrap().into_body()).await;
    assert_eq!(lap["race_name"], "Miami Grand Prix");
    assert_eq!(lap["date"], "2025-05-04");
}

#[tokio::test]
async fn fastest_laps_endpoint_honours_limit() {
    let app = app_with(Arc::new(full_season()));

    let response = app.clone().oneshot(get("/fastest-laps?limit=1")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["abbreviation"], "PIA");

    let response = app.oneshot(get("/fastest-laps")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn root_describes_the_service() {
    let app = app_with(Arc::new(FixtureGateway::new()));

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["data_sources"]["primary"], "https://live.f1api.dev");
    assert!(body["endpoints"]["/dashboard"].is_string());
}

#[tokio::test]
async fn zero_limit_returns_single_fastest_lap() {
    let app = app_with(Arc::new(full_season()));

    let response = app.oneshot(get("/fastest-laps?limit=0")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["abbreviation"], "PIA");
}

#[tokio::test]
async fn narrow_endpoint_faults_are_server_errors() {
    let cases = [
        ("/next-race", "Error processing next race"),
        ("/drivers", "Error processing driver standings"),
        ("/teams", "Error processing team standings"),
        ("/standings", "Error processing standings"),
        ("/fastest-lap", "Error processing fastest lap"),
        ("/fastest-laps?limit=3", "Error processing fastest laps"),
        ("/f1-data", "Error processing F1 data"),
    ];

    for (uri, prefix) in cases {
        let app = app_with(Arc::new(PanickingGateway));
        let response = app.oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");

        let body = extract_json(response.into_body()).await;
        let message = body["message"].as_str().unwrap();
        assert!(message.starts_with(prefix), "{uri}: {message}");
        assert!(message.contains("upstream handler defect"), "{uri}: {message}");
    }
}
