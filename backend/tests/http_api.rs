//! End-to-end checks of the statistics API over the bundled season.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use fcsmtop::Trace;
use fcsmtop::domain::ports::StoreKind;
use fcsmtop::domain::{LeagueStatsService, Season, TRACE_ID_HEADER};
use fcsmtop::inbound::http::clubs::{club_assists, club_form, club_matches, club_scorers};
use fcsmtop::inbound::http::health::health;
use fcsmtop::inbound::http::national::{national_assists, national_scorers, national_standings};
use fcsmtop::inbound::http::state::HttpState;
use fcsmtop::outbound::memory::InMemoryLeagueRepository;
use rstest::{fixture, rstest};
use serde_json::Value;

#[fixture]
fn state() -> HttpState {
    let store = InMemoryLeagueRepository::bundled().expect("bundled dataset");
    let stats = LeagueStatsService::new(Arc::new(store), "National");
    HttpState::new(
        Arc::new(stats),
        Season::new("2025").expect("season"),
        StoreKind::Memory,
    )
}

async fn get(state: HttpState, uri: &str) -> (StatusCode, Option<String>, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .service(
                web::scope("/api/v1")
                    .service(national_scorers)
                    .service(national_assists)
                    .service(national_standings)
                    .service(club_scorers)
                    .service(club_assists)
                    .service(club_matches)
                    .service(club_form),
            )
            .service(health),
    )
    .await;
    let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = test::read_body_json(response).await;
    (status, trace_id, body)
}

#[rstest]
#[actix_web::test]
async fn health_reports_the_memory_store(state: HttpState) {
    let (status, trace_id, body) = get(state, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(trace_id.is_some());
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "memory");
}

#[rstest]
#[actix_web::test]
async fn national_scorers_lead_with_bronn(state: HttpState) {
    let (status, _, body) = get(state, "/api/v1/national/buteurs?limit=3").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array body");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["full_name"], "Dylan Bronn");
    assert_eq!(rows[0]["goals"], 12);
    assert_eq!(rows[1]["full_name"], "Ibrahim Koné");
    let ranks: Vec<u64> = rows.iter().filter_map(|r| r["rank"].as_u64()).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[rstest]
#[actix_web::test]
async fn standings_hold_the_documented_invariants(state: HttpState) {
    let (status, _, body) = get(state, "/api/v1/national/classement").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array body");
    assert_eq!(rows.len(), 16);
    for row in rows {
        let won = row["won"].as_i64().expect("won");
        let drawn = row["drawn"].as_i64().expect("drawn");
        let lost = row["lost"].as_i64().expect("lost");
        assert_eq!(row["played"].as_i64(), Some(won + drawn + lost));
        assert_eq!(row["points"].as_i64(), Some(3 * won + drawn));
        let diff = row["goals_for"].as_i64().expect("gf") - row["goals_against"].as_i64().expect("ga");
        assert_eq!(row["goal_diff"].as_i64(), Some(diff));
    }
    let points: Vec<i64> = rows.iter().filter_map(|r| r["points"].as_i64()).collect();
    assert!(points.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(rows[0]["team_short"], "FCSM");
}

#[rstest]
#[actix_web::test]
async fn latest_match_comes_first(state: HttpState) {
    let (status, _, body) = get(state, "/api/v1/clubs/FCSM/matches?last=1").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array body");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["matchday"], 20);
    assert_eq!(rows[0]["home_team"], "Villefranche Beaujolais");
    assert_eq!(rows[0]["result"], "W");
}

#[rstest]
#[actix_web::test]
async fn unknown_club_errors_carry_the_trace_id(state: HttpState) {
    let (status, trace_id, body) = get(state, "/api/v1/clubs/XYZ/form").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "Club 'XYZ' introuvable");
    assert_eq!(body["traceId"].as_str(), trace_id.as_deref());
}

#[rstest]
#[actix_web::test]
async fn malformed_limits_are_rejected_before_aggregation(state: HttpState) {
    let (status, _, body) = get(state, "/api/v1/national/passeurs?limit=51").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], "limit");
    assert_eq!(body["details"]["code"], "out_of_range");
}
