use actix_web::http::header::LOCATION;
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use tally_core::db::open_db_in_memory;
use tally_web::state::AppState;

fn fresh_state() -> web::Data<AppState> {
    web::Data::new(AppState::new(open_db_in_memory().unwrap()))
}

#[actix_web::test]
async fn root_redirects_to_counter() {
    let app = test::init_service(
        App::new()
            .app_data(fresh_state())
            .configure(tally_web::configure),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/counter");
}

#[actix_web::test]
async fn redirect_target_renders_same_content_as_direct_visit() {
    let app = test::init_service(
        App::new()
            .app_data(fresh_state())
            .configure(tally_web::configure),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let target = resp
        .headers()
        .get(LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let via_redirect =
        test::call_and_read_body(&app, test::TestRequest::get().uri(&target).to_request()).await;
    let direct =
        test::call_and_read_body(&app, test::TestRequest::get().uri("/counter").to_request())
            .await;
    assert_eq!(via_redirect, direct);
}

#[actix_web::test]
async fn counter_page_renders_initial_zero_with_controls() {
    let app = test::init_service(
        App::new()
            .app_data(fresh_state())
            .configure(tally_web::configure),
    )
    .await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/counter").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("Tally"));
    assert!(html.contains(">0<"));
    assert!(html.contains("−"));
    assert!(html.contains("↺"));
    assert!(html.contains("+"));
    assert!(html.contains("Decrement"));
    assert!(html.contains("Reset"));
    assert!(html.contains("Increment"));
    assert!(html.contains("Click the buttons to change the counter value."));
}

#[actix_web::test]
async fn click_sequence_updates_value_and_rerenders() {
    let app = test::init_service(
        App::new()
            .app_data(fresh_state())
            .configure(tally_web::configure),
    )
    .await;

    let steps = [
        ("/api/counter/increment", 1),
        ("/api/counter/increment", 2),
        ("/api/counter/decrement", 1),
        ("/api/counter/reset", 0),
    ];
    for (path, expected) in steps {
        let counter: serde_json::Value =
            test::call_and_read_body_json(&app, test::TestRequest::post().uri(path).to_request())
                .await;
        assert_eq!(counter["value"], expected, "after POST {path}");
    }

    let body =
        test::call_and_read_body(&app, test::TestRequest::get().uri("/counter").to_request())
            .await;
    assert!(std::str::from_utf8(&body).unwrap().contains(">0<"));
}

#[actix_web::test]
async fn page_rerender_shows_mutated_value() {
    let app = test::init_service(
        App::new()
            .app_data(fresh_state())
            .configure(tally_web::configure),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/counter/increment")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body =
        test::call_and_read_body(&app, test::TestRequest::get().uri("/counter").to_request())
            .await;
    assert!(std::str::from_utf8(&body).unwrap().contains(">1<"));
}

#[actix_web::test]
async fn mutation_response_carries_full_record() {
    let app = test::init_service(
        App::new()
            .app_data(fresh_state())
            .configure(tally_web::configure),
    )
    .await;

    let counter: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/counter/increment")
            .to_request(),
    )
    .await;

    assert!(counter["id"].as_i64().unwrap() >= 1);
    assert_eq!(counter["value"], 1);
    let created_at = counter["created_at"].as_i64().unwrap();
    let updated_at = counter["updated_at"].as_i64().unwrap();
    assert!(created_at > 0);
    assert!(updated_at >= created_at);
}

#[actix_web::test]
async fn api_read_resolves_default_counter() {
    let app = test::init_service(
        App::new()
            .app_data(fresh_state())
            .configure(tally_web::configure),
    )
    .await;

    let first: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/counter").to_request(),
    )
    .await;
    let second: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/counter").to_request(),
    )
    .await;

    assert_eq!(first["value"], 0);
    assert_eq!(first["id"], second["id"]);
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = test::init_service(
        App::new()
            .app_data(fresh_state())
            .configure(tally_web::configure),
    )
    .await;

    let body: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/health").to_request(),
    )
    .await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "tally-web");
}
