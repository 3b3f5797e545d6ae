mod common;

use actix_web::test;
use serde_json::Value;

use common::TestApp;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[actix_rt::test]
async fn test_train_budget() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/budget?nb_days=2&nb_people=2&hotel_stars=3&transport_mode=train")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["hotel_per_night"], 80.0);
    assert_eq!(body["hotel_total"], 160.0);
    assert_eq!(body["meals_total"], 148.0);
    assert_eq!(body["transport_total"], 37.5);
    assert!(approx_eq(body["local_transport"].as_f64().unwrap(), 9.28));
    assert!(approx_eq(body["grand_total"].as_f64().unwrap(), 354.78));
    assert_eq!(body["budget_cap"], 1500.0);
    assert!(approx_eq(body["remaining"].as_f64().unwrap(), 1145.22));
    assert_eq!(body["comparison"]["train_total"], 75.0);
}

#[actix_rt::test]
async fn test_car_budget_with_custom_cap() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/budget?nb_days=3&nb_people=1&hotel_stars=1&transport_mode=car&budget_cap=300")
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["transport_total"], 65.0);
    assert_eq!(body["local_transport"], 0.0);
    assert_eq!(body["grand_total"], 356.0);
    assert_eq!(body["remaining"], -56.0);
}

#[actix_rt::test]
async fn test_budget_rejects_out_of_range_values() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    for uri in [
        "/api/budget?nb_days=0&nb_people=2&hotel_stars=3&transport_mode=train",
        "/api/budget?nb_days=2&nb_people=11&hotel_stars=3&transport_mode=train",
        "/api/budget?nb_days=2&nb_people=2&hotel_stars=6&transport_mode=car",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "{}", uri);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }
}

#[actix_rt::test]
async fn test_budget_unknown_transport_mode() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/budget?nb_days=2&nb_people=2&hotel_stars=3&transport_mode=plane")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn test_budget_rejects_non_finite_cap() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    for cap in ["NaN", "inf"] {
        let uri = format!(
            "/api/budget?nb_days=2&nb_people=2&hotel_stars=3&transport_mode=train&budget_cap={}",
            cap
        );
        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "{}", cap);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("budget_cap"));
    }
}
