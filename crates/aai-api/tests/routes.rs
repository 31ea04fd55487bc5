use aai_api::app;
use aai_api::config::ApiConfig;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app(&ApiConfig::default())
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(uri: &str, body: &Value) -> (StatusCode, Value) {
    send(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

fn uas7_week(pairs: [(u8, u8); 7]) -> Value {
    let days: Vec<Value> = pairs
        .iter()
        .zip(1..)
        .map(|(&(wheals, itching), day)| {
            json!({ "day": day, "scores": { "wheals": wheals, "itching": itching } })
        })
        .collect();
    json!({ "kind": "day_sequence", "days": days })
}

#[tokio::test]
async fn health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn lists_instruments() {
    let (status, body) = get("/instruments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": "scorad", "name": "SCORAD", "max_score": 103.0 },
            { "id": "uas7", "name": "UAS7", "max_score": 42.0 },
        ])
    );
}

#[tokio::test]
async fn instrument_detail() {
    let (status, body) = get("/instruments/scorad").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["layout"]["kind"], "regional");
    assert_eq!(body["layout"]["regions"].as_array().map(Vec::len), Some(8));
    assert_eq!(body["max_score"], 103.0);
}

#[tokio::test]
async fn unknown_instrument_is_not_found() {
    let (status, body) = get("/instruments/pasi").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "instrument not found: pasi");

    let (status, _) = post("/instruments/pasi/compute", &uas7_week([(0, 0); 7])).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_input_round_trips_through_compute() {
    let (status, input) = get("/instruments/uas7/empty-input").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(input["kind"], "day_sequence");
    assert_eq!(input["days"].as_array().map(Vec::len), Some(7));

    let (status, result) = post("/instruments/uas7/compute", &input).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total"], 0);
    assert_eq!(result["interpretation"], "well-controlled");
}

#[tokio::test]
async fn computes_scorad() {
    let (_, mut input) = get("/instruments/scorad/empty-input").await;
    input["regions"]["headNeck"] = json!(100);
    input["regions"]["anteriorTrunk"] = json!(100);
    input["groups"]["intensity"]["redness"] = json!(2);
    input["groups"]["intensity"]["swelling"] = json!(1);
    input["groups"]["intensity"]["scratchMarks"] = json!(1);
    input["groups"]["intensity"]["dryness"] = json!(2);
    input["groups"]["subjective"]["itch"] = json!(6);
    input["groups"]["subjective"]["sleeplessness"] = json!(4);

    let (status, result) = post("/instruments/scorad/compute", &input).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["instrument_id"], "scorad");
    assert_eq!(result["total"], 36.4);
    assert_eq!(result["interpretation"], "moderate");
    assert_eq!(result["components"][0]["id"], "area");
    assert_eq!(result["components"][0]["value"], 27.0);
    assert_eq!(result["components"][1]["value"], 6);
    assert!(result.get("daily_scores").is_none());
}

#[tokio::test]
async fn computes_uas7_week() {
    let input = uas7_week([(2, 2), (1, 1), (3, 3), (0, 0), (1, 2), (2, 1), (1, 1)]);
    let (status, result) = post("/instruments/uas7/compute", &input).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total"], 20);
    assert_eq!(result["components"][1]["id"], "average_daily");
    assert_eq!(result["components"][1]["value"], 2.9);
    assert_eq!(result["daily_scores"][2]["daily_total"], 6);
    assert_eq!(result["interpretation"], "severe");
}

#[tokio::test]
async fn validate_reports_problems_with_200() {
    let mut input = uas7_week([(0, 0); 7]);
    input["days"][1]["day"] = json!(1);
    input["days"][0]["scores"]["wheals"] = json!(5);

    let (status, report) = post("/instruments/uas7/validate", &input).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["valid"], false);
    assert_eq!(report["errors"].as_array().map(Vec::len), Some(2));
    assert_eq!(report["errors"][0]["kind"], "field_domain");
    assert_eq!(report["errors"][0]["message"], "Day 1 wheals: 5 is out of range (0-3)");
    assert_eq!(report["errors"][0]["field"], "Day 1 wheals");
    assert_eq!(report["errors"][0]["value"], 5.0);
    assert_eq!(report["errors"][0]["expected_range"]["max"], 3.0);
    assert_eq!(report["errors"][1]["kind"], "structural");
}

#[tokio::test]
async fn compute_rejects_invalid_scores_with_422() {
    let (_, mut input) = get("/instruments/scorad/empty-input").await;
    input["regions"]["headNeck"] = json!(-10);

    let (status, body) = post("/instruments/scorad/compute", &input).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"],
        "invalid SCORAD input: headNeck: -10% is out of range (0-100)"
    );
    assert_eq!(body["violations"][0]["field"], "headNeck");
}

#[tokio::test]
async fn wrong_input_kind_is_a_validation_error() {
    let (status, body) = post("/instruments/scorad/compute", &uas7_week([(0, 0); 7])).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"],
        "invalid SCORAD input: SCORAD expects regional input, got day_sequence"
    );
}

#[tokio::test]
async fn malformed_body_is_rejected_by_the_extractor() {
    let (status, _) = post("/instruments/uas7/compute", &json!({ "kind": "weekly" })).await;
    assert!(status.is_client_error());
}
