use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use spacex_dash::config::SliderConfig;
use spacex_dash::data::loader::read_csv;
use spacex_dash::web::{build_router, WebState};

const LAUNCHES: &str = "\
Launch Site,Payload Mass (kg),class,Booster Version Category
CCAFS LC-40,0,0,v1.0
CCAFS LC-40,525,0,v1.0
VAFB SLC-4E,500,0,v1.1
KSC LC-39A,2490,1,FT
KSC LC-39A,5600,1,FT
VAFB SLC-4E,9600,1,FT
";

fn test_app() -> Router {
    let dataset = read_csv(LAUNCHES.as_bytes()).expect("dataset");
    build_router(Arc::new(WebState::new(
        Arc::new(dataset),
        SliderConfig::default(),
    )))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, content_type, body.to_vec())
}

async fn get_json(uri: &str) -> Value {
    let (status, _, body) = get(test_app(), uri).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).expect("json")
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (status, _, body) = get(test_app(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn controls_describe_dropdown_and_slider() {
    let json = get_json("/api/controls").await;
    let values: Vec<&str> = json["dropdown"]
        .as_array()
        .expect("dropdown")
        .iter()
        .filter_map(|o| o["value"].as_str())
        .collect();
    assert_eq!(values, ["ALL", "CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);
    assert_eq!(json["site"], "ALL");
    assert_eq!(json["slider"]["step"], 1000);
    assert_eq!(json["slider"]["max"], 10000);
    assert_eq!(json["slider"]["value"][0], 0.0);
    assert_eq!(json["slider"]["value"][1], 9600.0);
}

#[tokio::test]
async fn pie_for_all_sites_counts_launches() {
    let json = get_json("/api/charts/pie").await;
    assert_eq!(json["kind"], "pie");
    let total: u64 = json["slices"]
        .as_array()
        .expect("slices")
        .iter()
        .filter_map(|s| s["value"].as_u64())
        .sum();
    assert_eq!(total, 6);
}

#[tokio::test]
async fn pie_for_site_splits_outcomes() {
    let json = get_json("/api/charts/pie?site=VAFB+SLC-4E").await;
    assert_eq!(json["title"], "VAFB SLC-4E success and failure rate");
    assert_eq!(json["slices"][0]["label"], "0");
    assert_eq!(json["slices"][0]["value"], 1);
    assert_eq!(json["slices"][1]["label"], "1");
    assert_eq!(json["slices"][1]["value"], 1);
}

#[tokio::test]
async fn scatter_honours_site_and_range() {
    let json = get_json("/api/charts/scatter?site=KSC+LC-39A&payload_min=0&payload_max=3000").await;
    assert_eq!(json["kind"], "scatter");
    let series = json["series"].as_array().expect("series");
    assert_eq!(series.len(), 1);
    assert_eq!(series[0]["category"], "FT");
    assert_eq!(series[0]["points"][0]["x"], 2490.0);
    assert_eq!(series[0]["points"][0]["hover"], "KSC LC-39A");
}

#[tokio::test]
async fn invalid_controls_fall_back_to_defaults() {
    let json = get_json("/api/charts/scatter?site=Nowhere&payload_min=abc").await;
    assert_eq!(json["title"], "Success payload scatter");
    let points: usize = json["series"]
        .as_array()
        .expect("series")
        .iter()
        .map(|s| s["points"].as_array().map_or(0, Vec::len))
        .sum();
    assert_eq!(points, 6);
}

#[tokio::test]
async fn inverted_range_yields_empty_scatter() {
    let json = get_json("/api/charts/scatter?payload_min=5000&payload_max=1000").await;
    assert_eq!(json["series"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn svg_routes_return_svg() {
    let (status, content_type, body) = get(test_app(), "/charts/pie.svg?site=KSC+LC-39A").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
    let svg = String::from_utf8(body).expect("utf8");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("KSC LC-39A success and failure rate"));

    let (_, content_type, body) = get(test_app(), "/charts/scatter.svg").await;
    assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
    assert!(String::from_utf8(body).expect("utf8").contains("<circle"));
}

#[tokio::test]
async fn index_renders_controls_and_charts() {
    let (status, content_type, body) = get(test_app(), "/?site=VAFB+SLC-4E&payload_min=0&payload_max=1000").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap_or_default().starts_with("text/html"));
    let html = String::from_utf8(body).expect("utf8");
    assert!(html.contains("SpaceX Launch Records Dashboard"));
    assert!(html.contains(r#"<option value="VAFB SLC-4E" selected>"#));
    assert!(html.contains(r#"<input type="hidden" name="payload_max" value="1000">"#));
    assert!(html.contains(r#"id="success-pie-chart"><svg"#));
    assert!(html.contains(r#"id="success-payload-scatter-chart"><svg"#));
}

#[tokio::test]
async fn form_resubmits_off_grid_default_bounds_exactly() {
    let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
               A,600,1,FT\n\
               A,700,0,FT\n\
               B,9600,1,FT\n";
    let dataset = read_csv(csv.as_bytes()).expect("dataset");
    let app = build_router(Arc::new(WebState::new(
        Arc::new(dataset),
        SliderConfig::default(),
    )));

    let (status, _, body) = get(app.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).expect("utf8");
    assert!(html.contains(r#"<input type="hidden" name="payload_min" value="600">"#));
    assert!(html.contains(r#"<input type="hidden" name="payload_max" value="9600">"#));
    // Step-snapped thumbs must not be submitted under the control names.
    assert!(!html.contains(r#"type="range" name="#));

    // What the browser sends when only the dropdown changes.
    let (_, _, body) = get(app, "/api/charts/scatter?site=ALL&payload_min=600&payload_max=9600").await;
    let json: Value = serde_json::from_slice(&body).expect("json");
    let points: usize = json["series"]
        .as_array()
        .expect("series")
        .iter()
        .map(|s| s["points"].as_array().map_or(0, Vec::len))
        .sum();
    assert_eq!(points, 3);
}
