//! HTTP rendering surface.
//!
//! Every request carries the full control state in its query string
//! (`site`, `payload_min`, `payload_max`), so each request drives its own
//! transient [`Controller`] over the shared dataset.

pub mod page;
pub mod svg;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::chart::ChartSpec;
use crate::color::ColorMap;
use crate::config::{Settings, SliderConfig};
use crate::controller::{ChartBoard, ChartSlot, ControlEvent, ControlsDescriptor, Controller};
use crate::data::model::{LaunchDataset, PayloadRange};

/// Read-only state shared by all handlers.
pub struct WebState {
    dataset: Arc<LaunchDataset>,
    slider: SliderConfig,
    category_colors: ColorMap,
}

impl WebState {
    pub fn new(dataset: Arc<LaunchDataset>, slider: SliderConfig) -> Self {
        let category_colors = ColorMap::new(dataset.booster_categories().iter().map(String::as_str));
        Self {
            dataset,
            slider,
            category_colors,
        }
    }

    /// A controller positioned on the control values of `query`.
    fn session(&self, query: &ControlQuery) -> Controller {
        let mut controller = Controller::new(Arc::clone(&self.dataset));
        if let Some(site) = &query.site {
            controller.apply(ControlEvent::SiteSelected(site.clone()));
        }

        let current = controller.controls().payload;
        let min = parse_bound("payload_min", query.payload_min.as_deref()).unwrap_or(current.min);
        let max = parse_bound("payload_max", query.payload_max.as_deref()).unwrap_or(current.max);
        controller.apply(ControlEvent::PayloadRangeChanged(PayloadRange::new(min, max)));
        controller
    }
}

/// Raw control values; anything unparseable falls back to the default.
#[derive(Debug, Default, Deserialize)]
pub struct ControlQuery {
    site: Option<String>,
    payload_min: Option<String>,
    payload_max: Option<String>,
}

fn parse_bound(name: &str, raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            log::warn!("Ignoring invalid {name}={raw:?}");
            None
        }
    }
}

pub fn build_router(state: Arc<WebState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/api/controls", get(controls))
        .route("/api/charts/pie", get(pie_json))
        .route("/api/charts/scatter", get(scatter_json))
        .route("/charts/pie.svg", get(pie_svg))
        .route("/charts/scatter.svg", get(scatter_svg))
        .with_state(state)
}

/// Bind `settings.bind_addr` and serve the dashboard until Ctrl-C.
pub async fn serve(settings: &Settings, dataset: Arc<LaunchDataset>) -> anyhow::Result<()> {
    let addr: SocketAddr = settings
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.bind_addr))?;
    let app = build_router(Arc::new(WebState::new(dataset, settings.slider)));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    log::info!("Dashboard listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving dashboard")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn healthz() -> &'static str {
    "ok"
}

async fn index(
    State(state): State<Arc<WebState>>,
    Query(query): Query<ControlQuery>,
) -> Html<String> {
    let mut controller = state.session(&query);
    let mut board = ChartBoard::default();
    controller.render_all(&mut board);

    let pie = board.pie().map(svg::render_pie).unwrap_or_default();
    let scatter = board
        .scatter()
        .map(|chart| svg::render_scatter(chart, &state.category_colors))
        .unwrap_or_default();
    let descriptor = ControlsDescriptor::new(state.dataset.sites(), state.slider, controller.controls());

    Html(page::render_page(&descriptor, &pie, &scatter))
}

async fn controls(
    State(state): State<Arc<WebState>>,
    Query(query): Query<ControlQuery>,
) -> Json<ControlsDescriptor> {
    let controller = state.session(&query);
    Json(ControlsDescriptor::new(
        state.dataset.sites(),
        state.slider,
        controller.controls(),
    ))
}

async fn pie_json(
    State(state): State<Arc<WebState>>,
    Query(query): Query<ControlQuery>,
) -> Json<ChartSpec> {
    Json(state.session(&query).build(ChartSlot::SuccessPie))
}

async fn scatter_json(
    State(state): State<Arc<WebState>>,
    Query(query): Query<ControlQuery>,
) -> Json<ChartSpec> {
    Json(state.session(&query).build(ChartSlot::PayloadScatter))
}

async fn pie_svg(
    State(state): State<Arc<WebState>>,
    Query(query): Query<ControlQuery>,
) -> impl IntoResponse {
    let body = match state.session(&query).build(ChartSlot::SuccessPie) {
        ChartSpec::Pie(pie) => svg::render_pie(&pie),
        ChartSpec::Scatter(_) => String::new(),
    };
    ([(header::CONTENT_TYPE, "image/svg+xml")], body)
}

async fn scatter_svg(
    State(state): State<Arc<WebState>>,
    Query(query): Query<ControlQuery>,
) -> impl IntoResponse {
    let body = match state.session(&query).build(ChartSlot::PayloadScatter) {
        ChartSpec::Scatter(scatter) => svg::render_scatter(&scatter, &state.category_colors),
        ChartSpec::Pie(_) => String::new(),
    };
    ([(header::CONTENT_TYPE, "image/svg+xml")], body)
}
