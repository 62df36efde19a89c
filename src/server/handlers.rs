use super::page::INDEX_HTML;
use super::SharedEngine;
use crate::core::charts::{PieChart, ScatterChart};
use crate::core::layout::Layout;
use crate::domain::model::ALL_SITES;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PieQuery {
    pub site: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScatterQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
    pub sites: usize,
    pub successes: usize,
    pub min_payload_kg: Option<f64>,
    pub max_payload_kg: Option<f64>,
    pub loaded_at: DateTime<Utc>,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health(State(engine): State<SharedEngine>) -> Json<HealthResponse> {
    let summary = engine.summary();
    Json(HealthResponse {
        status: "ok".to_string(),
        records: summary.records,
        sites: summary.sites.len(),
        successes: summary.successes,
        min_payload_kg: summary.min_payload_kg,
        max_payload_kg: summary.max_payload_kg,
        loaded_at: summary.loaded_at,
    })
}

pub async fn layout(State(engine): State<SharedEngine>) -> Json<Layout> {
    Json(engine.layout().clone())
}

pub async fn pie(State(engine): State<SharedEngine>, Query(query): Query<PieQuery>) -> Json<PieChart> {
    let site = query.site.as_deref().unwrap_or(ALL_SITES);
    Json(engine.pie(site))
}

pub async fn scatter(
    State(engine): State<SharedEngine>,
    Query(query): Query<ScatterQuery>,
) -> Result<Json<ScatterChart>, StatusCode> {
    // NaN / inf 也能解析成 f64，需另外擋下
    if [query.low, query.high].into_iter().flatten().any(|v| !v.is_finite()) {
        tracing::debug!("Rejecting non-finite payload bounds: {:?}", query);
        return Err(StatusCode::BAD_REQUEST);
    }

    let site = query.site.as_deref().unwrap_or(ALL_SITES);
    Ok(Json(engine.scatter(site, query.low, query.high)))
}
