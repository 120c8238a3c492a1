use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use market_tracker_core::stocks::StockRecord;

#[derive(serde::Deserialize)]
struct StockQuery {
    #[serde(default)]
    symbol: String,
}

async fn get_stock(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<StockRecord>> {
    let record = state.stock_service.fetch_stock_data(&symbol).await?;
    Ok(Json(record))
}

/// Query-string form; a missing `symbol` reaches the service as empty.
async fn search_stock(
    Query(query): Query<StockQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<StockRecord>> {
    let record = state.stock_service.fetch_stock_data(&query.symbol).await?;
    Ok(Json(record))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stocks", get(search_stock))
        .route("/stocks/{symbol}", get(get_stock))
}
