//! Product handlers
//!
//! Public catalog endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::app::DEFAULT_RECOMMENDATIONS;
use crate::domain::entities::{CategoryFilter, Product, ProductId};
use crate::error::AppError;
use crate::AppState;

/// Upper bound on `limit` for recommendations
const MAX_RECOMMENDATIONS: usize = 12;

/// Query parameters for listing products
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Query parameters for recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    /// Comma-separated product ids, usually the ones just bought
    #[serde(default)]
    pub exclude: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_RECOMMENDATIONS
}

impl RecommendationsQuery {
    fn excluded_ids(&self) -> Vec<ProductId> {
        self.exclude
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(ProductId::from)
            .collect()
    }
}

/// GET /api/products
///
/// List products, optionally filtered by category or a name search.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<Product>>, AppError> {
    let filter: CategoryFilter = query
        .category
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(AppError::BadRequest)?;

    let products = state
        .catalog
        .list(filter, query.search.as_deref())
        .await?;

    Ok(Json(products))
}

/// GET /api/products/recommendations
pub async fn recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationsQuery>,
) -> Result<Json<Vec<Product>>, AppError> {
    let limit = query.limit.min(MAX_RECOMMENDATIONS);
    let products = state
        .catalog
        .recommend(&query.excluded_ids(), limit)
        .await?;

    Ok(Json(products))
}

/// GET /api/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = state.catalog.get(&ProductId::from(id)).await?;
    Ok(Json(product))
}
