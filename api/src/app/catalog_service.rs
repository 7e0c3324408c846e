//! Catalog service
//!
//! Product browsing: listing with category/search filters, lookup, and
//! "you might also like" recommendations.

use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::app::seed::seed_products;
use crate::domain::entities::{CategoryFilter, Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::AppError;

/// Default number of recommendations shown after checkout
pub const DEFAULT_RECOMMENDATIONS: usize = 3;

/// Service for browsing the catalog
pub struct CatalogService {
    products: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Upsert the starter catalog
    pub async fn seed(&self) -> Result<usize, AppError> {
        let products = seed_products();
        self.products.upsert_catalog(&products).await?;
        Ok(products.len())
    }

    /// List products.
    ///
    /// A non-empty search matches names across every category; otherwise the
    /// category filter applies.
    pub async fn list(
        &self,
        filter: CategoryFilter,
        search: Option<&str>,
    ) -> Result<Vec<Product>, AppError> {
        let products = self.products.find_all().await?;
        let search = search.map(str::trim).filter(|s| !s.is_empty());

        Ok(products
            .into_iter()
            .filter(|p| match search {
                Some(term) => p.name_matches(term),
                None => filter.matches(p.category),
            })
            .collect())
    }

    pub async fn get(&self, id: &ProductId) -> Result<Product, AppError> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
    }

    /// Pick up to `limit` random products that are not in `exclude`
    pub async fn recommend(
        &self,
        exclude: &[ProductId],
        limit: usize,
    ) -> Result<Vec<Product>, AppError> {
        let candidates: Vec<Product> = self
            .products
            .find_all()
            .await?
            .into_iter()
            .filter(|p| !exclude.contains(&p.id))
            .collect();

        let mut rng = rand::thread_rng();
        Ok(candidates
            .choose_multiple(&mut rng, limit)
            .cloned()
            .collect())
    }
}
