//! PostgreSQL adapter for ProductRepository

use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::entities::{Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::entity::products;
use crate::error::DomainError;

/// PostgreSQL implementation of ProductRepository
pub struct PostgresProductRepository {
    db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let results = products::Entity::find()
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await?;

        results.into_iter().map(Product::try_from).collect()
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let result = products::Entity::find_by_id(id.0.clone())
            .one(&self.db)
            .await?;

        result.map(Product::try_from).transpose()
    }

    async fn upsert_catalog(&self, catalog: &[Product]) -> Result<(), DomainError> {
        if catalog.is_empty() {
            return Ok(());
        }

        let models = catalog.iter().map(|p| products::ActiveModel {
            id: Set(p.id.0.clone()),
            name: Set(p.name.clone()),
            price: Set(p.price),
            category: Set(p.category.to_string()),
            image_url: Set(p.image_url.clone()),
            description: Set(p.description.clone()),
            stock: Set(p.stock),
        });

        // Stock is left alone on conflict so restarts don't refill the shelves
        products::Entity::insert_many(models)
            .on_conflict(
                OnConflict::column(products::Column::Id)
                    .update_columns([
                        products::Column::Name,
                        products::Column::Price,
                        products::Column::Category,
                        products::Column::ImageUrl,
                        products::Column::Description,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<products::Model> for Product {
    type Error = DomainError;

    fn try_from(model: products::Model) -> Result<Self, Self::Error> {
        let category = model.category.parse().map_err(|e: String| {
            DomainError::Database(format!("product {}: {}", model.id, e))
        })?;

        Ok(Product {
            id: ProductId(model.id),
            name: model.name,
            price: model.price,
            category,
            image_url: model.image_url,
            description: model.description,
            stock: model.stock.max(0),
        })
    }
}
