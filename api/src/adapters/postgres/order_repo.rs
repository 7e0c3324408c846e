//! PostgreSQL adapter for OrderRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};

use super::{to_quantity, to_stock};
use crate::domain::entities::{
    Address, NewOrder, Order, OrderId, OrderItem, OrderStatus, ProductId,
};
use crate::domain::ports::{insufficient_stock, OrderRepository, StatusUpdate};
use crate::entity::{order_items, orders, products};
use crate::error::DomainError;

/// PostgreSQL implementation of OrderRepository
pub struct PostgresOrderRepository {
    db: DatabaseConnection,
}

impl PostgresOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Load items for the given orders, keyed by order id, in insertion order
async fn load_items<C: ConnectionTrait>(
    db: &C,
    order_ids: Vec<String>,
) -> Result<HashMap<String, Vec<order_items::Model>>, DomainError> {
    if order_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let items = order_items::Entity::find()
        .filter(order_items::Column::OrderId.is_in(order_ids))
        .order_by_asc(order_items::Column::Id)
        .all(db)
        .await?;

    let mut grouped: HashMap<String, Vec<order_items::Model>> = HashMap::new();
    for item in items {
        grouped.entry(item.order_id.clone()).or_default().push(item);
    }
    Ok(grouped)
}

/// A checkout that lost the race for its id reports the same conflict as
/// one that found the id taken up front
fn duplicate_or(err: DbErr, id: &OrderId) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::AlreadyExists(format!("Order {} already exists", id))
        }
        _ => err.into(),
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, new_order: &NewOrder) -> Result<Order, DomainError> {
        let txn = self.db.begin().await?;

        if orders::Entity::find_by_id(new_order.id.0.clone())
            .one(&txn)
            .await?
            .is_some()
        {
            txn.rollback().await?;
            return Err(DomainError::AlreadyExists(format!(
                "Order {} already exists",
                new_order.id
            )));
        }

        // Conditional decrement: a concurrent checkout can't push stock below zero
        for item in &new_order.items {
            let quantity = to_stock(item.quantity);
            let result = products::Entity::update_many()
                .col_expr(
                    products::Column::Stock,
                    Expr::col(products::Column::Stock).sub(quantity),
                )
                .filter(products::Column::Id.eq(item.product_id.0.clone()))
                .filter(products::Column::Stock.gte(quantity))
                .exec(&txn)
                .await?;

            if result.rows_affected == 0 {
                let product = products::Entity::find_by_id(item.product_id.0.clone())
                    .one(&txn)
                    .await?;
                if let Some(product) = product {
                    txn.rollback().await?;
                    return Err(insufficient_stock(&item.name, product.stock));
                }
            }
        }

        let now = Utc::now();
        let shipping_address = new_order
            .shipping_address
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        orders::ActiveModel {
            id: Set(new_order.id.0.clone()),
            date: Set(now.fixed_offset()),
            subtotal: Set(new_order.subtotal),
            discount: Set(new_order.discount),
            coupon_code: Set(new_order.coupon_code.clone()),
            coupon_discount: Set(new_order.coupon_discount),
            shipping_cost: Set(new_order.shipping_cost),
            total: Set(new_order.total),
            status: Set(OrderStatus::Pending.to_string()),
            payment_method: Set(new_order.payment_method.clone()),
            customer_name: Set(new_order.customer.name.clone()),
            customer_email: Set(new_order.customer.email.clone()),
            customer_phone: Set(new_order.customer.phone.clone()),
            document_number: Set(new_order.customer.document_number.clone()),
            shipping_address: Set(shipping_address),
        }
        .insert(&txn)
        .await
        .map_err(|e| duplicate_or(e, &new_order.id))?;

        for item in &new_order.items {
            order_items::ActiveModel {
                order_id: Set(new_order.id.0.clone()),
                product_id: Set(item.product_id.0.clone()),
                product_name: Set(item.name.clone()),
                price: Set(item.price),
                quantity: Set(to_stock(item.quantity)),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(Order::from_new(new_order.clone(), now))
    }

    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        let models = orders::Entity::find()
            .order_by_desc(orders::Column::Date)
            .all(&self.db)
            .await?;

        let mut items = load_items(&self.db, models.iter().map(|m| m.id.clone()).collect()).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let lines = items.remove(&m.id).unwrap_or_default();
                to_order(m, lines)
            })
            .collect())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let Some(model) = orders::Entity::find_by_id(id.0.clone())
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut items = load_items(&self.db, vec![model.id.clone()]).await?;
        let lines = items.remove(&model.id).unwrap_or_default();
        Ok(Some(to_order(model, lines)))
    }

    async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Option<StatusUpdate>, DomainError> {
        let txn = self.db.begin().await?;

        // Row lock so concurrent updates see each other's status as `previous`
        let Some(current) = orders::Entity::find_by_id(id.0.clone())
            .lock_exclusive()
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(None);
        };
        let previous = parse_status(&current.status);

        let updated = orders::ActiveModel {
            id: Set(id.0.clone()),
            status: Set(status.to_string()),
            ..Default::default()
        }
        .update(&txn)
        .await?;

        let mut items = load_items(&txn, vec![updated.id.clone()]).await?;
        txn.commit().await?;

        let lines = items.remove(&updated.id).unwrap_or_default();
        Ok(Some(StatusUpdate {
            order: to_order(updated, lines),
            previous,
        }))
    }
}

fn parse_status(raw: &str) -> OrderStatus {
    raw.parse().unwrap_or(OrderStatus::Pending)
}

/// Convert SeaORM models to a domain order
fn to_order(model: orders::Model, items: Vec<order_items::Model>) -> Order {
    Order {
        id: OrderId(model.id),
        date: model.date.with_timezone(&Utc),
        items: items
            .into_iter()
            .map(|i| OrderItem {
                product_id: ProductId(i.product_id),
                name: i.product_name,
                price: i.price,
                quantity: to_quantity(i.quantity),
            })
            .collect(),
        subtotal: model.subtotal,
        discount: model.discount,
        coupon_code: model.coupon_code,
        coupon_discount: model.coupon_discount,
        shipping_cost: model.shipping_cost,
        total: model.total,
        status: parse_status(&model.status),
        payment_method: model.payment_method,
        customer_name: model.customer_name,
        customer_email: model.customer_email,
        customer_phone: model.customer_phone,
        document_number: model.document_number,
        shipping_address: model
            .shipping_address
            .and_then(|v| serde_json::from_value::<Address>(v).ok()),
    }
}
