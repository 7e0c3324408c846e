//! Order handlers
//!
//! Checkout is public; listing and status changes are admin routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::PlaceOrderRequest;
use crate::domain::entities::{Order, OrderId, OrderStatus};
use crate::error::AppError;
use crate::{AppState, StorageMode};

/// Response after placing an order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub message: &'static str,
    pub order_id: OrderId,
    pub mode: &'static str,
    pub order: Order,
}

/// Request to change an order's status
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusResponse {
    pub message: String,
    pub order_id: OrderId,
    pub status: OrderStatus,
}

/// POST /api/orders
pub async fn place_order(
    State(state): State<AppState>,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<PlaceOrderResponse>), AppError> {
    let order = state.orders.place_order(request).await?;

    let message = match state.storage {
        StorageMode::Postgres => "Pedido recibido correctamente",
        StorageMode::Memory => "Pedido recibido correctamente (modo fallback)",
    };

    Ok((
        StatusCode::CREATED,
        Json(PlaceOrderResponse {
            message,
            order_id: order.id.clone(),
            mode: state.storage.as_str(),
            order,
        }),
    ))
}

/// GET /api/orders
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, AppError> {
    Ok(Json(state.orders.list_orders().await?))
}

/// GET /api/orders/:id
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, AppError> {
    Ok(Json(state.orders.get_order(&OrderId(id)).await?))
}

/// PATCH /api/orders/:id/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<UpdateStatusResponse>, AppError> {
    let order = state
        .orders
        .update_status(&OrderId(id), &request.status)
        .await?;

    Ok(Json(UpdateStatusResponse {
        message: format!("Estado actualizado a \"{}\"", order.status),
        order_id: order.id,
        status: order.status,
    }))
}
